/// Use cases module containing application business logic orchestration
mod resolve_composition;

pub use resolve_composition::ResolveCompositionUseCase;
