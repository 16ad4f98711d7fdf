/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod composition_request;
mod composition_response;
mod output_format;
mod resolution_metadata;

pub use composition_request::{CompositionRequest, CompositionRequestBuilder};
pub use composition_response::CompositionResponse;
pub use output_format::OutputFormat;
pub use resolution_metadata::ResolutionMetadata;
