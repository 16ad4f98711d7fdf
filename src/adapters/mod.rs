/// Adapters layer - concrete implementations of the outbound ports
///
/// Product stores (catalog files, in-memory, HTTP), console progress,
/// document formatters and output presenters.
pub mod outbound;
