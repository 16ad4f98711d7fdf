/// Ports module - the seams between the resolution core and the outside
///
/// `inbound` is what a driver (the CLI, an HTTP handler) calls to resolve
/// compositions; `outbound` is what the core needs: product lookups,
/// progress output, formatting and presentation.
pub mod inbound;
pub mod outbound;
