/// Bill-of-materials resolution core
///
/// - `domain`: barcodes, product records, view nodes and the request-scoped cache
/// - `policies`: the depth cap and optional cycle detection
/// - `services`: view assembly, recursive expansion and the resolution entry point
pub mod domain;
pub mod policies;
pub mod services;
