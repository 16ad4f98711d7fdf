/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod composition_resolution_port;

pub use composition_resolution_port::CompositionResolutionPort;
