/// Outbound adapters grouped by the infrastructure they talk to
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod memory;
pub mod network;
