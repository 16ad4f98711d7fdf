/// Shared kernel - error types, result alias and cross-cutting helpers
pub mod error;
pub mod logging;
pub mod result;
pub mod security;

pub use result::Result;
