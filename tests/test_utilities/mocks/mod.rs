/// Mock implementations for testing
mod mock_product_lookup;
mod mock_progress_reporter;

pub use mock_product_lookup::MockProductLookup;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
