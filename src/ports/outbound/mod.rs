/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the product store, the console and the output destination.
pub mod formatter;
pub mod output_presenter;
pub mod product_lookup;
pub mod progress_reporter;

pub use formatter::CompositionFormatter;
pub use output_presenter::OutputPresenter;
pub use product_lookup::{LookupContext, ProductLookup};
pub use progress_reporter::ProgressReporter;
