/// Filesystem adapters for catalog loading and file output
mod catalog_reader;
mod file_writer;

pub use catalog_reader::{CatalogFormat, FileSystemCatalogReader};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
