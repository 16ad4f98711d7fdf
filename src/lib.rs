//! bom-resolver - Bill-of-materials resolution engine
//!
//! This library expands a root product barcode into the full multi-level
//! composition tree of view nodes, enriching every node with the product's
//! own metadata and the quantities of the edge that reached it.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_resolution`): Barcodes, product records, view nodes,
//!   the depth policy and the recursive expander
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Catalog files, the HTTP document store, formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_resolver::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Load products and create the use case
//! let store = FileSystemCatalogReader::new().read_catalog(Path::new("catalog.json"))?;
//! let use_case = ResolveCompositionUseCase::new(store, StderrProgressReporter::new());
//!
//! // Resolve
//! let request = CompositionRequest::builder()
//!     .tenant("shop-1")
//!     .barcode("8850001")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let model = CompositionReadModelBuilder::build(&response, Some("en"))?;
//! println!("{}", JsonFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryProductStore;
    pub use crate::adapters::outbound::network::HttpProductLookup;
    pub use crate::application::dto::{CompositionRequest, CompositionResponse, OutputFormat};
    pub use crate::application::read_models::{CompositionReadModel, CompositionReadModelBuilder};
    pub use crate::application::use_cases::ResolveCompositionUseCase;
    pub use crate::bom_resolution::domain::{
        Barcode, ComponentEdge, LocalizedName, ProductRecord, TenantId, ViewNode,
    };
    pub use crate::bom_resolution::policies::{DepthGuard, MAX_COMPOSITION_DEPTH};
    pub use crate::bom_resolution::services::{CompositionResolver, DEFAULT_RESOLUTION_TIMEOUT};
    pub use crate::ports::inbound::CompositionResolutionPort;
    pub use crate::ports::outbound::{
        CompositionFormatter, LookupContext, OutputPresenter, ProductLookup, ProgressReporter,
    };
    pub use crate::shared::error::{BomError, ExitCode, ResolveError};
    pub use crate::shared::Result;
}
