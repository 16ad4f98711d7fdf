mod cli;
mod config;

use bom_resolver::adapters::outbound::console::StderrProgressReporter;
use bom_resolver::adapters::outbound::filesystem::FileSystemCatalogReader;
use bom_resolver::adapters::outbound::network::HttpProductLookup;
use bom_resolver::application::dto::{CompositionRequest, CompositionResponse, OutputFormat};
use bom_resolver::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use bom_resolver::application::read_models::CompositionReadModelBuilder;
use bom_resolver::application::use_cases::ResolveCompositionUseCase;
use bom_resolver::bom_resolution::services::DEFAULT_RESOLUTION_TIMEOUT;
use bom_resolver::ports::inbound::CompositionResolutionPort;
use bom_resolver::ports::outbound::{ProductLookup, ProgressReporter};
use bom_resolver::shared::error::{BomError, ExitCode};
use bom_resolver::shared::logging::init_logger;
use bom_resolver::shared::Result;
use clap::Parser;
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// Where product records come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum ProductSource {
    Catalog(PathBuf),
    Store { url: String, token: Option<String> },
}

/// CLI arguments merged over the config file
#[derive(Debug)]
struct Settings {
    barcodes: Vec<String>,
    tenant: Option<String>,
    source: ProductSource,
    format: OutputFormat,
    output: Option<PathBuf>,
    timeout: Duration,
    detect_cycles: bool,
    lang: Option<String>,
}

impl Settings {
    /// Command-line values win; the config file fills the gaps.
    fn merge(args: Args, config: ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let source = if let Some(path) = args.catalog {
            ProductSource::Catalog(path)
        } else if let Some(url) = args.store_url {
            ProductSource::Store {
                url,
                token: args.store_token.or(config.store_token),
            }
        } else if let Some(path) = config.catalog {
            ProductSource::Catalog(path)
        } else if let Some(url) = config.store_url {
            ProductSource::Store {
                url,
                token: args.store_token.or(config.store_token),
            }
        } else {
            return Err(BomError::Validation {
                message: "No product source given. Use --catalog <PATH> or --store-url <URL>, or set one in bom-resolver.config.yml".to_string(),
            }
            .into());
        };

        let timeout = args
            .timeout
            .or(config.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RESOLUTION_TIMEOUT);

        Ok(Self {
            barcodes: args.barcodes,
            tenant: args.tenant.or(config.tenant),
            source,
            format,
            output: args.output,
            timeout,
            detect_cycles: args.detect_cycles || config.detect_cycles.unwrap_or(false),
            lang: args.lang.or(config.lang),
        })
    }

    fn request(&self) -> Result<CompositionRequest> {
        let mut builder = CompositionRequest::builder()
            .barcodes(self.barcodes.iter().cloned())
            .timeout(Some(self.timeout))
            .detect_cycles(self.detect_cycles);
        if let Some(tenant) = &self.tenant {
            builder = builder.tenant(tenant.clone());
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logger(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n{} {}\n", "❌".red(), "An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };

    let settings = Settings::merge(args, config)?;
    let request = settings.request()?;

    let response = match &settings.source {
        ProductSource::Catalog(path) => {
            eprintln!("📖 Loading catalog from: {}", path.display());
            let store = FileSystemCatalogReader::new().read_catalog(path)?;
            resolve(store, request).await?
        }
        ProductSource::Store { url, token } => {
            let lookup = HttpProductLookup::new(url, token.clone())?;
            eprintln!("🌐 Using document store: {}", lookup.base_url());
            resolve(lookup, request).await?
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = CompositionReadModelBuilder::build(&response, settings.lang.as_deref())?;
    let document = FormatterFactory::create(settings.format).format(&model)?;

    PresenterFactory::create(PresenterType::from_output(settings.output)).present(&document)?;

    Ok(())
}

async fn resolve<L: ProductLookup>(lookup: L, request: CompositionRequest) -> Result<CompositionResponse> {
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!(
        "⏱️  Deadline per composition: {}s",
        request.timeout.map(|t| t.as_secs()).unwrap_or_default()
    ));

    let use_case = ResolveCompositionUseCase::new(lookup, progress_reporter);
    use_case.resolve(request).await
}
