/// Version injected at compile time via GCE_MV_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("GCE_MV_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gce_multiversion::codegen::{self, registry, ModelGenerator, ServiceGenerator};
use gce_multiversion::config::Config;
use gce_multiversion::gcp::http::format_api_error;
use gce_multiversion::multiversion::{
    ClientSet, ComputeMultiversionService, OperationWaiter, ScopeType,
};
use gce_multiversion::shared;
use gce_multiversion::version::{ApiVersion, ORDERED_VERSIONS};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Multiversion Compute Engine dispatcher and code generator
#[derive(Parser, Debug)]
#[command(name = "gce-mv", version, about, long_about = None)]
struct Args {
    /// GCP project to use
    #[arg(short, long, global = true)]
    project: Option<String>,

    /// Also configure the beta API client
    #[arg(long, global = true)]
    beta: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the canonical model from the embedded schemas
    GenModel {
        /// Print a single canonical type to stdout instead
        #[arg(long = "type")]
        type_name: Option<String>,
        /// Source directory holding `shared/generated.rs`
        #[arg(long, default_value = "src")]
        src: PathBuf,
        /// Only report whether the checked-in file is stale
        #[arg(long)]
        check: bool,
    },
    /// Generate the multiversion dispatcher methods
    GenService {
        /// Print the methods of a single resource to stdout instead
        #[arg(long)]
        resource: Option<String>,
        /// Source directory holding `multiversion/generated.rs`
        #[arg(long, default_value = "src")]
        src: PathBuf,
        #[arg(long)]
        check: bool,
    },
    /// Print the version dispatch table
    Versions,
    /// Wait for an operation to finish
    WaitOperation {
        #[arg(long, value_enum)]
        scope: ScopeArg,
        /// Region or zone name, defaults to the configured one for the scope
        #[arg(long)]
        qualifier: Option<String>,
        name: String,
    },
    /// Delete an instance group manager and wait until it is gone
    DeleteInstanceGroupManager {
        #[arg(short, long)]
        zone: Option<String>,
        #[arg(long, default_value = "v1")]
        api_version: ApiVersion,
        name: String,
    },
    /// Save defaults, together with --project and --beta, to the config file
    Configure {
        #[arg(short, long)]
        zone: Option<String>,
        #[arg(short, long)]
        region: Option<String>,
        /// Compute API root, for emulators
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    Global,
    Region,
    Zone,
}

impl From<ScopeArg> for ScopeType {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Global => ScopeType::Global,
            ScopeArg::Region => ScopeType::Region,
            ScopeArg::Zone => ScopeType::Zone,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // RUST_LOG directives refine the chosen level, e.g. `gce_multiversion::gcp=trace`
    let filter = EnvFilter::builder()
        .with_default_directive(tracing_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("gce-mv {} started with log level: {:?}", VERSION, level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("gce-mv").join("gce-mv.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".gce-mv").join("gce-mv.log");
    }
    PathBuf::from("gce-mv.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load().context("Failed to load configuration")?;
    if args.project.is_some() {
        config.project_id = args.project.clone();
    }
    config.enable_beta |= args.beta;

    match args.command {
        Command::GenModel {
            type_name,
            src,
            check,
        } => gen_model(type_name.as_deref(), &src, check),
        Command::GenService {
            resource,
            src,
            check,
        } => gen_service(resource.as_deref(), &src, check),
        Command::Versions => {
            print_versions();
            Ok(())
        }
        Command::WaitOperation {
            scope,
            qualifier,
            name,
        } => {
            let scope = ScopeType::from(scope);
            let qualifier = qualifier.or_else(|| config.effective_qualifier(scope));
            wait_operation(&config, scope, qualifier.as_deref(), &name).await
        }
        Command::DeleteInstanceGroupManager {
            zone,
            api_version,
            name,
        } => {
            let zone = zone
                .or_else(|| config.effective_zone())
                .context("No zone configured, pass --zone")?;
            delete_instance_group_manager(&config, &zone, api_version, &name).await
        }
        Command::Configure {
            zone,
            region,
            endpoint,
        } => configure(config, zone, region, endpoint),
    }
}

fn configure(
    mut config: Config,
    zone: Option<String>,
    region: Option<String>,
    endpoint: Option<String>,
) -> Result<()> {
    if zone.is_some() {
        config.zone = zone;
    }
    if region.is_some() {
        config.region = region;
    }
    if endpoint.is_some() {
        config.endpoint = endpoint;
    }
    config.validate()?;
    let path = config.save().context("Failed to save configuration")?;
    println!("saved {}", path.display());
    Ok(())
}

fn gen_model(type_name: Option<&str>, src: &std::path::Path, check: bool) -> Result<()> {
    if let Some(type_name) = type_name {
        let schema = registry::canonical_schema();
        let mut generator = ModelGenerator::new(schema).production(ApiVersion::newest());
        for version in ORDERED_VERSIONS {
            if let Some(target) = registry::schema(version) {
                generator = generator.with_target(target);
            }
        }
        print!("{}", generator.render_type(type_name)?);
        return Ok(());
    }

    let contents = codegen::render_model()?;
    report(codegen::emit(src, codegen::MODEL_FILE, &contents, check)?, check)
}

fn gen_service(resource: Option<&str>, src: &std::path::Path, check: bool) -> Result<()> {
    if let Some(resource) = resource {
        let descriptor = registry::descriptor(resource)
            .with_context(|| format!("Unknown resource '{}'", resource))?;
        print!("{}", codegen::service::render_resource(descriptor)?);
        return Ok(());
    }

    let contents = ServiceGenerator::new(registry::descriptors()).render_module()?;
    report(codegen::emit(src, codegen::SERVICE_FILE, &contents, check)?, check)
}

fn report(generated: codegen::Generated, check: bool) -> Result<()> {
    match (check, generated.updated) {
        (true, true) => bail!("{} is out of date", generated.path.display()),
        (false, true) => println!("updated {}", generated.path.display()),
        (_, false) => println!("{} is up to date", generated.path.display()),
    }
    Ok(())
}

fn print_versions() {
    let table = gce_multiversion::multiversion::DispatchTable::from_descriptors(
        registry::descriptors(),
    );
    for (resource, verb, versions) in table.iter() {
        let versions: Vec<String> = versions.iter().map(ToString::to_string).collect();
        println!("{:<24} {:<8} {}", resource, verb, versions.join(", "));
    }
}

async fn connect(config: &Config) -> Result<(ComputeMultiversionService, String)> {
    let project = config
        .effective_project()
        .context("No project configured, pass --project or set CLOUDSDK_CORE_PROJECT")?;
    let clients = ClientSet::from_config(config)
        .await
        .context("Failed to initialize Compute clients")?;
    Ok((ComputeMultiversionService::new(clients), project))
}

async fn wait_operation(
    config: &Config,
    scope: ScopeType,
    qualifier: Option<&str>,
    name: &str,
) -> Result<()> {
    let (service, project) = connect(config).await?;
    let current = service
        .wait_operation(&project, name, scope, qualifier)
        .await
        .map_err(|e| anyhow::anyhow!(format_api_error(&e)))?;

    let waiter = OperationWaiter::new(&service, config.wait_policy());
    let done: shared::Operation = waiter
        .wait(&project, current, scope, qualifier, "Waiting for operation")
        .await
        .map_err(|e| anyhow::anyhow!(format_api_error(&e)))?;

    println!("{} {} {}", done.name, done.status, done.target_link);
    Ok(())
}

async fn delete_instance_group_manager(
    config: &Config,
    zone: &str,
    version: ApiVersion,
    name: &str,
) -> Result<()> {
    let (service, project) = connect(config).await?;
    let manager = service
        .get_instance_group_manager(&project, zone, name, version)
        .await
        .map_err(|e| anyhow::anyhow!(format_api_error(&e)))
        .with_context(|| format!("Failed to read instance group manager {}", name))?;

    service
        .delete_instance_group_manager_and_wait(
            &project,
            zone,
            name,
            manager.target_size,
            version,
            &config.delete_policy(),
        )
        .await
        .map_err(|e| anyhow::anyhow!(format_api_error(&e)))
        .context("Error deleting instance group manager")?;

    println!("deleted {}", name);
    Ok(())
}
