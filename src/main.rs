use clap::{Args, Parser, Subcommand};
use health_plan_form::config::{AppConfig, ProgramsConfig};
use health_plan_form::error::AppError;
use health_plan_form::submissions::{
    decode, package_name, rate_name, FormDataReport, HealthPlanFormData, StateProgramCatalog,
};
use health_plan_form::telemetry;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "mc-review",
    about = "Check health plan packages for completeness and derive their display names",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a JSON report of every completeness check for a package
    Validate(PackageArgs),
    /// Print the package name, and the rate name when rates are filed
    Name(PackageArgs),
}

#[derive(Args, Debug)]
struct PackageArgs {
    /// Health plan package JSON file
    form: PathBuf,
    /// State program catalog JSON (overrides MCR_STATE_PROGRAMS_PATH)
    #[arg(long)]
    programs: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Validate(args) => run_validate(&config, args),
        Command::Name(args) => run_name(&config, args),
    }
}

fn run_validate(config: &AppConfig, args: PackageArgs) -> Result<(), AppError> {
    let (form, catalog) = load_inputs(config, args)?;
    let report = FormDataReport::build(&form, catalog.programs_for(&form.state_code));

    info!(
        package = %report.package_name,
        locked = report.checks.locked,
        violations = report.violations.len(),
        "validated health plan package"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_name(config: &AppConfig, args: PackageArgs) -> Result<(), AppError> {
    let (form, catalog) = load_inputs(config, args)?;
    let programs = catalog.programs_for(&form.state_code);

    println!("{}", package_name(&form, programs));
    if let Some(rate) = rate_name(&form, programs) {
        println!("{rate}");
    }
    Ok(())
}

fn load_inputs(
    config: &AppConfig,
    args: PackageArgs,
) -> Result<(HealthPlanFormData, StateProgramCatalog), AppError> {
    let form = decode::from_path(&args.form)?;
    let catalog = load_catalog(catalog_path(args.programs, &config.programs))?;

    if catalog.programs_for(&form.state_code).is_empty() && !form.program_ids.is_empty() {
        warn!(state = %form.state_code, "state has no configured programs");
    }

    Ok((form, catalog))
}

/// `--programs` takes precedence over `MCR_STATE_PROGRAMS_PATH`.
fn catalog_path(flag: Option<PathBuf>, config: &ProgramsConfig) -> Option<PathBuf> {
    flag.or_else(|| config.catalog_path.clone())
}

fn load_catalog(path: Option<PathBuf>) -> Result<StateProgramCatalog, AppError> {
    match path {
        Some(path) => Ok(StateProgramCatalog::from_path(path)?),
        None => {
            warn!("no state program catalog configured; program names resolve as unknown");
            Ok(StateProgramCatalog::default())
        }
    }
}
