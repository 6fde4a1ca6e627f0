mod cli;

use cd_license_check::adapters::outbound::console::StderrProgressReporter;
use cd_license_check::adapters::outbound::filesystem::FileSystemReader;
use cd_license_check::adapters::outbound::network::{
    CachingContentDataRepository, ClearlyDefinedRepository, ClientConfig,
};
use cd_license_check::application::dto::{CheckRequest, OutputFormat};
use cd_license_check::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use cd_license_check::application::read_models::{ReportReadModelBuilder, ReportSummary};
use cd_license_check::application::use_cases::CheckLicensesUseCase;
use cd_license_check::config::{self, ConfigFile};
use cd_license_check::license_review::policies::{
    ApprovalPolicy, DEFAULT_APPROVED_LICENSES, DEFAULT_THRESHOLD,
};
use cd_license_check::ports::outbound::InputSource;
use cd_license_check::shared::error::ExitCode;
use cd_license_check::shared::Result;
use cli::Args;
use owo_colors::{OwoColorize, Stream};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file with CLI arguments
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    exclude: Vec<String>,
    approved_licenses: Vec<String>,
    threshold: i64,
    client: ClientConfig,
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config)?;

    // Create adapters (Dependency Injection)
    let repository =
        CachingContentDataRepository::new(ClearlyDefinedRepository::with_config(settings.client)?);
    let use_case = CheckLicensesUseCase::new(
        FileSystemReader::new(),
        repository,
        StderrProgressReporter::new(),
    );

    let request = CheckRequest::new(
        InputSource::from_arg(&args.input),
        settings.exclude,
        ApprovalPolicy::new(&settings.approved_licenses, settings.threshold),
    );
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = ReportReadModelBuilder::build(&response);
    let output = FormatterFactory::create(settings.format).format(&model)?;

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)?;

    print_summary(&model.summary);

    Ok(if response.requires_review() {
        ExitCode::ReviewRequired
    } else {
        ExitCode::Success
    })
}

/// Explicit `--config` wins; otherwise look in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// Scalars from the CLI override the config file; list options are merged.
/// The built-in approved licenses apply only when neither source lists any.
fn resolve_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();
    let defaults = ClientConfig::default();

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or(OutputFormat::Json),
    };

    let mut exclude = config.exclude.unwrap_or_default();
    exclude.extend(args.exclude.iter().cloned());

    let mut approved_licenses = config.approved_licenses.unwrap_or_default();
    approved_licenses.extend(args.approve_licenses.iter().cloned());
    if approved_licenses.is_empty() {
        approved_licenses = DEFAULT_APPROVED_LICENSES
            .iter()
            .map(|l| l.to_string())
            .collect();
    }

    let client = ClientConfig {
        base_url: args
            .url
            .clone()
            .or(config.clearlydefined_url)
            .unwrap_or(defaults.base_url),
        batch_size: args
            .batch_size
            .map(|size| size as usize)
            .or(config.batch_size)
            .unwrap_or(defaults.batch_size),
        timeout_seconds: args
            .timeout
            .or(config.timeout_seconds)
            .unwrap_or(defaults.timeout_seconds),
    };

    Ok(Settings {
        format,
        exclude,
        approved_licenses,
        threshold: args
            .threshold
            .or(config.threshold)
            .unwrap_or(DEFAULT_THRESHOLD),
        client,
    })
}

fn print_summary(summary: &ReportSummary) {
    let line = format!(
        "📊 {} checked: {} approved, {} restricted, {} not reviewed, {} unresolved, {} invalid",
        summary.total,
        summary.approved,
        summary.restricted,
        summary.unreviewed,
        summary.unresolved,
        summary.invalid
    );

    if summary.all_approved() {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.green()));
    } else {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.yellow()));
    }
}
