use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skycast::render::{self, TemperatureChart};
use skycast::{ForecastService, SkycastConfig, SkycastError, WeatherApiClient};

#[derive(Parser)]
#[command(name = "skycast", version, about = "City weather forecast in your terminal")]
struct Cli {
    /// Place name to look up, e.g. "Berlin" or "Den Haag"
    city: Vec<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the temperature chart (overrides the config file)
    #[arg(long)]
    chart_out: Option<PathBuf>,

    /// Verbose diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(config: &SkycastConfig, verbose: bool) {
    let directive = if verbose {
        "skycast=debug".to_string()
    } else {
        format!("skycast={}", config.logging.level)
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let fmt = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);
    if config.logging.format == "compact" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.compact())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).init();
    }
}

async fn run(cli: Cli) -> skycast::Result<()> {
    let mut config = SkycastConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.chart_out {
        config.chart.output_path = path;
    }
    config.validate()?;
    init_logging(&config, cli.verbose);

    let api = WeatherApiClient::new(config.api.clone())?;
    let service = ForecastService::new(api);
    let report = service.fetch_report(&cli.city.join(" "), Utc::now()).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut chart = TemperatureChart::new(&config.chart);
    render::present(&report, &mut out, &mut chart)?;
    out.flush()
        .map_err(|e| SkycastError::render(e.to_string()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("query failed: {error}");
            eprintln!("{}", error.user_message());
            ExitCode::FAILURE
        }
    }
}
