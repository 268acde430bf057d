mod platform;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use labelscan_config::{DeployTarget, ScanConfig};
use labelscan_core::CaptureAdapter;
use labelscan_session::{ScanController, ScanOutcome};
use labelscan_upload::OcrClient;

use platform::TerminalAlert;

#[derive(Parser)]
#[command(name = "labelscan")]
#[command(about = "Scan packaged-food labels against an OCR/analysis backend")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the web deployment target
    #[arg(long, global = true, conflicts_with = "device")]
    web: bool,

    /// Use the device deployment target
    #[arg(long, global = true)]
    device: bool,

    /// Explicit backend base URL (overrides the target selection)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a label image and print the analysis
    Scan {
        /// Image to scan (acts as the gallery selection)
        image: PathBuf,
        /// Go through the camera adapter with a permission prompt
        #[arg(long)]
        camera: bool,
    },
    /// Check that the analysis backend is reachable
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = labelscan_config::load(cli.config.as_deref())?;
    config.target = resolve_target(cli.web, cli.device, config.target);
    logging::init_logger(&config.log_dir, &config.log_level);

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.base_url().to_string());

    match cli.command {
        Commands::Scan { image, camera } => run_scan(&config, base_url, image, camera).await,
        Commands::Status => run_status(base_url, &config).await,
    }
}

/// Command-line target flags override the configured deployment target.
fn resolve_target(web: bool, device: bool, configured: DeployTarget) -> DeployTarget {
    if device {
        DeployTarget::Device
    } else if web {
        DeployTarget::Web
    } else {
        configured
    }
}

async fn run_scan(
    config: &ScanConfig,
    base_url: String,
    image: PathBuf,
    camera: bool,
) -> Result<()> {
    info!(base_url = %base_url, camera, image = %image.display(), "starting scan");

    let client = OcrClient::new(base_url, config.request_timeout())?;
    let capture: Arc<dyn CaptureAdapter> = if camera {
        Arc::new(platform::camera_from_path(image))
    } else {
        Arc::new(platform::gallery_from_path(image))
    };

    let mut controller = ScanController::new(capture, Arc::new(client), Arc::new(TerminalAlert));

    match controller.scan().await {
        ScanOutcome::Completed => {
            print!("{}", render::render_session(controller.session(), render::supports_color()));
        }
        ScanOutcome::Cancelled => render::note_info("Scan cancelled."),
        // The failure alert was already shown through the alert sink.
        ScanOutcome::Failed => std::process::exit(1),
        ScanOutcome::Ignored => {}
    }
    Ok(())
}

async fn run_status(base_url: String, config: &ScanConfig) -> Result<()> {
    let client = OcrClient::new(base_url, config.request_timeout())?;
    match client.health().await {
        Ok(health) if health.ok => {
            render::note_success(&format!("{} ({})", health.msg, client.base_url()));
        }
        Ok(_) => {
            render::note_error(&format!("Backend at {} reports not ok", client.base_url()));
            std::process::exit(1);
        }
        Err(err) => {
            render::note_error(&format!(
                "Backend not reachable at {}: {err}",
                client.base_url()
            ));
            std::process::exit(1);
        }
    }
    Ok(())
}
