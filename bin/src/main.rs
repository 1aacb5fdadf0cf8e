//! tickgen CLI - Generates a TypeScript constant listing every KRC-20 ticker.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tickgen_fetch::{ClientConfig, KasplexClient, PaginateConfig, url::BASE_URL};
use tickgen_format::{ConstArrayFormatter, DEFAULT_CONST_NAME};
use tracing::{error, info};

mod commands;
mod logging;
mod output;

use commands::generate::GenerateOptions;

/// Default output file, relative to the working directory.
const DEFAULT_OUTPUT: &str = "kasplex_tokens.js";

#[derive(Parser, Debug)]
#[command(name = "tickgen")]
#[command(about = "Generate a TypeScript constant of every KRC-20 ticker on Kasplex", long_about = None)]
#[command(version)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Kasplex API base URL
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// Maximum number of pages to request
    #[arg(long, default_value_t = PaginateConfig::DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Name of the exported constant
    #[arg(long, default_value = DEFAULT_CONST_NAME)]
    const_name: String,

    /// Spaces before each ticker line (0-255)
    #[arg(long, default_value_t = 4)]
    indent: u8,

    /// Fail instead of writing a partial list when a page request fails
    #[arg(long)]
    strict: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    fn generate_options(&self) -> Result<GenerateOptions> {
        let formatter = ConstArrayFormatter::new()
            .with_name(&self.const_name)?
            .with_indent(self.indent);
        let paginate = PaginateConfig::default()
            .with_max_pages(self.max_pages)
            .with_page_delay(Duration::from_millis(self.delay_ms))
            .with_strict(self.strict);

        Ok(GenerateOptions {
            output: self.output.clone(),
            paginate,
            formatter,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Errors stop here as a log line and a failure exit code; nothing is re-raised.
        Err(e) => {
            error!("Error in main process: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let options = cli.generate_options()?;
    let client = KasplexClient::new(cli.client_config()).context("Failed to create HTTP client")?;
    let summary = commands::generate::generate(&client, &options).await?;

    info!(
        count = summary.ticks,
        requests = summary.requests,
        reason = %summary.stop,
        path = %summary.output.display(),
        "Successfully saved tokens"
    );
    Ok(())
}
