//! Generate command implementation.
//!
//! Fetches the full ticker list, renders it as a TypeScript module and
//! writes it to the output file.

use crate::output::write_output;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tickgen_fetch::{PageSource, PaginateConfig, StopReason, fetch_all_tokens};
use tickgen_format::ConstArrayFormatter;
use tracing::{debug, warn};

/// Settings for one generator run.
#[derive(Debug, Clone)]
pub(crate) struct GenerateOptions {
    /// File the module is written to.
    pub(crate) output: PathBuf,
    /// Pagination policy.
    pub(crate) paginate: PaginateConfig,
    /// Module renderer.
    pub(crate) formatter: ConstArrayFormatter,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub(crate) struct GenerateSummary {
    pub(crate) ticks: usize,
    pub(crate) requests: usize,
    pub(crate) stop: StopReason,
    pub(crate) output: PathBuf,
}

/// Fetch, format, write.
pub(crate) async fn generate<S: PageSource + ?Sized>(
    source: &S,
    options: &GenerateOptions,
) -> Result<GenerateSummary> {
    let harvest = fetch_all_tokens(source, &options.paginate)
        .await
        .context("Failed to fetch token list")?;

    if !harvest.is_complete() {
        warn!(reason = %harvest.stop, "Token list may be incomplete");
    }

    debug!(count = harvest.len(), path = %options.output.display(), "Writing token list");
    write_output(&options.output, &options.formatter, harvest.ticks.as_slice())
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    Ok(GenerateSummary {
        ticks: harvest.len(),
        requests: harvest.requests,
        stop: harvest.stop,
        output: options.output.clone(),
    })
}
