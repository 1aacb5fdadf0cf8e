//! Sequential token list pagination.

use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::{FetchError, PageOutcome, PageSource};

/// Configuration for the pagination loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginateConfig {
    /// Maximum number of page requests per run.
    pub max_pages: usize,
    /// Pause between two consecutive requests.
    pub page_delay: Duration,
    /// Return fetch faults as errors instead of ending the walk early.
    pub strict: bool,
}

impl PaginateConfig {
    /// Default page cap.
    pub const DEFAULT_MAX_PAGES: usize = 100;

    /// Default pause between pages (500 ms).
    pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

    /// Sets the page cap.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets the pause between pages.
    #[must_use]
    pub const fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Sets strict mode.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for PaginateConfig {
    fn default() -> Self {
        Self {
            max_pages: Self::DEFAULT_MAX_PAGES,
            page_delay: Self::DEFAULT_PAGE_DELAY,
            strict: false,
        }
    }
}

/// Why the pagination loop stopped.
#[derive(Debug)]
pub enum StopReason {
    /// The server returned a page without a cursor.
    Exhausted,
    /// The page cap was reached while the server still had a cursor.
    PageCap,
    /// A request failed; the list holds everything gathered before it.
    Fault(FetchError),
}

impl StopReason {
    /// Returns true if the server signalled the end of the list.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "no more pages"),
            Self::PageCap => write!(f, "page cap reached"),
            Self::Fault(e) => write!(f, "fetch failed: {e}"),
        }
    }
}

/// Everything gathered by one pagination run.
#[derive(Debug)]
pub struct TokenHarvest {
    /// Tickers in the order the server returned them. Not deduplicated.
    pub ticks: Vec<String>,
    /// Number of page requests issued, including a failed one.
    pub requests: usize,
    /// Why the loop stopped.
    pub stop: StopReason,
}

impl TokenHarvest {
    /// Returns the number of tickers gathered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns true if no tickers were gathered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Returns true if the server signalled the end of the list.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stop.is_complete()
    }
}

/// Fetches every ticker from `source`, one page at a time.
///
/// The loop ends when a page carries no cursor, when `config.max_pages`
/// requests have been issued, or when a request fails. The pause is only
/// taken between two requests.
///
/// # Errors
///
/// In strict mode the first fetch fault is returned. Otherwise faults end
/// the walk and are reported through [`TokenHarvest::stop`].
pub async fn fetch_all_tokens<S: PageSource + ?Sized>(
    source: &S,
    config: &PaginateConfig,
) -> Result<TokenHarvest, FetchError> {
    let mut ticks: Vec<String> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut requests = 0usize;

    info!(max_pages = config.max_pages, "Starting to fetch tokens");

    let stop = loop {
        if requests >= config.max_pages {
            break StopReason::PageCap;
        }
        if requests > 0 && !config.page_delay.is_zero() {
            tokio::time::sleep(config.page_delay).await;
        }
        requests += 1;

        match PageOutcome::fetch(source, cursor.as_deref()).await {
            PageOutcome::More { ticks: batch, next } => {
                append_page(&mut ticks, batch, requests);
                cursor = Some(next);
            }
            PageOutcome::Last { ticks: batch } => {
                append_page(&mut ticks, batch, requests);
                break StopReason::Exhausted;
            }
            PageOutcome::Fault(e) if config.strict => return Err(e),
            PageOutcome::Fault(e) => {
                warn!(page = requests, error = %e, "Error fetching tokens");
                break StopReason::Fault(e);
            }
        }
    };

    info!(total = ticks.len(), requests, reason = %stop, "Finished fetching");
    Ok(TokenHarvest {
        ticks,
        requests,
        stop,
    })
}

fn append_page(ticks: &mut Vec<String>, batch: Vec<String>, page: usize) {
    let fetched = batch.len();
    ticks.extend(batch);
    info!(page, fetched, total = ticks.len(), "Fetched tokens");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tickgen_types::TokenPage;

    /// Replays a fixed list of responses and records every cursor it sees.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<TokenPage, FetchError>>>,
        cursors: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<TokenPage, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                cursors: Mutex::new(Vec::new()),
            }
        }

        fn cursors(&self) -> Vec<Option<String>> {
            self.cursors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for ScriptedSource {
        async fn fetch_page(&self, cursor: Option<&str>) -> Result<TokenPage, FetchError> {
            self.cursors.lock().unwrap().push(cursor.map(str::to_owned));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::ServerError { status: 404 }))
        }
    }

    /// A server that always claims there is another page.
    struct EndlessSource {
        requests: Mutex<usize>,
    }

    #[async_trait]
    impl PageSource for EndlessSource {
        async fn fetch_page(&self, _cursor: Option<&str>) -> Result<TokenPage, FetchError> {
            let mut requests = self.requests.lock().unwrap();
            *requests += 1;
            let next = requests.to_string();
            Ok(TokenPage::new(["LOOP"], Some(next.as_str())))
        }
    }

    fn no_delay() -> PaginateConfig {
        PaginateConfig::default().with_page_delay(Duration::ZERO)
    }

    fn decode_error() -> FetchError {
        FetchError::Decode(serde_json::from_str::<TokenPage>("not json").unwrap_err())
    }

    #[test]
    fn test_paginate_config_default() {
        let config = PaginateConfig::default();
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.page_delay, Duration::from_millis(500));
        assert!(!config.strict);
    }

    #[tokio::test]
    async fn test_two_pages_then_stop() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["AAA"], Some("c1"))),
            Ok(TokenPage::new(["BBB"], None)),
            Ok(TokenPage::new(["CCC"], None)),
        ]);

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();

        assert_eq!(harvest.ticks, vec!["AAA", "BBB"]);
        assert_eq!(harvest.requests, 2);
        assert!(harvest.is_complete());
        assert_eq!(source.cursors(), vec![None, Some("c1".to_string())]);
    }

    #[tokio::test]
    async fn test_pages_are_concatenated_in_order() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["Z", "Y"], Some("p2"))),
            Ok(TokenPage::new(Vec::<String>::new(), Some("p3"))),
            Ok(TokenPage::new(["X", "A", "M"], Some(""))),
        ]);

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();

        assert_eq!(harvest.ticks, vec!["Z", "Y", "X", "A", "M"]);
        assert_eq!(harvest.requests, 3);
    }

    #[tokio::test]
    async fn test_duplicates_are_preserved() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["X"], Some("c1"))),
            Ok(TokenPage::new(["X"], None)),
        ]);

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();
        assert_eq!(harvest.ticks, vec!["X", "X"]);
    }

    #[tokio::test]
    async fn test_page_cap_bounds_requests() {
        let source = EndlessSource {
            requests: Mutex::new(0),
        };

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();

        assert_eq!(harvest.requests, 100);
        assert_eq!(*source.requests.lock().unwrap(), 100);
        assert_eq!(harvest.len(), 100);
        assert!(matches!(harvest.stop, StopReason::PageCap));
    }

    #[tokio::test]
    async fn test_zero_page_cap_issues_no_requests() {
        let source = EndlessSource {
            requests: Mutex::new(0),
        };
        let config = no_delay().with_max_pages(0);

        let harvest = fetch_all_tokens(&source, &config).await.unwrap();

        assert_eq!(harvest.requests, 0);
        assert!(harvest.is_empty());
        assert_eq!(*source.requests.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_first_page_fault_yields_empty_list() {
        let source = ScriptedSource::new(vec![Err(FetchError::ServerError { status: 502 })]);

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();

        assert!(harvest.is_empty());
        assert_eq!(harvest.requests, 1);
        assert!(!harvest.is_complete());
        assert!(matches!(
            harvest.stop,
            StopReason::Fault(FetchError::ServerError { status: 502 })
        ));
    }

    #[tokio::test]
    async fn test_fault_keeps_earlier_pages() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["A", "B"], Some("c1"))),
            Err(decode_error()),
            Ok(TokenPage::new(["C"], None)),
        ]);

        let harvest = fetch_all_tokens(&source, &no_delay()).await.unwrap();

        assert_eq!(harvest.ticks, vec!["A", "B"]);
        assert_eq!(harvest.requests, 2);
        assert!(matches!(harvest.stop, StopReason::Fault(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_strict_mode_returns_fault() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["A"], Some("c1"))),
            Err(FetchError::ServerError { status: 500 }),
        ]);
        let config = no_delay().with_strict(true);

        let err = fetch_all_tokens(&source, &config).await.unwrap_err();
        assert!(matches!(err, FetchError::ServerError { status: 500 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_only_between_requests() {
        let source = ScriptedSource::new(vec![
            Ok(TokenPage::new(["A"], Some("c1"))),
            Ok(TokenPage::new(["B"], Some("c2"))),
            Ok(TokenPage::new(["C"], None)),
        ]);

        let started = tokio::time::Instant::now();
        let harvest = fetch_all_tokens(&source, &PaginateConfig::default())
            .await
            .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(harvest.requests, 3);
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::Exhausted.to_string(), "no more pages");
        assert_eq!(StopReason::PageCap.to_string(), "page cap reached");
        let fault = StopReason::Fault(FetchError::ServerError { status: 429 });
        assert_eq!(fault.to_string(), "fetch failed: Server error: 429");
    }
}
