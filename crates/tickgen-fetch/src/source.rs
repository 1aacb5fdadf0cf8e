//! Page sources and per-request outcomes.

use async_trait::async_trait;
use tickgen_types::TokenPage;

use crate::FetchError;

/// Anything that can serve pages of the token list.
///
/// [`KasplexClient`](crate::KasplexClient) is the HTTP implementation.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page that starts at `cursor`, or the first page if
    /// `cursor` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved or decoded.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<TokenPage, FetchError>;
}

/// Result of a single page request, classified for the pagination loop.
#[derive(Debug)]
pub enum PageOutcome {
    /// A page was received and the server handed out a cursor.
    More {
        /// Tickers on this page, in server order.
        ticks: Vec<String>,
        /// Non-empty cursor for the following page.
        next: String,
    },
    /// The final page was received.
    Last {
        /// Tickers on this page, in server order.
        ticks: Vec<String>,
    },
    /// The request or decoding failed.
    Fault(FetchError),
}

impl PageOutcome {
    /// Requests one page from `source` and classifies the result.
    pub async fn fetch<S: PageSource + ?Sized>(source: &S, cursor: Option<&str>) -> Self {
        source.fetch_page(cursor).await.into()
    }
}

impl From<Result<TokenPage, FetchError>> for PageOutcome {
    fn from(result: Result<TokenPage, FetchError>) -> Self {
        match result {
            Ok(page) => match page.into_parts() {
                (ticks, Some(next)) => Self::More { ticks, next },
                (ticks, None) => Self::Last { ticks },
            },
            Err(e) => Self::Fault(e),
        }
    }
}
