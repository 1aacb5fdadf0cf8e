//! Token list page representation.

use serde::Deserialize;

/// A single entry of the token list.
///
/// The API returns many more fields per token (supply, holders, deploy
/// info); only the ticker is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct TokenRecord {
    /// Ticker symbol naming the token on the ledger.
    pub tick: String,
}

impl TokenRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(tick: impl Into<String>) -> Self {
        Self { tick: tick.into() }
    }
}

/// One page of the paginated token list.
///
/// `result` is required; a body without it fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenPage {
    /// Records on this page, in server order.
    pub result: Vec<TokenRecord>,
    /// Opaque cursor for the following page.
    #[serde(default)]
    pub next: Option<String>,
}

impl TokenPage {
    /// Creates a page from tickers and an optional cursor.
    #[must_use]
    pub fn new<I, S>(ticks: I, next: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            result: ticks.into_iter().map(TokenRecord::new).collect(),
            next: next.map(str::to_owned),
        }
    }

    /// Returns the cursor for the next page, if there is one.
    ///
    /// An empty cursor is treated the same as a missing one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|cursor| !cursor.is_empty())
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.result.len()
    }

    /// Returns true if the page has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Splits the page into its tickers and its next cursor.
    ///
    /// The cursor is normalized the same way as [`Self::next_cursor`].
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        let ticks = self.result.into_iter().map(|record| record.tick).collect();
        let next = self.next.filter(|cursor| !cursor.is_empty());
        (ticks, next)
    }
}
