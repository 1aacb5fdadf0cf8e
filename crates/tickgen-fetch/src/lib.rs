//! HTTP client and token list pagination for tickgen.
//!
//! This crate provides the fetch side of the pipeline:
//!
//! - [`url::tokenlist_url`] - Constructs token list page URLs
//! - [`KasplexClient`] - HTTP client for the Kasplex API
//! - [`PageSource`] - Anything that can serve token list pages
//! - [`PageOutcome`] - Classified result of one page request
//! - [`fetch_all_tokens`] - The pagination loop

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickgen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod paginate;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, KasplexClient, decode_page};
pub use paginate::{PaginateConfig, StopReason, TokenHarvest, fetch_all_tokens};
pub use source::{PageOutcome, PageSource};
