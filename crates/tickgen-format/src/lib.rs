//! Source code rendering for tickgen ticker lists.
//!
//! - [`format_tokens`] - Renders tickers with the default settings
//! - [`ConstArrayFormatter`] - Configurable `export const ... as const` renderer

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickgen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod const_array;
mod formatter;

pub use const_array::{ConstArrayFormatter, DEFAULT_CONST_NAME, format_tokens};
pub use formatter::{FormatError, is_identifier};
