//! Core types for the tickgen ticker list generator.
//!
//! - [`TokenRecord`] - A single entry of the token list
//! - [`TokenPage`] - One page of the paginated token list

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickgen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod page;

pub use page::{TokenPage, TokenRecord};
