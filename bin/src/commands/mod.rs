//! CLI command implementations.

pub(crate) mod generate;
