//! govdb-cli
//! =========
//!
//! Command-line interface for the `govdb-core` AI-governance dataset.
//!
//! This crate primarily provides a binary (`govdb`). The library target only
//! exists so rustdoc renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! govdb --help
//! govdb stats
//! govdb country eu
//! govdb query --approach comprehensive --sort score.overall --order desc
//! govdb query --region Europe --format csv > europe.csv
//! ```
//!
//! For programmatic access to the pipeline, use the `govdb-core` crate
//! directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
