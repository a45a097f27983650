//! dialcodes-cli
//! =============
//!
//! Command-line interface for the `dialcodes-core` dial-code directory.
//!
//! This crate primarily provides a binary (`dialcodes-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install dialcodes-cli
//! dialcodes-cli --help
//! dialcodes-cli list --popular us,gb --lang de
//! dialcodes-cli search mex
//! dialcodes-cli dial +44
//! ```
//!
//! For programmatic access use the [`dialcodes-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
