//! dialcodes-rs
//!
//! Umbrella crate for the workspace demos. Everything lives in
//! [`dialcodes_core`]; this crate only re-exports it.
pub use dialcodes_core::*;
