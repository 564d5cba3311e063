//! # Circos tracks for co-expression modules
//!
//! This crate links the genes flagged by a differential expression analysis to the
//! modules of a co-expression clustering (WGCNA style) and writes the flat files Circos
//! reads: a karyotype with one "chromosome" per module, gene positions, a heatmap of
//! module-trait correlations and two histograms of differential genes per module.
//!
//! Coordinates are synthetic: every gene is one unit wide and modules start at 0.
//!
pub mod cluster;
pub mod config;
pub mod consts;
pub mod diff;
pub mod errors;
pub mod heatmap;
pub mod histogram;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod utils;

// re-exports
pub use cluster::*;
pub use config::*;
pub use diff::*;
pub use errors::*;
pub use heatmap::*;
pub use histogram::*;
pub use io::*;
pub use models::*;
pub use pipeline::*;
