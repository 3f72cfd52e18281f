//! Core library for circomap: merge genomic feature intervals and compute
//! per-window feature density over scaffolds.
//!
//! The pipeline is three stages, each one scaffold at a time:
//!
//! 1. load feature intervals from a GFF-like file ([`models::ScaffoldFeatureSet`])
//! 2. collapse overlapping intervals into a disjoint covering set
//!    ([`models::feature_set::merge_intervals`])
//! 3. tile each scaffold with fixed-size windows and count covered bases per
//!    window ([`density`])

pub mod density;
pub mod errors;
pub mod models;
pub mod utils;
