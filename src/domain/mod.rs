//! Domain layer containing the chart engine and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (cycle arithmetic, elements, stems, branches, errors)
//! - `chart` - Pillar construction, classifiers, scoring and report assembly

pub mod chart;
pub mod foundation;
