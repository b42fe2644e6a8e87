//! Foundation module - Shared domain primitives.
//!
//! Contains the cyclic index arithmetic, the five elements with their
//! generation and conquest relation, stems, branches and error types
//! that form the vocabulary of the chart engine.

pub mod cycle;
mod element;
mod stem;
mod branch;
mod errors;

pub use element::{Element, ElementRelation, Relation};
pub use stem::{Polarity, Stem};
pub use branch::{Branch, HiddenStem, HIDDEN_WEIGHT_TOTAL};
pub use errors::{DomainError, ErrorCode, ValidationError};
