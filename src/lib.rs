//! Four Pillars - BaZi chart engine
//!
//! This crate converts a birth timestamp, longitude and gender into a Four
//! Pillars chart with its derived classifications: ten gods, five-element
//! energy, day-master strength, useful elements, pattern, luck cycles and
//! per-pillar annotations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
