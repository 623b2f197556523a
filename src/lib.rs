//! AHP Validator - Independent verification of AHP priority weights
//!
//! This crate recomputes priority weights and the consistency ratio of a
//! pairwise comparison matrix and judges a result produced by another system
//! against them, within a tolerance.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
