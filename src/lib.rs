//! genegrid - simulated genetic inheritance rendered as an SVG family tree.
//!
//! Each individual is an 8x8 grid of coloured cells; every cell is inherited
//! independently from one of two parents with equal probability. The crate
//! builds a 2-4 generation pedigree from uniformly coloured founders, lays
//! the tree out pyramid-style and serializes it as a single SVG document.
//!
//! Pipeline: validate -> build pedigree ([`model`]) -> layout + render
//! ([`render`]) -> write, once per invocation.

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod types;
