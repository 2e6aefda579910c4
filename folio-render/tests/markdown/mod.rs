//! Markdown format tests
//!
//! Tests for Markdown → HTML fragment rendering.

mod export;
mod properties;
