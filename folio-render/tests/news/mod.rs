//! News format tests
//!
//! Tests for news record parsing and digest rendering.

mod digest;
