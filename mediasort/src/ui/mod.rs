//! Terminal output helpers.

pub mod output;
