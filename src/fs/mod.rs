//! Loading candidate results produced outside the crate.
//!
//! This module turns the output of an external correlation step into [`RankedResult`]s,
//! either from a dense NumPy grid of coefficients or from a JSON list of
//! `(coefficient, row, col)` triples.
//!
//! [`RankedResult`]: crate::ranking::RankedResult

mod error;
mod grid_load;
mod triples_load;

pub use error::*;
pub use grid_load::*;
pub use triples_load::*;
