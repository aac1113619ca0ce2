//! Output formatters.

mod csv;

pub use self::csv::*;
