//! Text statistics: word counts and uppercase counts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyzer;

pub use analyzer::{TextAnalyzer, TextReport};
