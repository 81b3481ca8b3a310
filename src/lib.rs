//! Describe a list of numbers in plain sentences.
//!
//! ```
//! use sentences::{mean_sentence, Number};
//!
//! let numbers = [Number::Int(1), Number::Int(2), Number::Int(2)];
//! assert_eq!(
//!     mean_sentence(&numbers).unwrap(),
//!     "The mean of the numbers provided is 1.67."
//! );
//! ```

pub mod error;
pub mod number;
pub mod report;
pub mod stats;
pub mod utils;

pub use error::StatsError;
pub use number::{parse_numbers, Number};
pub use report::{OutputFormat, Report, Statistic};
pub use stats::{mean_sentence, median_sentence, sum_sentence};
