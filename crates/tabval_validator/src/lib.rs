//! # Tabval Validator
//!
//! Validation engine for tabular data. This crate turns schemas into live
//! validators and runs them over delimited sources:
//!
//! - Built-in validators (casts, value sets, uniqueness, patterns, ranges,
//!   presence)
//! - Binding a schema to a source header (missing and unused columns,
//!   default validators, sibling column dependencies)
//! - Streaming sources (CSV files, CSV strings, in-memory rows)
//! - Failure aggregation into a single report per run
//!
//! ## Example
//!
//! ```rust
//! use tabval_validator::{CsvString, DataValidator, Schema, SetValidator, UniqueValidator};
//!
//! let schema = Schema::new()
//!     .rule("Column A", UniqueValidator::new())
//!     .rule("Column B", SetValidator::new(["Vampire", "Not A Vampire"]));
//!
//! let source = CsvString::new(
//!     "Column A,Column B\nVlad the Impaler,Vampire\nDracula,Vampire\nCount Chocula,Not A Vampire\n",
//! );
//!
//! let mut validator = DataValidator::new(schema);
//! let report = validator.validate(&source).unwrap();
//!
//! if report.passed() {
//!     println!("Passed! :)");
//! } else {
//!     println!("Failed :( {:?}", report.failures());
//! }
//! ```

mod aggregator;
mod binding;
mod dataset;
mod engine;
mod error;
mod schema;
mod validators;

pub use aggregator::*;
pub use binding::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use schema::*;
pub use validators::*;
