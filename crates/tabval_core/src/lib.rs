//! # Tabular Validation Core
//!
//! Core data structures and types for validating tabular (CSV-like) data.
//!
//! This crate provides the building blocks shared by the validation engine,
//! the schema file parser and the CLI:
//!
//! - **Validator**: the single-field rule contract every built-in and custom
//!   rule implements
//! - **Schema definitions**: the serializable, declarative form of a schema
//!   (column name to an ordered list of rules)
//! - **Reports**: the structured verdict of one validation run, including the
//!   failure map and schema mismatch listings
//!
//! ## Example
//!
//! ```rust
//! use tabval_core::{Outcome, Row, Validator};
//!
//! /// Accepts only upper-case values.
//! struct Shouting;
//!
//! impl Validator for Shouting {
//!     fn name(&self) -> &str {
//!         "Shouting"
//!     }
//!
//!     fn validate(&mut self, value: &str, _row: &Row) -> Outcome {
//!         if value.chars().all(|c| !c.is_lowercase()) {
//!             Outcome::Valid
//!         } else {
//!             Outcome::invalid(format!("'{}' is not upper-case", value))
//!         }
//!     }
//! }
//!
//! let mut rule = Shouting;
//! assert!(rule.validate("LOUD", &Row::new()).is_valid());
//! assert!(!rule.validate("quiet", &Row::new()).is_valid());
//! ```

pub mod builder;
pub mod definition;
pub mod error;
pub mod report;
pub mod validator;

pub use builder::*;
pub use definition::*;
pub use error::*;
pub use report::*;
pub use validator::*;
