//! Constraint parsing and evaluation module
//!
//! This module handles parsing constraint expressions like "> 10",
//! "between 5 and 20" or "not contains error" and evaluating them against
//! the textual form of an observed value.

mod ast;
pub mod cache;
pub mod duration;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use duration::DurationUnit;
pub use evaluator::*;
pub use parser::parse;
