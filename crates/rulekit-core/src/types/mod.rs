//! Type system for rulekit
//!
//! Rule literals and record fields share one closed value type: a number or a string.

pub mod value;

pub use value::Value;
