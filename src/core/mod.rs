//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod lists;

pub use lists::{exclude_listed, non_reciprocating, parse_delimited_list};
