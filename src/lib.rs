//! Spaced repetition scheduling for vocabulary learning.
//!
//! [`words`] holds the pure scheduling core; [`storage`] is the JSON file
//! store and import layer the CLI builds on.

pub mod storage;
pub mod words;
