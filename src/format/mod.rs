//! Stable type tags and layout constants
//!
//! These enumerations are shared with the hardware compiler and treated as a
//! fixed contract.

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
