//! # Utilities Module
//!
//! Dice rolling and bounded redraw loops shared by the generators.

pub mod dice;
pub mod retry;

pub use dice::*;
pub use retry::*;
