//! Platform abstraction layer
//!
//! The host polls its keyboard and mirrors the result into a `KeyState`
//! table before each frame.

pub mod input;

pub use input::{KEY_A, KEY_D, KEY_M, KEY_N, KEY_SPACE, KEY_TABLE_SIZE, KeyState};
