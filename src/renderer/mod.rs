//! Rendering surface
//!
//! The game describes each frame as sprite and text draw calls; the host
//! turns them into pixels.

pub mod scene;

pub use scene::{DrawCommand, DrawList, Renderer, Sprite, Texture, render_scene};
