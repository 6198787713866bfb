//! Decorative WebGL scenes for a portfolio page.
//!
//! Everything outside [`wasm`] is plain Rust and runs (and is tested) on the
//! host; the `wasm` module binds it to the DOM, WebGL2 and the 2D canvas.

pub mod camera;
pub mod color;
pub mod config;
pub mod decor;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod scene;
pub mod texture;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{DecorError, Result};
