//! Canvas rendering module
//!
//! Every entity is drawn as an emoji glyph. `sprites` builds the draw list;
//! `canvas` paints it with the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use sprites::{Sprite, scene};
