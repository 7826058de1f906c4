//! Decorative behaviour for the landing page: the wave background, the
//! reservation popup, the testimonial strip and the scroll reveals.
//!
//! The state and geometry live in target-independent modules so they can be
//! tested on the host; the `wasm` module wires them to the DOM.

pub mod config;
pub mod popup;
pub mod reveal;
pub mod voice;
pub mod wave;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
