//! Client-side rendered page (WASM)

pub mod components;
mod navigation;
mod shell;
pub mod state;

pub use navigation::smooth_scroll_to;
pub use shell::DomShell;
