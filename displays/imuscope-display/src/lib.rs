//! TFT rendering for the sensor display
//!
//! This crate provides:
//! - `Canvas` trait for the handful of drawing operations the screen needs
//! - `GraphicsCanvas`, a `Canvas` over any embedded-graphics RGB565 target
//! - A compiled-in font table
//! - The fixed screen layout: static labels and the value-field table
//! - `Renderer` for splash, static layout and value redraws
//! - `PanelScreen`, which brings the panel up as part of the splash
//! - `RefreshTask`, the periodic display refresh
//!
//! # Architecture
//!
//! The static layout is drawn once during boot. After that only the value
//! fields are redrawn, each inside its own rectangle, so a refresh never
//! touches labels or separators.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod fonts;
pub mod layout;
pub mod renderer;
pub mod screen;
pub mod task;

pub use canvas::{Canvas, CanvasError, GraphicsCanvas};
pub use fonts::load_font;
pub use renderer::Renderer;
pub use screen::PanelScreen;
pub use task::RefreshTask;
