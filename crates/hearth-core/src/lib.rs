//! Hardware-independent display helpers for hearth
//!
//! This crate contains the platform-agnostic pieces of the hearth
//! home-automation panel: resolving Material Design Icon names to glyphs of
//! the panel's icon font, and rendering German date and time strings for the
//! clock widgets.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! the panel's microcontroller and desktop hosts (for the preview and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod datetime;
pub mod glyph;
pub mod icons;

pub use glyph::Glyph;
pub use icons::{IconEntry, IconResolver};
