//! Carrier box selection with a greedy 3D placement engine.
//!
//! Given a list of items and a carrier catalog (or caller-supplied boxes),
//! [`optimizer::pack`] returns the smallest box that holds every item along
//! with a placement tree, which [`display::create_display`] turns into render
//! coordinates.

pub mod api;
pub mod catalog;
pub mod cell;
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod model;
pub mod optimizer;
pub mod types;

pub use catalog::{BoxSource, Carrier};
pub use cell::PackedBox;
pub use error::PackError;
pub use optimizer::pack;
