//! Minisvg - build small SVG documents and write them to any sink.
//!
//! A [`Document`] collects circles, polylines and text elements and renders
//! them as an SVG 1.1 document with one element per indented line.
//!
//! # Examples
//!
//! ```
//! use minisvg::{
//!     Document,
//!     shape::{Circle, Polyline, Text},
//! };
//!
//! let mut doc = Document::new();
//! doc.add(Circle::new().with_center((20.0, 30.0)).with_radius(15.0))
//!     .add(
//!         Polyline::new()
//!             .with_point((0.0, 0.0))
//!             .with_point((10.0, 10.0))
//!             .with_point((20.0, 0.0)),
//!     )
//!     .add(
//!         Text::new()
//!             .with_position((10.0, 20.0))
//!             .with_font_size(14)
//!             .with_data("Hello"),
//!     );
//!
//! let mut out: Vec<u8> = Vec::new();
//! doc.render(&mut out).expect("writing to a Vec cannot fail");
//!
//! let svg = String::from_utf8(out).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.ends_with("</svg>\n"));
//! ```

pub mod config;

mod document;
mod error;

pub use minisvg_core::{escape, geometry, render, shape};

pub use document::Document;
pub use error::RenderError;
