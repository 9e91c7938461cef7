//! Minisvg Core Types
//!
//! This crate provides the building blocks that `minisvg` documents are
//! made of:
//!
//! - **Geometry**: The [`geometry::Point`] coordinate type
//! - **Render**: Indentation-aware emission state ([`render::RenderContext`])
//!   and the [`render::Element`] capability
//! - **Escape**: XML escaping for text and string attributes ([`escape`] module)
//! - **Shape**: The circle, polyline and text elements ([`shape`] module)

pub mod escape;
pub mod geometry;
pub mod render;
pub mod shape;
