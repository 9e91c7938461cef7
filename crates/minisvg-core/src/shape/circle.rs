//! The `<circle>` element.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle>.

use std::io;

use crate::{
    geometry::Point,
    render::{Element, RenderContext},
};

/// A circle given by its center and radius.
///
/// Defaults to a unit circle at the origin.
///
/// # Examples
///
/// ```
/// # use minisvg_core::shape::Circle;
/// # use minisvg_core::geometry::Point;
/// let mut circle = Circle::new();
/// circle.set_center(Point::new(20.0, 30.0)).set_radius(15.0);
/// assert_eq!(circle.radius(), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a unit circle centered at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the center (`cx`, `cy`).
    pub fn set_center(&mut self, center: impl Into<Point>) -> &mut Self {
        self.center = center.into();
        self
    }

    /// Sets the radius (`r`).
    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.radius = radius;
        self
    }

    /// Returns this circle with a new center.
    pub fn with_center(mut self, center: impl Into<Point>) -> Self {
        self.set_center(center);
        self
    }

    /// Returns this circle with a new radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.set_radius(radius);
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: 1.0,
        }
    }
}

impl Element for Circle {
    fn render_element(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        write!(
            ctx,
            r#"<circle cx="{}" cy="{}" r="{}"/>"#,
            self.center.x(),
            self.center.y(),
            self.radius
        )
    }
}
