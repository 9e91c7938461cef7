//! The closed set of SVG shapes a document can hold.
//!
//! Each variant keeps its own attributes and writes exactly one SVG
//! element through the [`Element`] trait. Setters come in two flavours:
//! `set_*` mutates in place and returns `&mut Self`, `with_*` consumes and
//! returns the shape. Both chain.
//!
//! ```
//! # use minisvg_core::shape::{Circle, Shape};
//! let circle = Circle::new().with_center((20.0, 30.0)).with_radius(15.0);
//! let shape = Shape::from(circle);
//! assert_eq!(shape.kind(), "circle");
//! ```

use std::io;

use crate::render::{Element, RenderContext};

mod circle;
mod polyline;
mod text;

pub use circle::Circle;
pub use polyline::Polyline;
pub use text::Text;

/// One SVG shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl Shape {
    /// Returns the SVG element name this shape renders as.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Polyline(_) => "polyline",
            Self::Text(_) => "text",
        }
    }
}

impl Element for Shape {
    fn render_element(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        match self {
            Self::Circle(circle) => circle.render_element(ctx),
            Self::Polyline(polyline) => polyline.render_element(ctx),
            Self::Text(text) => text.render_element(ctx),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polyline> for Shape {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Renders a single element with no indentation, for assertions.
#[cfg(test)]
fn rendered(element: &dyn Element) -> String {
    let mut out: Vec<u8> = Vec::new();
    element
        .render_element(&mut RenderContext::new(&mut out, 2))
        .unwrap();
    String::from_utf8(out).unwrap()
}
