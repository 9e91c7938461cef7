//! The `<polyline>` element.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polyline>.

use std::io;

use crate::{
    geometry::Point,
    render::{Element, RenderContext},
};

/// An open sequence of connected line segments.
///
/// Every vertex is written as `x,y` followed by a single space, so a
/// non-empty `points` attribute ends with a trailing space.
///
/// # Examples
///
/// ```
/// # use minisvg_core::shape::Polyline;
/// # use minisvg_core::geometry::Point;
/// let polyline: Polyline = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// assert_eq!(polyline.points().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, point: impl Into<Point>) -> &mut Self {
        self.points.push(point.into());
        self
    }

    /// Returns this polyline with one more vertex.
    pub fn with_point(mut self, point: impl Into<Point>) -> Self {
        self.add_point(point);
        self
    }

    /// Vertices in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl Element for Polyline {
    fn render_element(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        ctx.write_str(r#"<polyline points=""#)?;
        for point in &self.points {
            write!(ctx, "{},{} ", point.x(), point.y())?;
        }
        ctx.write_str(r#""/>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::rendered;

    #[test]
    fn test_empty_polyline_has_empty_points() {
        assert_eq!(rendered(&Polyline::new()), r#"<polyline points=""/>"#);
    }

    #[test]
    fn test_polyline_three_points() {
        let polyline = Polyline::new()
            .with_point((0.0, 0.0))
            .with_point((10.0, 10.0))
            .with_point((20.0, 0.0));
        assert_eq!(
            rendered(&polyline),
            r#"<polyline points="0,0 10,10 20,0 "/>"#
        );
    }

    #[test]
    fn test_polyline_single_point() {
        let polyline = Polyline::new().with_point((1.5, -2.0));
        assert_eq!(rendered(&polyline), r#"<polyline points="1.5,-2 "/>"#);
    }

    #[test]
    fn test_add_point_chains_in_place() {
        let mut polyline = Polyline::new();
        polyline
            .add_point(Point::new(1.0, 2.0))
            .add_point(Point::new(3.0, 4.0));
        assert_eq!(
            polyline.points(),
            &[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }

    #[test]
    fn test_polyline_keeps_insertion_order_and_duplicates() {
        let polyline = Polyline::new()
            .with_point((5.0, 5.0))
            .with_point((1.0, 1.0))
            .with_point((5.0, 5.0));
        assert_eq!(
            rendered(&polyline),
            r#"<polyline points="5,5 1,1 5,5 "/>"#
        );
    }

    #[test]
    fn test_polyline_collect_and_extend() {
        let mut polyline: Polyline = vec![Point::new(0.0, 0.0)].into_iter().collect();
        polyline.extend([Point::new(1.0, 1.0), Point::new(2.0, 0.0)]);
        assert_eq!(polyline.points().len(), 3);
        assert_eq!(
            rendered(&polyline),
            r#"<polyline points="0,0 1,1 2,0 "/>"#
        );
    }
}
