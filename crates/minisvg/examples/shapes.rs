//! Renders a small drawing to stdout.
//!
//! Run with `RUST_LOG=trace` to see the rendering log.

use std::io;

use minisvg::{
    Document, RenderError,
    geometry::Point,
    shape::{Circle, Polyline, Text},
};

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let mut doc = Document::new();

    doc.add(Circle::new().with_center((50.0, 50.0)).with_radius(40.0));

    let zigzag: Polyline = (0..6)
        .map(|i| Point::new(f64::from(i) * 20.0, if i % 2 == 0 { 100.0 } else { 120.0 }))
        .collect();
    doc.add(zigzag);

    doc.add(
        Text::new()
            .with_position((10.0, 150.0))
            .with_offset((0.0, 4.0))
            .with_font_size(14)
            .with_font_family("Verdana")
            .with_font_weight("bold")
            .with_data("Circles & lines <demo>"),
    );

    let stdout = io::stdout();
    doc.render(&mut stdout.lock())
}
