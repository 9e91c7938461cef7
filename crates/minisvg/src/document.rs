//! The SVG document container.

use std::io::{self, Write};

use log::{debug, error, trace};

use minisvg_core::{
    render::{Element, RenderContext},
    shape::Shape,
};

use crate::{config::RenderConfig, error::RenderError};

const XML_PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const SVG_CLOSE: &str = "</svg>";

/// An ordered collection of shapes rendered as one `<svg>` root.
///
/// Shapes are owned by the document and written in insertion order, one
/// per line, each indented by the configured indent step.
///
/// # Examples
///
/// ```
/// # use minisvg::{Document, shape::{Circle, Polyline}};
/// let mut doc = Document::new();
/// doc.add(Circle::new().with_center((20.0, 30.0)).with_radius(15.0))
///     .add(Polyline::new().with_point((0.0, 0.0)).with_point((10.0, 10.0)));
///
/// let svg = doc.render_to_string().unwrap();
/// assert!(svg.contains(r#"  <circle cx="20" cy="30" r="15"/>"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    children: Vec<Shape>,
    config: RenderConfig,
}

impl Document {
    /// Creates an empty document with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            children: Vec::new(),
            config,
        }
    }

    /// Appends a shape to the end of the document.
    pub fn add(&mut self, shape: impl Into<Shape>) -> &mut Self {
        self.children.push(shape.into());
        self
    }

    /// Appends a shape that is already behind a box.
    pub fn add_owned(&mut self, shape: Box<Shape>) -> &mut Self {
        self.children.push(*shape);
        self
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Writes the complete SVG document to `out`.
    ///
    /// The output is the XML prologue, the `<svg>` root, one line per shape
    /// and the closing tag, each line ending in `\n`. Rendering leaves the
    /// document untouched, so repeated calls produce identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Sink`] as soon as `out` rejects a write. The
    /// sink keeps whatever was written before the failure.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        debug!(
            shapes = self.children.len(),
            indent_step = self.config.indent_step();
            "Rendering SVG document"
        );

        self.write_document(out).map_err(|err| {
            error!(err:err; "Failed to write SVG document");
            RenderError::from(err)
        })
    }

    /// Renders the document into a freshly allocated string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encoding`] if the output is not UTF-8, which
    /// cannot happen for documents built from `&str` and `String` values.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let mut buffer: Vec<u8> = Vec::new();
        self.render(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn write_document<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut ctx = RenderContext::new(out, self.config.indent_step());
        writeln!(ctx, "{XML_PROLOGUE}")?;
        writeln!(ctx, "{SVG_OPEN}")?;

        {
            let mut child_ctx = ctx.indented();
            for shape in &self.children {
                trace!(kind = shape.kind(); "Rendering shape");
                shape.render(&mut child_ctx)?;
            }
        }

        writeln!(ctx, "{SVG_CLOSE}")
    }
}

impl Extend<Shape> for Document {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.children.extend(iter);
    }
}

impl FromIterator<Shape> for Document {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
            config: RenderConfig::default(),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use minisvg_core::shape::{Circle, Polyline, Text};
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn coordinate_strategy() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0
    }

    fn shape_strategy() -> impl Strategy<Value = Shape> {
        prop_oneof![
            (coordinate_strategy(), coordinate_strategy(), 0.0f64..100.0).prop_map(
                |(x, y, r)| Shape::from(Circle::new().with_center((x, y)).with_radius(r))
            ),
            prop::collection::vec((coordinate_strategy(), coordinate_strategy()), 0..6)
                .prop_map(|points| {
                    Shape::from(points.into_iter().fold(Polyline::new(), Polyline::with_point))
                }),
            ("[a-zA-Z0-9 &<>\"']{0,24}", 0u32..72).prop_map(|(data, size)| {
                Shape::from(Text::new().with_font_size(size).with_data(data))
            }),
        ]
    }

    fn document_strategy() -> impl Strategy<Value = Document> {
        (prop::collection::vec(shape_strategy(), 0..8), 0usize..6).prop_map(
            |(shapes, indent_step)| {
                let mut doc = Document::with_config(RenderConfig::new(indent_step));
                doc.extend(shapes);
                doc
            },
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Rendering the same document twice should give identical output.
    fn check_render_is_deterministic(doc: &Document) -> Result<(), TestCaseError> {
        let first = doc.render_to_string()?;
        let second = doc.render_to_string()?;
        prop_assert_eq!(first, second);
        Ok(())
    }

    /// There is one line per shape between the root tags, in insertion
    /// order, each starting with exactly `indent_step` spaces.
    fn check_child_lines_are_ordered_and_indented(doc: &Document) -> Result<(), TestCaseError> {
        let svg = doc.render_to_string()?;
        let lines: Vec<&str> = svg.lines().collect();
        let step = doc.config().indent_step();

        prop_assert_eq!(lines.len(), doc.len() + 3);
        prop_assert_eq!(lines[0], XML_PROLOGUE);
        prop_assert_eq!(lines[1], SVG_OPEN);
        prop_assert_eq!(lines[lines.len() - 1], SVG_CLOSE);

        let indent = " ".repeat(step);
        for (line, shape) in lines[2..lines.len() - 1].iter().zip(doc.shapes()) {
            let element = line.strip_prefix(indent.as_str());
            prop_assert!(element.is_some(), "Line {line:?} lacks indent");
            let element = element.unwrap_or_default();
            prop_assert!(!element.starts_with(' '), "Line {line:?} is over-indented");
            let open_tag = format!("<{} ", shape.kind());
            prop_assert!(element.starts_with(&open_tag));
        }
        Ok(())
    }

    /// The document should end with exactly one closing root tag and newline.
    fn check_output_ends_with_close_tag(doc: &Document) -> Result<(), TestCaseError> {
        let svg = doc.render_to_string()?;
        prop_assert!(svg.ends_with("</svg>\n"));
        prop_assert_eq!(svg.matches("</svg>").count(), 1);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn render_is_deterministic(doc in document_strategy()) {
            check_render_is_deterministic(&doc)?;
        }

        #[test]
        fn child_lines_are_ordered_and_indented(doc in document_strategy()) {
            check_child_lines_are_ordered_and_indented(&doc)?;
        }

        #[test]
        fn output_ends_with_close_tag(doc in document_strategy()) {
            check_output_ends_with_close_tag(&doc)?;
        }
    }
}
