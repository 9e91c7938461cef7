//! The `<text>` element.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text>.
//!
//! Attributes are written in a fixed order: `x`, `y`, `dx`, `dy`,
//! `font-size`, then `font-family` and `font-weight` when set. The string
//! attributes and the content are XML-escaped; the numeric ones are not.

use std::io;

use crate::{
    geometry::Point,
    render::{Element, RenderContext},
};

/// A run of text anchored at a position, with an optional offset.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Position | `(0, 0)` |
/// | Offset | `(0, 0)` |
/// | Font size | `1` |
/// | Font family | absent |
/// | Font weight | absent |
/// | Data | empty |
///
/// # Examples
///
/// ```
/// # use minisvg_core::shape::Text;
/// let text = Text::new()
///     .with_position((10.0, 20.0))
///     .with_font_size(14)
///     .with_font_family("Verdana")
///     .with_data("Hello");
/// assert_eq!(text.font_family(), Some("Verdana"));
/// assert_eq!(text.font_weight(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
}

impl Text {
    /// Creates an empty text element with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the anchor point (`x`, `y`).
    pub fn set_position(&mut self, position: impl Into<Point>) -> &mut Self {
        self.position = position.into();
        self
    }

    /// Sets the offset from the anchor point (`dx`, `dy`).
    pub fn set_offset(&mut self, offset: impl Into<Point>) -> &mut Self {
        self.offset = offset.into();
        self
    }

    /// Sets the font size (`font-size`).
    pub fn set_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Sets the font family (`font-family`).
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Verdana", "Times New Roman", "monospace")
    pub fn set_font_family(&mut self, family: impl Into<String>) -> &mut Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font weight (`font-weight`), e.g. "bold" or "300".
    pub fn set_font_weight(&mut self, weight: impl Into<String>) -> &mut Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Removes the font family so the attribute is omitted again.
    pub fn clear_font_family(&mut self) -> &mut Self {
        self.font_family = None;
        self
    }

    /// Removes the font weight so the attribute is omitted again.
    pub fn clear_font_weight(&mut self) -> &mut Self {
        self.font_weight = None;
        self
    }

    /// Sets the text content.
    pub fn set_data(&mut self, data: impl Into<String>) -> &mut Self {
        self.data = data.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<Point>) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Point>) -> Self {
        self.set_offset(offset);
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.set_font_size(size);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.set_font_family(family);
        self
    }

    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.set_font_weight(weight);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.set_data(data);
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_weight(&self) -> Option<&str> {
        self.font_weight.as_deref()
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
        }
    }
}

/// Writes ` name="value"` with the value escaped.
fn write_string_attribute(ctx: &mut RenderContext<'_>, name: &str, value: &str) -> io::Result<()> {
    write!(ctx, r#" {name}=""#)?;
    ctx.write_escaped(value)?;
    ctx.write_str("\"")
}

impl Element for Text {
    fn render_element(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        write!(
            ctx,
            r#"<text x="{}" y="{}" dx="{}" dy="{}" font-size="{}""#,
            self.position.x(),
            self.position.y(),
            self.offset.x(),
            self.offset.y(),
            self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write_string_attribute(ctx, "font-family", family)?;
        }
        if let Some(weight) = &self.font_weight {
            write_string_attribute(ctx, "font-weight", weight)?;
        }
        ctx.write_str(">")?;
        ctx.write_escaped(&self.data)?;
        ctx.write_str("</text>")
    }
}
