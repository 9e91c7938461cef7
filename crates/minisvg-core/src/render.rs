//! Indentation-aware emission state shared by all elements.
//!
//! # Overview
//!
//! - [`RenderContext`] - Borrows the output sink and tracks the current indent
//! - [`Element`] - The capability of writing one SVG element into a context
//!
//! A context lives only as long as the render call that created it. Child
//! contexts produced by [`RenderContext::indented`] reborrow the same sink,
//! so all output lands in order.

use std::{
    fmt,
    io::{self, Write},
};

use crate::escape;

/// Emission state for one render pass: the sink, the indent step and the
/// current indent.
///
/// `indent` stays a multiple of `indent_step` when contexts are only
/// created through [`RenderContext::new`] and [`RenderContext::indented`].
///
/// # Examples
///
/// ```
/// # use minisvg_core::render::RenderContext;
/// let mut out: Vec<u8> = Vec::new();
/// let mut ctx = RenderContext::new(&mut out, 2);
/// {
///     let mut child = ctx.indented();
///     child.render_indent().unwrap();
///     child.write_str("<g/>").unwrap();
/// }
/// assert_eq!(out, b"  <g/>");
/// ```
pub struct RenderContext<'a> {
    out: &'a mut dyn Write,
    indent_step: usize,
    indent: usize,
}

impl<'a> RenderContext<'a> {
    /// Creates a top-level context with zero indentation.
    ///
    /// # Arguments
    ///
    /// * `out` - The sink receiving the SVG text.
    /// * `indent_step` - Number of spaces added per nesting level.
    pub fn new(out: &'a mut dyn Write, indent_step: usize) -> Self {
        Self::with_indent(out, indent_step, 0)
    }

    /// Creates a context starting at an explicit indentation.
    pub fn with_indent(out: &'a mut dyn Write, indent_step: usize, indent: usize) -> Self {
        Self {
            out,
            indent_step,
            indent,
        }
    }

    /// Returns a child context one level deeper, writing to the same sink.
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + self.indent_step,
        }
    }

    /// Number of spaces added per nesting level.
    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    /// Current indentation in spaces.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Writes the current indentation as spaces.
    pub fn render_indent(&mut self) -> io::Result<()> {
        write!(self.out, "{:width$}", "", width = self.indent)
    }

    /// Writes `s` to the sink verbatim.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    /// Writes `s` to the sink with XML special characters escaped.
    pub fn write_escaped(&mut self, s: &str) -> io::Result<()> {
        escape::write_escaped(&mut *self.out, s)
    }

    /// Writes formatted output, which lets `write!` target a context.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("indent_step", &self.indent_step)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

/// Something that serializes to exactly one SVG element.
pub trait Element {
    /// Writes the element itself, without leading indent or trailing newline.
    fn render_element(&self, ctx: &mut RenderContext<'_>) -> io::Result<()>;

    /// Writes the element as a full line: indent, element, newline.
    fn render(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        ctx.render_indent()?;
        self.render_element(ctx)?;
        ctx.write_str("\n")
    }
}
