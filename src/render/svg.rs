//! Minimal SVG document builder.
//!
//! Holds drawable primitives as structured elements and serializes them to a
//! well-formed SVG string with a namespace declaration and a viewBox. Only
//! the element kinds the diagram needs are modelled.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Stroke colour and width.
pub type Stroke = (String, f64);

#[derive(Debug, Clone)]
pub enum SvgElement {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Group {
        transform: Option<String>,
        children: Vec<SvgElement>,
    },
    /// Reusable tile, referenced by id. Emitted inside `<defs>`.
    Pattern {
        id: String,
        width: f64,
        height: f64,
        children: Vec<SvgElement>,
    },
}

/// An SVG document: a viewBox, a `<defs>` section and a flat element list.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    view_box: (f64, f64, f64, f64),
    defs: Vec<SvgElement>,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    pub fn new(view_box: (f64, f64, f64, f64)) -> Self {
        Self {
            view_box,
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Adds a definition (emitted inside `<defs>` before the body).
    pub fn add_def(&mut self, element: SvgElement) {
        self.defs.push(element);
    }

    /// Adds an element to the document body.
    pub fn add(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Serializes the whole document to an SVG string.
    pub fn serialize(&self) -> Result<String, fmt::Error> {
        let (x, y, w, h) = self.view_box;
        let mut out = String::new();

        write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">",
            x, y, w, h
        )?;

        if !self.defs.is_empty() {
            out.push_str("<defs>");
            for def in &self.defs {
                write_element(&mut out, def)?;
            }
            out.push_str("</defs>");
        }

        for element in &self.elements {
            write_element(&mut out, element)?;
        }

        out.push_str("</svg>");
        Ok(out)
    }
}

fn write_element(out: &mut String, element: &SvgElement) -> fmt::Result {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                x, y, width, height
            )?;
            write_paint(out, fill.as_deref(), stroke.as_ref())?;
            out.push_str(" />");
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
                x1,
                y1,
                x2,
                y2,
                escape_attr(&stroke.0),
                stroke.1
            )?;
        }
        SvgElement::Path { d, fill, stroke } => {
            write!(out, "<path d=\"{}\"", d)?;
            write_paint(out, fill.as_deref(), stroke.as_ref())?;
            out.push_str(" />");
        }
        SvgElement::Group {
            transform,
            children,
        } => {
            match transform {
                Some(t) => write!(out, "<g transform=\"{}\">", t)?,
                None => out.push_str("<g>"),
            }
            for child in children {
                write_element(out, child)?;
            }
            out.push_str("</g>");
        }
        SvgElement::Pattern {
            id,
            width,
            height,
            children,
        } => {
            write!(
                out,
                "<pattern id=\"{}\" width=\"{}\" height=\"{}\" patternUnits=\"userSpaceOnUse\">",
                id, width, height
            )?;
            for child in children {
                write_element(out, child)?;
            }
            out.push_str("</pattern>");
        }
    }
    Ok(())
}

fn write_paint(out: &mut String, fill: Option<&str>, stroke: Option<&Stroke>) -> fmt::Result {
    match fill {
        Some(color) => write!(out, " fill=\"{}\"", escape_attr(color))?,
        None => out.push_str(" fill=\"none\""),
    }
    if let Some((color, width)) = stroke {
        write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\"",
            escape_attr(color),
            width
        )?;
    }
    Ok(())
}

/// Escapes characters that would terminate or corrupt an attribute value.
/// Colour tokens come from user-editable configuration and cannot be trusted
/// to be attribute-safe.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.chars().any(|c| matches!(c, '&' | '<' | '"')) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
