//! Column Definition
//!
//! Defines table columns with their properties and cell renderers, plus the
//! two capabilities a record type needs before it can be shown in a table.

use std::borrow::Cow;
use std::fmt::Display;
use std::hash::Hash;

/// Produces a stable key for a record, unique within one loaded page
pub trait Identifiable {
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;

    fn row_id(&self) -> Self::Id;
}

/// Describes how a record is laid out as table cells
pub trait Renderable: Sized {
    /// Columns in display order, left to right
    fn columns() -> Vec<Column<Self>>;
}

/// Visual tone for badge cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Render output of a single cell, mapped to elements by the view layer
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Secondary text (dates, slugs, identifiers)
    Muted(String),
    Badge { label: String, tone: Tone },
    Money(f64),
    Flag(bool),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn muted(value: impl Into<String>) -> Self {
        Cell::Muted(value.into())
    }

    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Text cell, or `Empty` when the value is missing or blank
    pub fn optional(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Cell::Text(v.to_string()),
            _ => Cell::Empty,
        }
    }

    /// Plain-text form of the cell
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(s) | Cell::Muted(s) => s.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Money(v) => format!("{v:.2}"),
            Cell::Flag(true) => "✓".to_string(),
            Cell::Flag(false) => "✗".to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining width
    Flex(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

/// Column definition for the data table
pub struct Column<R> {
    /// Column identifier
    pub id: &'static str,
    /// Translation key of the header label
    pub label: Cow<'static, str>,
    pub width: ColumnWidth,
    render: Box<dyn Fn(&R) -> Cell + Send + Sync>,
}

impl<R> Column<R> {
    pub fn new(
        id: &'static str,
        label: impl Into<Cow<'static, str>>,
        render: impl Fn(&R) -> Cell + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            width: ColumnWidth::default(),
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width weight
    pub fn flex(mut self, weight: f32) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> Cell {
        (self.render)(row)
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("width", &self.width)
            .finish()
    }
}
