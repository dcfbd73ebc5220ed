use std::borrow::Cow;

const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Rendering-agnostic table consumed by [`render_text`] and
/// [`crate::svg_table::render_svg`].
#[derive(Clone, Debug, Default)]
pub struct Table<'a> {
    pub title: Option<Cow<'a, str>>,
    pub headers: Vec<Cow<'a, str>>,
    pub rows: Vec<Vec<Cow<'a, str>>>,
    alignments: Cow<'a, [Alignment]>,
    emphasized: Vec<usize>,
}

impl<'a> Table<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Cow<'a, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn alignments(mut self, alignments: impl Into<Cow<'a, [Alignment]>>) -> Self {
        self.alignments = alignments.into();
        self
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = Cow<'a, str>>) -> Self {
        self.headers = headers.into_iter().collect();
        self
    }

    pub fn row(mut self, row: impl IntoIterator<Item = Cow<'a, str>>) -> Self {
        self.rows.push(row.into_iter().collect());
        self
    }

    /// Marks a body column for bold rendering.
    pub fn emphasize(mut self, column: usize) -> Self {
        self.emphasized.push(column);
        self
    }

    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    pub fn is_emphasized(&self, column: usize) -> bool {
        self.emphasized.contains(&column)
    }
}

/// Terminal column width: one cell for ASCII, two for everything else (Hangul, CJK).
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(display_width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, fill),
        Alignment::Right => (fill, 0),
        Alignment::Center => (fill / 2, fill - fill / 2),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Renders a [`Table`] as fixed-width text with a dashed rule under the header.
pub fn render_text(table: &Table<'_>) -> String {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| display_width(h)).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let format_line = |cells: &[Cow<'_, str>]| -> String {
        let line = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| pad(cell, width, table.alignment(i)))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(table.rows.len() + 3);
    if let Some(title) = &table.title {
        lines.push(title.to_string());
    }
    if !table.headers.is_empty() {
        lines.push(format_line(&table.headers));
        lines.push(
            widths
                .iter()
                .map(|&width| "-".repeat(width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP),
        );
    }
    lines.extend(table.rows.iter().map(|row| format_line(row)));
    lines.join("\n")
}
