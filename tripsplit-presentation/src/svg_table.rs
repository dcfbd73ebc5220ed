use crate::table::{Alignment, Table, display_width};
use std::{borrow::Cow, fmt::Write};

const FONT_SIZE: u32 = 14;
const TITLE_FONT_SIZE: u32 = 16;
const CELL_PADDING: u32 = 10;
const LINE_HEIGHT: u32 = FONT_SIZE + CELL_PADDING * 2;
const TITLE_HEIGHT: u32 = TITLE_FONT_SIZE + CELL_PADDING * 2;
const HEADER_BG: &str = "#2f4858";
const HEADER_TEXT: &str = "#ffffff";
const ROW_BG_EVEN: &str = "#f8fafc";
const ROW_BG_ODD: &str = "#eef2f6";
const ROW_TEXT: &str = "#1a202c";
const TITLE_TEXT: &str = "#1a202c";
const BORDER_COLOR: &str = "#cbd5e0";
const FONT_FAMILY: &str = "Noto Sans KR";
const CHAR_WIDTH: f32 = 8.5;

/// Renders a [`Table`] as a standalone SVG document.
pub fn render_svg(table: &Table<'_>) -> String {
    let col_count = table.headers.len();
    if col_count == 0 {
        return String::new();
    }

    let col_widths = column_widths(table);
    let total_width: u32 = col_widths.iter().sum::<u32>() + (col_count as u32 + 1) * CELL_PADDING;
    let title_height = if table.title.is_some() { TITLE_HEIGHT } else { 0 };
    let table_top = title_height;
    let total_height: u32 = title_height + LINE_HEIGHT * (1 + table.rows.len() as u32) + 2;

    let mut svg = String::with_capacity(4096);
    let _ = writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width}" height="{total_height}" viewBox="0 0 {total_width} {total_height}">"#
    );
    let _ = writeln!(
        &mut svg,
        r#"<style>text {{ font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}px; }} .title {{ font-size: {TITLE_FONT_SIZE}px; font-weight: bold; }} .strong {{ font-weight: bold; }}</style>"#
    );

    if let Some(title) = &table.title {
        let _ = writeln!(
            &mut svg,
            r#"<text class="title" x="{CELL_PADDING}" y="{}" fill="{TITLE_TEXT}">{}</text>"#,
            TITLE_HEIGHT / 2 + TITLE_FONT_SIZE / 2 - 2,
            escape_xml(title)
        );
    }

    let _ = writeln!(
        &mut svg,
        r#"<rect y="{table_top}" width="{total_width}" height="{}" fill="{BORDER_COLOR}" rx="4" />"#,
        total_height - table_top
    );
    let _ = writeln!(
        &mut svg,
        r#"<rect x="1" y="{}" width="{}" height="{LINE_HEIGHT}" fill="{HEADER_BG}" rx="3" />"#,
        table_top + 1,
        total_width - 2
    );
    write_row(
        &mut svg,
        table,
        &col_widths,
        &table.headers,
        table_top + 1,
        HEADER_TEXT,
        false,
    );

    for (row_idx, row) in table.rows.iter().enumerate() {
        let y = table_top + LINE_HEIGHT * (1 + row_idx as u32) + 1;
        let bg = if row_idx % 2 == 0 {
            ROW_BG_EVEN
        } else {
            ROW_BG_ODD
        };
        let _ = writeln!(
            &mut svg,
            r#"<rect x="1" y="{y}" width="{}" height="{LINE_HEIGHT}" fill="{bg}" />"#,
            total_width - 2
        );
        write_row(&mut svg, table, &col_widths, row, y, ROW_TEXT, true);
    }

    svg.push_str("</svg>");
    svg
}

fn write_row(
    svg: &mut String,
    table: &Table<'_>,
    col_widths: &[u32],
    cells: &[Cow<'_, str>],
    y: u32,
    fill: &str,
    is_body: bool,
) {
    let mut x = CELL_PADDING;
    for (i, (cell, &width)) in cells.iter().zip(col_widths).enumerate() {
        let alignment = table.alignment(i);
        let text_x = compute_text_x(x, width, alignment);
        let anchor = alignment_anchor(alignment);
        let class = if is_body && table.is_emphasized(i) {
            r#" class="strong""#
        } else {
            ""
        };
        let _ = writeln!(
            svg,
            r#"<text{class} x="{text_x}" y="{}" fill="{fill}" text-anchor="{anchor}">{}</text>"#,
            y + LINE_HEIGHT / 2 + FONT_SIZE / 2 - 2,
            escape_xml(cell)
        );
        x += width + CELL_PADDING;
    }
}

fn column_widths(table: &Table<'_>) -> Vec<u32> {
    let mut widths: Vec<u32> = table.headers.iter().map(|h| estimate_text_width(h)).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(estimate_text_width(cell));
        }
    }
    widths
}

fn estimate_text_width(text: &str) -> u32 {
    let width = display_width(text) as f32 * CHAR_WIDTH;
    (width.ceil() as u32).max(20) + CELL_PADDING * 2
}

fn compute_text_x(cell_x: u32, cell_width: u32, alignment: Alignment) -> u32 {
    match alignment {
        Alignment::Left => cell_x,
        Alignment::Center => cell_x + cell_width / 2,
        Alignment::Right => cell_x + cell_width,
    }
}

fn alignment_anchor(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "start",
        Alignment::Center => "middle",
        Alignment::Right => "end",
    }
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Stacks SVG documents top to bottom, centred horizontally.
pub fn stack_svgs(svgs: &[&str]) -> Option<String> {
    const SPACING: u32 = 20;

    if svgs.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(svgs.len());
    for svg in svgs {
        let width = svg_attribute(svg, "width")?;
        let height = svg_attribute(svg, "height")?;
        parts.push((width, height, svg_body(svg)?));
    }

    let max_width = parts.iter().map(|(width, _, _)| *width).max().unwrap_or(0);
    let total_height = parts.iter().map(|(_, height, _)| *height).sum::<u32>()
        + SPACING * (parts.len() as u32 - 1);

    let mut combined = String::with_capacity(svgs.iter().map(|s| s.len()).sum::<usize>() + 512);
    let _ = writeln!(
        &mut combined,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{max_width}" height="{total_height}" viewBox="0 0 {max_width} {total_height}">"#
    );

    let mut y_offset = 0u32;
    for (width, height, body) in parts {
        let x_offset = (max_width - width) / 2;
        let _ = writeln!(
            &mut combined,
            r#"<g transform="translate({x_offset}, {y_offset})">"#
        );
        combined.push_str(body);
        combined.push_str("</g>\n");
        y_offset += height + SPACING;
    }

    combined.push_str("</svg>");
    Some(combined)
}

fn svg_attribute(svg: &str, attr: &str) -> Option<u32> {
    let pattern = format!("{attr}=\"");
    let start = svg.find(&pattern)? + pattern.len();
    let end = svg[start..].find('"')? + start;
    svg[start..end].parse().ok()
}

// Inner markup of an `<svg>` element; styles stay since each group needs its own.
fn svg_body(svg: &str) -> Option<&str> {
    let start = svg.find('>')? + 1;
    let end = svg.rfind("</svg>")?;
    svg.get(start..end)
}
