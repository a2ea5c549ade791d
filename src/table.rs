use crate::canvas::{RenderContext, TextStyle, draw_rect, draw_text};
use crate::fonts::text_width;
use crate::model::{Font, Paint, Rgb};

const BORDER_COLOR: Rgb = [128, 128, 128];
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Gutter added to the doubled first column of a merged-first-column table.
pub const MERGED_COLUMN_GUTTER: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TableLayout {
    /// Equal columns, equal rows, centered single-line text, no header style.
    Uniform,
    /// First column is `2 * col_width + 50` wide; first row bold; body cells
    /// of the first column left-aligned.
    MergedFirstColumn,
    /// First row is twice the row height and bold; body rows follow it.
    DoubleHeightHeader,
}

#[derive(Clone, Copy, Debug)]
pub struct TableGeometry {
    pub x: f32,
    pub y: f32,
    pub col_width: f32,
    pub row_height: f32,
    pub cell_padding: f32,
    pub font_size: f32,
    pub text_color: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// What a table occupied once drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableExtent {
    pub rows: usize,
    pub bottom: f32,
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
}

impl TableLayout {
    /// Rectangle of cell (`row`, `col`). Positions depend only on the
    /// geometry and indices, never on cell content.
    pub fn cell_rect(self, geom: &TableGeometry, row: usize, col: usize) -> CellRect {
        let (cw, rh) = (geom.col_width, geom.row_height);
        match self {
            TableLayout::Uniform => CellRect {
                x: geom.x + col as f32 * cw,
                y: geom.y + row as f32 * rh,
                width: cw,
                height: rh,
            },
            TableLayout::MergedFirstColumn => {
                let first = cw * 2.0 + MERGED_COLUMN_GUTTER;
                let (x, width) = match col {
                    0 => (0.0, first),
                    _ => (first + (col - 1) as f32 * cw, cw),
                };
                CellRect {
                    x: geom.x + x,
                    y: geom.y + row as f32 * rh,
                    width,
                    height: rh,
                }
            }
            TableLayout::DoubleHeightHeader => {
                let (y, height) = match row {
                    0 => (0.0, rh * 2.0),
                    _ => ((row + 1) as f32 * rh, rh),
                };
                CellRect {
                    x: geom.x + col as f32 * cw,
                    y: geom.y + y,
                    width: cw,
                    height,
                }
            }
        }
    }

    fn cell_font(self, row: usize) -> Font {
        match self {
            TableLayout::Uniform => Font::Helvetica,
            TableLayout::MergedFirstColumn | TableLayout::DoubleHeightHeader if row == 0 => {
                Font::HelveticaBold
            }
            _ => Font::Helvetica,
        }
    }

    fn cell_align(self, row: usize, col: usize) -> Align {
        match self {
            TableLayout::MergedFirstColumn if row > 0 && col == 0 => Align::Left,
            _ => Align::Center,
        }
    }

    fn wraps(self, row: usize) -> bool {
        match self {
            TableLayout::Uniform => false,
            TableLayout::MergedFirstColumn => true,
            TableLayout::DoubleHeightHeader => row == 0,
        }
    }
}

/// The form keeps its printed shape when a data list is empty: `blank_rows`
/// rows of empty cells stand in for the missing data.
pub fn fill_empty(rows: Vec<Vec<String>>, blank_rows: usize, columns: usize) -> Vec<Vec<String>> {
    if !rows.is_empty() {
        return rows;
    }
    vec![vec![String::new(); columns]; blank_rows]
}

/// Greedy word wrap into lines no wider than `max_width`. A single word wider
/// than the line stays on its own line.
pub(crate) fn wrap_words(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && text_width(&candidate, font, size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw `rows` (first row is the heading row) as bordered cells.
pub fn render_table(
    ctx: &mut RenderContext,
    layout: TableLayout,
    rows: &[Vec<String>],
    geom: &TableGeometry,
) -> TableExtent {
    let mut bottom = geom.y;

    for (ri, row) in rows.iter().enumerate() {
        let font = layout.cell_font(ri);
        let style = TextStyle {
            color: geom.text_color,
            size: geom.font_size,
            font,
        };

        for (ci, text) in row.iter().enumerate() {
            let cell = layout.cell_rect(geom, ri, ci);
            draw_rect(
                ctx,
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                Paint::Stroke {
                    color: BORDER_COLOR,
                    width: 1.0,
                },
            );
            bottom = bottom.max(cell.y + cell.height);

            if text.trim().is_empty() {
                continue;
            }

            let avail = (cell.width - 2.0 * geom.cell_padding).max(0.0);
            let lines = if layout.wraps(ri) {
                wrap_words(text, font, geom.font_size, avail)
            } else {
                vec![text.clone()]
            };
            let line_h = geom.font_size * LINE_HEIGHT_RATIO;

            for (li, line) in lines.iter().enumerate() {
                let offset = match layout.cell_align(ri, ci) {
                    Align::Left => 0.0,
                    Align::Center => {
                        ((avail - text_width(line, font, geom.font_size)) / 2.0).max(0.0)
                    }
                };
                draw_text(
                    ctx,
                    line,
                    cell.x + geom.cell_padding + offset,
                    cell.y + geom.cell_padding + li as f32 * line_h,
                    style,
                );
            }
        }
    }

    log::debug!(
        "TABLE layout={:?} rows={} top={:.1} bottom={:.1}",
        layout,
        rows.len(),
        geom.y,
        bottom
    );

    TableExtent {
        rows: rows.len(),
        bottom,
    }
}
