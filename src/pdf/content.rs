use pdf_writer::{Content, Name, Rect, Str};

use crate::canvas::PAGE_HEIGHT;
use crate::fonts::{ASCENDER_RATIO, to_winansi_bytes};
use crate::model::{DrawOp, Page, Paint, Rgb};

pub(super) struct LinkAnnotation {
    pub(super) rect: Rect,
    pub(super) url: String,
}

fn rgb(c: Rgb) -> (f32, f32, f32) {
    (c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0)
}

/// Bottom edge in PDF space of a box whose top is `y` in layout space.
fn flip(y: f32, height: f32) -> f32 {
    PAGE_HEIGHT - y - height
}

/// Translate one page of draw ops into a content stream. Link regions are
/// collected into `links` for the page's annotation array.
pub(super) fn page_content(page: &Page, image_names: &[String], links: &mut Vec<LinkAnnotation>) -> Content {
    let mut content = Content::new();

    for op in &page.ops {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                font,
                color,
            } => {
                let bytes = to_winansi_bytes(text);
                if bytes.is_empty() {
                    continue;
                }
                let (r, g, b) = rgb(*color);
                let baseline = PAGE_HEIGHT - y - size * ASCENDER_RATIO;
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content
                    .begin_text()
                    .set_font(Name(font.pdf_name().as_bytes()), *size)
                    .next_line(*x, baseline)
                    .show(Str(&bytes))
                    .end_text();
                content.restore_state();
            }
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                content.save_state();
                match paint {
                    Paint::Fill(color) => {
                        let (r, g, b) = rgb(*color);
                        content.set_fill_rgb(r, g, b);
                        content.rect(*x, flip(*y, *height), *width, *height);
                        content.fill_nonzero();
                    }
                    Paint::Stroke { color, width: lw } => {
                        let (r, g, b) = rgb(*color);
                        content.set_stroke_rgb(r, g, b);
                        content.set_line_width(*lw);
                        content.rect(*x, flip(*y, *height), *width, *height);
                        content.stroke();
                    }
                }
                content.restore_state();
            }
            DrawOp::Path {
                points,
                color,
                width,
            } => {
                let Some(&(x0, y0)) = points.first() else {
                    continue;
                };
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_stroke_rgb(r, g, b);
                content.set_line_width(*width);
                content.move_to(x0, PAGE_HEIGHT - y0);
                for &(px, py) in &points[1..] {
                    content.line_to(px, PAGE_HEIGHT - py);
                }
                content.stroke();
                content.restore_state();
            }
            DrawOp::Image {
                image,
                x,
                y,
                width,
                height,
            } => {
                let Some(name) = image_names.get(*image) else {
                    log::warn!("Image op refers to unknown image #{image}");
                    continue;
                };
                content.save_state();
                content.transform([*width, 0.0, 0.0, *height, *x, flip(*y, *height)]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }
            DrawOp::Link {
                x,
                y,
                width,
                height,
                url,
            } => {
                let bottom = flip(*y, *height);
                links.push(LinkAnnotation {
                    rect: Rect::new(*x, bottom, x + width, bottom + height),
                    url: url.clone(),
                });
            }
        }
    }

    content
}
