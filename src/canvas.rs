//! Render context and the drawing primitives every page routine uses.
//!
//! A `RenderContext` is created per composition and owns everything drawn so
//! far. Nothing is shared between contexts, so independent records can be
//! composed on separate threads.

use std::collections::HashMap;

use crate::fonts::text_width;
use crate::images::{self, ImageSource};
use crate::model::{DrawOp, Document, EmbeddedImage, Font, Page, Paint, Rgb};

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

pub const TEXT_COLOR: Rgb = [36, 36, 36];
pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];
pub const LINK_COLOR: Rgb = [0, 0, 255];

pub const CHECKBOX_SIZE: f32 = 10.0;
const CHECKBOX_LABEL_SIZE: f32 = 12.0;
const LINK_SIZE: f32 = 9.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: f32,
    pub font: Font,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: TEXT_COLOR,
            size: 11.0,
            font: Font::Helvetica,
        }
    }
}

impl TextStyle {
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.font = Font::HelveticaBold;
        self
    }
}

pub struct RenderContext<'a> {
    images: &'a dyn ImageSource,
    pages: Vec<Page>,
    embedded: Vec<EmbeddedImage>,
    // reference -> embedded index; None caches a failed load
    image_index: HashMap<String, Option<usize>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(images: &'a dyn ImageSource) -> Self {
        Self {
            images,
            pages: Vec::new(),
            embedded: Vec::new(),
            image_index: HashMap::new(),
        }
    }

    pub fn begin_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Ops of the page currently being drawn.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    fn push(&mut self, op: DrawOp) {
        if self.pages.is_empty() {
            self.begin_page();
        }
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn embed(&mut self, reference: &str) -> Option<usize> {
        if let Some(&cached) = self.image_index.get(reference) {
            return cached;
        }
        let loaded = self
            .images
            .load(reference)
            .and_then(images::decode)
            .map_err(|e| log::warn!("Skipping image {reference:?}: {e}"))
            .ok()
            .map(|img| {
                self.embedded.push(img);
                self.embedded.len() - 1
            });
        self.image_index.insert(reference.to_string(), loaded);
        loaded
    }

    pub fn finish(self, title: impl Into<String>) -> Document {
        Document {
            title: title.into(),
            pages: self.pages,
            images: self.embedded,
        }
    }
}

/// Left-anchored text with its line box top at `y`. No wrapping.
pub fn draw_text(ctx: &mut RenderContext, text: &str, x: f32, y: f32, style: TextStyle) {
    ctx.push(DrawOp::Text {
        text: text.to_string(),
        x,
        y,
        size: style.size,
        font: style.font,
        color: style.color,
    });
}

pub fn draw_rect(ctx: &mut RenderContext, x: f32, y: f32, width: f32, height: f32, paint: Paint) {
    ctx.push(DrawOp::Rect {
        x,
        y,
        width,
        height,
        paint,
    });
}

/// A 10x10 box, a checkmark when `checked`, and `label` to its right.
pub fn draw_checkbox(ctx: &mut RenderContext, x: f32, y: f32, label: &str, checked: bool) {
    draw_rect(
        ctx,
        x,
        y,
        CHECKBOX_SIZE,
        CHECKBOX_SIZE,
        Paint::Stroke {
            color: BLACK,
            width: 1.0,
        },
    );
    if checked {
        ctx.push(DrawOp::Path {
            points: vec![(x + 1.0, y + 5.0), (x + 4.0, y + 9.0), (x + 9.0, y + 1.0)],
            color: BLACK,
            width: 1.0,
        });
    }
    draw_text(
        ctx,
        label,
        x + CHECKBOX_SIZE + 5.0,
        y,
        TextStyle::default().size(CHECKBOX_LABEL_SIZE),
    );
}

/// Link-coloured text with a clickable region covering it.
pub fn draw_link(ctx: &mut RenderContext, text: &str, url: &str, x: f32, y: f32) {
    let style = TextStyle::default().size(LINK_SIZE).color(LINK_COLOR);
    draw_text(ctx, text, x, y, style);
    ctx.push(DrawOp::Link {
        x,
        y,
        width: text_width(text, style.font, style.size),
        height: style.size,
        url: url.to_string(),
    });
}

/// Place an external image at fixed dimensions. An absent or unreadable
/// reference draws nothing; returns whether the image was placed.
pub fn draw_image(
    ctx: &mut RenderContext,
    reference: Option<&str>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> bool {
    let Some(reference) = reference.filter(|r| !r.is_empty()) else {
        return false;
    };
    let Some(image) = ctx.embed(reference) else {
        return false;
    };
    ctx.push(DrawOp::Image {
        image,
        x,
        y,
        width,
        height,
    });
    true
}
