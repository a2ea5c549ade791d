//! Display-list model produced by composition and consumed by the PDF writer.
//!
//! Coordinates are layout units with the origin at the top-left corner of
//! the page and y growing downwards. Text `y` is the top of the line box.

pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(Rgb),
    Stroke { color: Rgb, width: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    /// Baseline RGB JPEG, embedded as-is.
    Jpeg,
    /// Decoded pixels, 4 bytes per pixel.
    Rgba8,
}

#[derive(Clone)]
pub struct EmbeddedImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paint: Paint,
    },
    /// Open stroked polyline (checkmarks).
    Path {
        points: Vec<(f32, f32)>,
        color: Rgb,
        width: f32,
    },
    Image {
        image: usize, // index into Document::images
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Link {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        url: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn links(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Link { .. }))
    }

    pub fn images(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Image { .. }))
    }
}

pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
    pub images: Vec<EmbeddedImage>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
