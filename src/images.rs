use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::{EmbeddedImage, ImageFormat};

/// Resolves an image reference (signature, logo) to encoded image bytes.
pub trait ImageSource: Send + Sync {
    fn load(&self, reference: &str) -> Result<Vec<u8>, Error>;
}

/// Reads references as file paths, relative ones resolved against `root`.
#[derive(Clone, Debug, Default)]
pub struct FsImageSource {
    root: Option<PathBuf>,
}

impl FsImageSource {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageSource for FsImageSource {
    fn load(&self, reference: &str) -> Result<Vec<u8>, Error> {
        let path = self.resolve(reference);
        std::fs::read(&path).map_err(|e| Error::image(format!("{}: {e}", path.display())))
    }
}

/// Images held in memory, keyed by reference.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageSource {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference: impl Into<String>, data: Vec<u8>) {
        self.images.insert(reference.into(), data);
    }

    pub fn with(mut self, reference: impl Into<String>, data: Vec<u8>) -> Self {
        self.insert(reference, data);
        self
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, reference: &str) -> Result<Vec<u8>, Error> {
        self.images
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::image(format!("no image registered for {reference:?}")))
    }
}

/// Decode encoded bytes into something the PDF writer can embed. RGB JPEGs
/// pass through untouched; everything else is expanded to RGBA pixels.
pub(crate) fn decode(data: Vec<u8>) -> Result<EmbeddedImage, Error> {
    let format = image::guess_format(&data).map_err(|e| Error::image(e.to_string()))?;
    let decoded = image::ImageReader::with_format(Cursor::new(&data), format)
        .decode()
        .map_err(|e| Error::image(e.to_string()))?;
    let (pixel_width, pixel_height) = (decoded.width(), decoded.height());
    if pixel_width == 0 || pixel_height == 0 {
        return Err(Error::image("image has no pixels"));
    }

    if format == image::ImageFormat::Jpeg && decoded.color() == image::ColorType::Rgb8 {
        return Ok(EmbeddedImage {
            data,
            format: ImageFormat::Jpeg,
            pixel_width,
            pixel_height,
        });
    }

    Ok(EmbeddedImage {
        data: decoded.to_rgba8().into_raw(),
        format: ImageFormat::Rgba8,
        pixel_width,
        pixel_height,
    })
}
