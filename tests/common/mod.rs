#![allow(dead_code)]

use std::io::Cursor;

use activity_pdf::{Activity, Document, DrawOp, MemoryImageSource};
use serde_json::{Value, json};

/// Reference used for every signature in the fixtures below.
pub const SIGNATURE: &str = "signatures/sig.png";

/// A small opaque PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x * 20) as u8, (y * 20) as u8, 128, 255])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// A PNG with a transparent background, like a scanned signature.
pub fn transparent_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, _| {
        let alpha = if x % 2 == 0 { 0 } else { 255 };
        image::Rgba([0, 0, 0, alpha])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 10) as u8, (y * 10) as u8, 200])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg).unwrap();
    out.into_inner()
}

pub fn image_source() -> MemoryImageSource {
    MemoryImageSource::new().with(SIGNATURE, png_bytes(8, 4))
}

pub fn empty_record() -> Activity {
    Activity::new(json!({}))
}

pub fn signer() -> Value {
    json!({ "sign": SIGNATURE, "date": "2024-03-05T10:00:00Z" })
}

pub fn signers(n: usize) -> Value {
    Value::Array((0..n).map(|_| signer()).collect())
}

/// A record with every section populated.
pub fn full_record() -> Activity {
    Activity::new(json!({
        "_id": "65f0c0ffee",
        "serialNo": 12,
        "meetingName": "Cardiology Update",
        "initiatorName": "R. Haddad",
        "initiatorSign": SIGNATURE,
        "brief": {
            "from": "2024-03-01",
            "to": "2024-03-03",
            "brandOrFranchise": "Cardio",
            "specialties": "Cardiology",
            "market": "UAE",
            "NoOfDoctorsAndStaff": { "doctors": 40, "staff": 6 },
            "budget": {
                "marketing": { "selected": true, "amount": 60 },
                "sales": { "selected": false, "amount": 40 }
            },
            "proposedVenues": ["Venue A", "Venue B"],
            "type": { "workshop": true, "other": { "selected": false } }
        },
        "objectivesAndROI": {
            "qualitative": { "newProductLaunch": true },
            "quantitative": [
                { "brand": { "name": "Brand X" }, "country": "UAE", "growth": 5 },
                { "brand": "Brand Y", "country": "KSA", "expense": 2 }
            ],
            "initiatorDate": "2024-02-20T08:30:00.000Z",
            "allocatedApprovedBudget": "25000"
        },
        "meetingDetails": { "podium": "Yes", "headTable": "no" },
        "socialActivities": { "lunch": "YES" },
        "totalCost": { "total": 25000 },
        "buh": signers(2),
        "mh": signers(1),
        "pm": signers(3),
        "ch": signers(1),
        "gcc": [{ "sign": SIGNATURE }],
        "beneficiary": {
            "beneficiaryName": "Dr. Amal",
            "iban": "AE070331234567890123456",
            "country": "UAE"
        },
        "attachments": [
            "https://files.example.com/a.pdf",
            "https://files.example.com/b.pdf",
            "https://files.example.com/c.pdf"
        ]
    }))
}

/// Texts of a page (1-based), in drawing order.
pub fn page_texts(doc: &Document, page: usize) -> Vec<String> {
    doc.pages[page - 1].texts().map(str::to_string).collect()
}

pub fn has_text(doc: &Document, page: usize, needle: &str) -> bool {
    doc.pages[page - 1].texts().any(|t| t == needle)
}

/// (x, y, width, height) of every image placed on a page (1-based).
pub fn image_boxes(doc: &Document, page: usize) -> Vec<(f32, f32, f32, f32)> {
    doc.pages[page - 1]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Image {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .collect()
}

/// Image boxes on a page whose top edge is at `y`.
pub fn images_at(doc: &Document, page: usize, y: f32) -> Vec<(f32, f32, f32, f32)> {
    image_boxes(doc, page)
        .into_iter()
        .filter(|b| (b.1 - y).abs() < 0.01)
        .collect()
}

/// Start point of every checkmark drawn on a page (1-based).
pub fn checkmarks(doc: &Document, page: usize) -> Vec<(f32, f32)> {
    doc.pages[page - 1]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Path { points, .. } => points.first().copied(),
            _ => None,
        })
        .collect()
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
