mod activity;
mod canvas;
mod compose;
mod config;
mod error;
mod fields;
mod fonts;
mod images;
mod model;
mod pdf;
mod signature;
mod table;

pub use activity::{Activity, QuantitativeItem, Signer, SignerRole};
pub use canvas::{
    CHECKBOX_SIZE, LINK_COLOR, PAGE_HEIGHT, PAGE_WIDTH, RenderContext, TEXT_COLOR, TextStyle,
    draw_checkbox, draw_image, draw_link, draw_rect, draw_text,
};
pub use compose::{
    APPROVAL_BLOCKS, ApprovalBlock, DOCUMENT_TITLE, EXPENSE_HEADINGS, PAGE_COUNT,
    QUANTITATIVE_BLANK_ROWS, QUANTITATIVE_HEADINGS, attachment_label, attachment_y, compose,
    marketing_sales_rows, pr_rows, quantitative_rows, total_cost_rows, venue_line,
};
pub use config::{ASSETS_ENV, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, RenderConfig};
pub use error::Error;
pub use fields::{DATE_BLANK, date_or, field_is, field_or, field_or_bool, format_date, lookup};
pub use fonts::text_width;
pub use images::{FsImageSource, ImageSource, MemoryImageSource};
pub use model::{Document, DrawOp, EmbeddedImage, Font, ImageFormat, Page, Paint, Rgb};
pub use signature::{
    BUSINESS_UNIT_HEAD_ROW, MARKETING_HEAD_ROW, PORTFOLIO_MANAGER_ROW, SignatureRow,
    draw_signature_row,
};
pub use table::{
    CellRect, MERGED_COLUMN_GUTTER, TableExtent, TableGeometry, TableLayout, fill_empty,
    render_table,
};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// File stem used when a record carries no identifier.
const FALLBACK_STEM: &str = "activity";

/// Serialize a composed document into PDF bytes.
pub fn render_pdf(doc: &Document) -> Result<Vec<u8>, Error> {
    pdf::render(doc)
}

/// Compose and serialize an activity into a caller-owned writer.
pub fn write_activity_pdf<W: Write>(
    activity: &Activity,
    images: &dyn ImageSource,
    mut out: W,
) -> Result<usize, Error> {
    let t0 = Instant::now();

    let doc = compose(activity, images);
    let t_compose = t0.elapsed();

    let bytes = render_pdf(&doc)?;
    let t_render = t0.elapsed();

    out.write_all(&bytes)?;
    out.flush()?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_compose.as_secs_f64() * 1000.0,
        (t_render - t_compose).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(bytes.len())
}

/// Render an activity to `<output_dir>/<record id>.pdf` and return the path.
///
/// The destination is created before any page is composed; failing to open
/// it aborts the render.
pub fn compose_to_file(activity: &Activity, config: &RenderConfig) -> Result<PathBuf, Error> {
    let stem = file_stem(activity)?;
    let path = config.output_dir.join(format!("{stem}.pdf"));

    let file = File::create(&path).map_err(|source| Error::Destination {
        path: path.clone(),
        source,
    })?;
    let images = config.image_source();
    write_activity_pdf(activity, &images, BufWriter::new(file))?;

    log::info!("Wrote {}", path.display());
    Ok(path)
}

fn file_stem(activity: &Activity) -> Result<String, Error> {
    let Some(id) = activity.id() else {
        log::warn!("Activity has no identifier, writing {FALLBACK_STEM}.pdf");
        return Ok(FALLBACK_STEM.to_string());
    };
    let unusable = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if unusable {
        return Err(Error::InvalidIdentifier(id));
    }
    Ok(id)
}
