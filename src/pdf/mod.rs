mod content;

use pdf_writer::{Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::canvas::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::Error;
use crate::fonts::register_fonts;
use crate::model::{Document, EmbeddedImage, ImageFormat};

use content::{LinkAnnotation, page_content};

const PRODUCER: &str = concat!("activity-pdf ", env!("CARGO_PKG_VERSION"));

fn embed_image(pdf: &mut Pdf, img: &EmbeddedImage, alloc: &mut impl FnMut() -> Ref) -> Ref {
    let xobj_ref = alloc();
    let (w, h) = (img.pixel_width as i32, img.pixel_height as i32);

    match img.format {
        ImageFormat::Jpeg => {
            let mut xobj = pdf.image_xobject(xobj_ref, &img.data);
            xobj.filter(Filter::DctDecode);
            xobj.width(w);
            xobj.height(h);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
        }
        ImageFormat::Rgba8 => {
            let has_alpha = img.data.chunks_exact(4).any(|p| p[3] < 255);
            let rgb_data: Vec<u8> = img
                .data
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect();
            let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

            let smask_ref = if has_alpha {
                let alpha_data: Vec<u8> = img.data.chunks_exact(4).map(|p| p[3]).collect();
                let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
                let mask_ref = alloc();
                let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(w);
                mask.height(h);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                Some(mask_ref)
            } else {
                None
            };

            let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
            xobj.filter(Filter::FlateDecode);
            xobj.width(w);
            xobj.height(h);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
            if let Some(mask_ref) = smask_ref {
                xobj.s_mask(mask_ref);
            }
        }
    }

    xobj_ref
}

/// Serialize a composed display list into PDF bytes.
pub fn render(doc: &Document) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let fonts = register_fonts(&mut pdf, &mut alloc);

    let image_xobjects: Vec<(String, Ref)> = doc
        .images
        .iter()
        .enumerate()
        .map(|(i, img)| (format!("Im{}", i + 1), embed_image(&mut pdf, img, &mut alloc)))
        .collect();
    let image_names: Vec<String> = image_xobjects.iter().map(|(name, _)| name.clone()).collect();

    let t_resources = t0.elapsed();

    let mut all_page_links: Vec<Vec<LinkAnnotation>> = Vec::with_capacity(doc.pages.len());
    let mut all_contents = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let mut links = Vec::new();
        all_contents.push(page_content(page, &image_names, &mut links));
        all_page_links.push(links);
    }

    let n = all_contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    let page_annot_refs: Vec<Vec<Ref>> = all_page_links
        .iter()
        .map(|links| {
            links
                .iter()
                .map(|link| {
                    let annot_ref = alloc();
                    let mut annot = pdf.annotation(annot_ref);
                    annot
                        .subtype(pdf_writer::types::AnnotationType::Link)
                        .rect(link.rect)
                        .border(0.0, 0.0, 0.0, None);
                    annot
                        .action()
                        .action_type(pdf_writer::types::ActionType::Uri)
                        .uri(Str(link.url.as_bytes()));
                    annot_ref
                })
                .collect()
        })
        .collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);
    pdf.document_info(info_id)
        .title(TextStr(&doc.title))
        .producer(TextStr(PRODUCER));

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_ids[i]);
        if !page_annot_refs[i].is_empty() {
            page.annotations(page_annot_refs[i].iter().copied());
        }
        {
            let mut resources = page.resources();
            {
                let mut font_dict = resources.fonts();
                for entry in &fonts {
                    font_dict.pair(Name(entry.font.pdf_name().as_bytes()), entry.font_ref);
                }
            }
            if !image_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &image_xobjects {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
        }
    }

    let bytes = pdf.finish();

    log::info!(
        "Serialize phases: resources={:.1}ms, pages={:.1}ms ({} pages, {} images, {} bytes)",
        t_resources.as_secs_f64() * 1000.0,
        (t0.elapsed() - t_resources).as_secs_f64() * 1000.0,
        n,
        image_xobjects.len(),
        bytes.len(),
    );

    Ok(bytes)
}
