mod common;

use activity_pdf::{
    APPROVAL_BLOCKS, Activity, BUSINESS_UNIT_HEAD_ROW, DATE_BLANK, DrawOp, EXPENSE_HEADINGS,
    MARKETING_HEAD_ROW, MemoryImageSource, PAGE_COUNT, PORTFOLIO_MANAGER_ROW, Paint,
    QUANTITATIVE_BLANK_ROWS, QUANTITATIVE_HEADINGS, attachment_label, attachment_y, compose,
    marketing_sales_rows, pr_rows, quantitative_rows, total_cost_rows, venue_line,
};
use common::*;
use serde_json::json;

#[test]
fn empty_record_renders_every_page_with_placeholders() {
    let doc = compose(&empty_record(), &MemoryImageSource::new());

    assert_eq!(doc.page_count(), PAGE_COUNT);
    for page in 1..=PAGE_COUNT {
        assert!(has_text(&doc, page, "Tracking ID: ______"), "page {page}");
        assert!(has_text(&doc, page, "Meeting Name: "), "page {page}");
        assert!(has_text(&doc, page, "Julphar"), "page {page}");
    }

    assert!(has_text(&doc, 1, "From : ____/____/____"));
    assert!(has_text(&doc, 1, "Marketing: _______%"));
    assert!(has_text(
        &doc,
        1,
        "Allocated Approved Budget: ____________________________"
    ));
    assert!(has_text(&doc, 1, &format!("Date: {DATE_BLANK}")));
    assert!(has_text(&doc, 2, "Check in: ______/_____/_____"));
    assert!(has_text(&doc, 2, "Number of days: ________________"));
    assert!(has_text(&doc, 3, "City: __________________________"));
    assert!(has_text(&doc, 5, "Beneficiary Name: __________________________"));
    assert!(has_text(&doc, 5, "IBAN: ____________________________________"));

    assert!(doc.pages.iter().all(|p| p.images().next().is_none()));
    assert!(doc.pages.iter().all(|p| p.links().next().is_none()));
    assert!(doc.images.is_empty());
}

#[test]
fn empty_strings_render_as_placeholders() {
    let activity = Activity::new(json!({
        "meetingName": "",
        "brief": { "market": "" },
        "beneficiary": { "bankName": "" }
    }));
    let doc = compose(&activity, &MemoryImageSource::new());
    assert!(has_text(&doc, 1, "Meeting Name: "));
    assert!(has_text(&doc, 1, "Market(s): _____________________________ "));
    assert!(has_text(&doc, 5, "Bank Name: _______________________________"));
}

#[test]
fn header_carries_tracking_meeting_and_initiator() {
    let doc = compose(&full_record(), &image_source());
    for page in 1..=PAGE_COUNT {
        assert!(has_text(&doc, page, "Tracking ID: 000012"));
        assert!(has_text(&doc, page, "Meeting Name: Cardiology Update"));
        assert!(has_text(&doc, page, "Initiator Name: R. Haddad"));
    }
}

#[test]
fn venue_line_pads_filled_slots() {
    let activity = Activity::new(json!({
        "serialNo": 12,
        "meetingName": "Kickoff",
        "initiatorName": "Alice",
        "brief": { "proposedVenues": ["Venue A"] }
    }));
    let expected = "Proposed Venue(s): 1. Venue A           2. _____________________ 3. _____________________";
    assert_eq!(venue_line(&activity), expected);

    let doc = compose(&activity, &MemoryImageSource::new());
    assert!(has_text(&doc, 1, expected));
    assert!(has_text(&doc, 1, "Tracking ID: 000012"));
    assert!(has_text(&doc, 3, "Meeting Name: Kickoff"));
    assert!(has_text(&doc, 5, "Initiator Name: Alice"));
    for page in 1..=PAGE_COUNT {
        assert!(checkmarks(&doc, page).is_empty(), "page {page}");
    }
}

#[test]
fn expense_tables_keep_printed_headings() {
    let doc = compose(&empty_record(), &MemoryImageSource::new());
    let texts = page_texts(&doc, 3);
    for heading in EXPENSE_HEADINGS {
        // wrapped onto several lines inside the cell, once per table
        let first_word = heading.split_whitespace().next().unwrap_or_default();
        assert!(texts.iter().filter(|t| t.starts_with(first_word)).count() >= 2);
    }
    assert_eq!(
        marketing_sales_rows(&empty_record())[0],
        EXPENSE_HEADINGS.to_vec()
    );
    assert_eq!(pr_rows(&empty_record())[0], EXPENSE_HEADINGS.to_vec());
    assert_eq!(pr_rows(&empty_record()).last().map(|r| r[0].as_str()), Some("Total"));
}

fn checks_for(value: serde_json::Value) -> usize {
    let activity = Activity::new(json!({ "brief": { "type": { "workshop": value } } }));
    let doc = compose(&activity, &MemoryImageSource::new());
    checkmarks(&doc, 1).len()
}

#[test]
fn checkbox_truth_table() {
    assert_eq!(checks_for(json!(true)), 1);
    assert_eq!(checks_for(json!(false)), 0);
    assert_eq!(checks_for(json!(null)), 0);
    assert_eq!(checks_for(json!("true")), 0);
    assert_eq!(checks_for(json!(1)), 0);

    let absent = compose(&empty_record(), &MemoryImageSource::new());
    assert!(checkmarks(&absent, 1).is_empty());

    // the Workshop box sits at (120, 350)
    let activity = Activity::new(json!({ "brief": { "type": { "workshop": true } } }));
    let doc = compose(&activity, &MemoryImageSource::new());
    assert_eq!(checkmarks(&doc, 1), vec![(121.0, 355.0)]);
}

#[test]
fn yes_no_pairs_check_one_side() {
    let doc = compose(&full_record(), &image_source());
    let marks = checkmarks(&doc, 2);
    // podium yes (130, 340), headtable no (250, 365), lunch yes (200, 570)
    assert!(marks.contains(&(131.0, 345.0)));
    assert!(marks.contains(&(251.0, 370.0)));
    assert!(marks.contains(&(201.0, 575.0)));
    assert_eq!(marks.len(), 3);
}

fn quantitative_borders(activity: &Activity) -> usize {
    let doc = compose(activity, &MemoryImageSource::new());
    doc.pages[0]
        .ops
        .iter()
        .filter(|op| {
            matches!(
                op,
                DrawOp::Rect {
                    paint: Paint::Stroke {
                        color: [128, 128, 128],
                        ..
                    },
                    ..
                }
            )
        })
        .count()
}

#[test]
fn quantitative_table_falls_back_to_blank_rows() {
    let columns = QUANTITATIVE_HEADINGS.len();

    let empty = empty_record();
    let rows = quantitative_rows(&empty);
    assert_eq!(rows.len(), 1 + QUANTITATIVE_BLANK_ROWS);
    assert!(rows[1..].iter().flatten().all(String::is_empty));
    assert_eq!(quantitative_borders(&empty), (1 + QUANTITATIVE_BLANK_ROWS) * columns);

    let explicit_empty = Activity::new(json!({ "objectivesAndROI": { "quantitative": [] } }));
    assert_eq!(quantitative_rows(&explicit_empty).len(), 1 + QUANTITATIVE_BLANK_ROWS);

    let full = full_record();
    let rows = quantitative_rows(&full);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["Brand X", "UAE", "", "", "5", ""]);
    assert_eq!(rows[2], vec!["Brand Y", "KSA", "", "", "", "2"]);
    assert_eq!(quantitative_borders(&full), 3 * columns);

    let doc = compose(&full, &image_source());
    assert!(has_text(&doc, 1, "Brand X"));
    assert!(has_text(&doc, 1, "Product"));
}

#[test]
fn signature_rows_on_pages_one_and_three() {
    for n in [0usize, 1, 2, 3, 5] {
        let activity = Activity::new(json!({ "buh": signers(n), "mh": signers(n), "pm": signers(n) }));
        let doc = compose(&activity, &image_source());

        for (page, row) in [
            (1, BUSINESS_UNIT_HEAD_ROW),
            (3, MARKETING_HEAD_ROW),
            (3, PORTFOLIO_MANAGER_ROW),
        ] {
            let boxes = images_at(&doc, page, row.y);
            assert_eq!(boxes.len(), n, "page {page} row y={}", row.y);
            if n == 0 {
                continue;
            }
            let left = boxes.iter().map(|b| b.0).fold(f32::MAX, f32::min);
            let right = 595.0 - boxes.iter().map(|b| b.0 + b.2).fold(f32::MIN, f32::max);
            assert!(
                (left - right - row.adjustment).abs() < 0.01,
                "page {page} n={n}: left={left} right={right}"
            );
        }
    }
}

#[test]
fn initiator_signature_on_pages_one_and_two() {
    let doc = compose(&full_record(), &image_source());
    assert!(image_boxes(&doc, 1).contains(&(180.0, 638.0, 100.0, 40.0)));
    assert!(image_boxes(&doc, 2).contains(&(150.0, 720.0, 100.0, 40.0)));
    // one distinct reference
    assert_eq!(doc.images.len(), 1);
}

#[test]
fn unreadable_signatures_leave_the_page_intact() {
    let activity = Activity::new(json!({
        "initiatorSign": "gone.png",
        "buh": [{ "sign": "gone.png" }, { "sign": SIGNATURE }],
        "ch": [{ "sign": "also-gone.png", "date": "2024-01-09" }]
    }));
    let doc = compose(&activity, &image_source());

    assert_eq!(doc.page_count(), PAGE_COUNT);
    let buh = images_at(&doc, 1, BUSINESS_UNIT_HEAD_ROW.y);
    assert_eq!(buh.len(), 1);
    assert_eq!(buh[0].0, BUSINESS_UNIT_HEAD_ROW.positions(2)[1]);
    assert!(image_boxes(&doc, 4).is_empty());
    assert!(has_text(&doc, 4, "Date: 01/09/2024"));
    assert!(has_text(&doc, 1, "Business Unit/Head Signature: ______________________________________________________________"));
}

#[test]
fn approval_blocks_in_fixed_order() {
    let doc = compose(&empty_record(), &MemoryImageSource::new());
    let texts = page_texts(&doc, 4);
    let positions: Vec<usize> = APPROVAL_BLOCKS
        .iter()
        .map(|b| {
            texts
                .iter()
                .position(|t| t == b.label)
                .unwrap_or_else(|| panic!("missing {}", b.label))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(APPROVAL_BLOCKS.windows(2).all(|w| w[0].top < w[1].top));

    let blank_dates = texts
        .iter()
        .filter(|t| *t == "Date: ____________________________________")
        .count();
    assert_eq!(blank_dates, APPROVAL_BLOCKS.len());
}

#[test]
fn approval_blocks_use_last_signer() {
    let activity = Activity::new(json!({
        "ch": [
            { "sign": "first.png", "date": "2024-01-01" },
            { "sign": SIGNATURE, "date": "2024-04-15T09:00:00Z" }
        ],
        "gcc": [{ "sign": SIGNATURE }]
    }));
    let doc = compose(&activity, &image_source());
    let ch = APPROVAL_BLOCKS[0];
    let gcc = APPROVAL_BLOCKS[1];

    assert_eq!(image_boxes(&doc, 4), vec![
        (400.0, ch.image_y, 100.0, 40.0),
        (400.0, gcc.image_y, 100.0, 40.0),
    ]);
    assert!(has_text(&doc, 4, "Date: 04/15/2024"));
    assert!(has_text(&doc, 4, &format!("Date: {DATE_BLANK}")));
    let static_blanks = page_texts(&doc, 4)
        .iter()
        .filter(|t| *t == "Date: ____________________________________")
        .count();
    assert_eq!(static_blanks, 3);
}

#[test]
fn total_cost_defaults_to_zero() {
    let rows = total_cost_rows(&empty_record());
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r[1] == "0"));
    assert_eq!(rows[3][0], "Total");

    let rows = total_cost_rows(&full_record());
    assert_eq!(rows[3][1], "25000");
}

#[test]
fn attachments_become_stacked_links() {
    let doc = compose(&full_record(), &image_source());
    let links: Vec<(f32, String)> = doc.pages[4]
        .links()
        .filter_map(|op| match op {
            DrawOp::Link { y, url, .. } => Some((*y, url.clone())),
            _ => None,
        })
        .collect();

    assert_eq!(links.len(), 3);
    for (i, (y, url)) in links.iter().enumerate() {
        assert_eq!(*y, attachment_y(i));
        assert!(has_text(&doc, 5, &attachment_label(i)));
        assert!(url.ends_with(["a.pdf", "b.pdf", "c.pdf"][i]));
    }
    assert!(links.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(attachment_label(0), "\u{2022} Document 1");

    for page in 0..4 {
        assert_eq!(doc.pages[page].links().count(), 0);
    }
}

#[test]
fn beneficiary_fields_fill_in() {
    let doc = compose(&full_record(), &image_source());
    assert!(has_text(&doc, 5, "Beneficiary Name: Dr. Amal"));
    assert!(has_text(&doc, 5, "IBAN: AE070331234567890123456"));
    assert!(has_text(&doc, 5, "Country: UAE"));
    assert!(has_text(&doc, 5, "Attachments:"));
}

#[test]
fn composition_is_deterministic() {
    let a = compose(&full_record(), &image_source());
    let b = compose(&full_record(), &image_source());
    assert_eq!(a.pages, b.pages);
    assert_eq!(a.images.len(), b.images.len());
}
