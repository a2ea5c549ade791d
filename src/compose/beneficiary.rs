//! Page 5: beneficiary banking details and linked attachments.

use crate::activity::Activity;
use crate::canvas::{RenderContext, TextStyle, draw_link, draw_text};

use super::{MARGIN_X, draw_section_heading};

const RIGHT_COLUMN_X: f32 = 300.0;
const ATTACHMENTS_TOP: f32 = 370.0;
const ATTACHMENT_SPACING: f32 = 15.0;

/// (label, record key, placeholder) pairs, two per row: left then right.
const DETAIL_ROWS: [[(&str, &str, &str); 2]; 6] = [
    [
        ("Beneficiary Name", "beneficiaryName", "__________________________"),
        ("Work Place", "workPlace", "_________________________________"),
    ],
    [
        ("Specialty", "speciality", "_________________________________"),
        ("Bank Address", "bankAddress", "_______________________________"),
    ],
    [
        ("Bank Name", "bankName", "_______________________________"),
        ("Branch Name", "bankBranch", "_______________________________"),
    ],
    [
        ("IBAN", "iban", "____________________________________"),
        ("Amount", "amount", "____________________________________"),
    ],
    [
        ("Bank Swift Code", "bankSwiftCode", "___________________________"),
        ("Curr", "curr", "_______________________________________"),
    ],
    [
        ("Ref Event", "refEvent", "________________________________"),
        ("Country", "country", "____________________________________"),
    ],
];

/// Label of the `index`-th (zero based) attachment link.
pub fn attachment_label(index: usize) -> String {
    format!("\u{2022} Document {}", index + 1)
}

/// Vertical position of the `index`-th attachment link.
pub fn attachment_y(index: usize) -> f32 {
    ATTACHMENTS_TOP + index as f32 * ATTACHMENT_SPACING
}

pub(super) fn compose_page(ctx: &mut RenderContext, activity: &Activity) {
    let text = TextStyle::default();

    draw_section_heading(ctx, "Beneficiary Detail", 160.0, 80.0);

    for (row, pair) in DETAIL_ROWS.iter().enumerate() {
        let y = 200.0 + row as f32 * 25.0;
        for (&(label, key, blank), x) in pair.iter().zip([MARGIN_X, RIGHT_COLUMN_X]) {
            let value = activity.field_or(&format!("beneficiary.{key}"), blank);
            draw_text(ctx, &format!("{label}: {value}"), x, y, text);
        }
    }

    draw_text(ctx, "Attachments:", MARGIN_X, 350.0, text);
    for (i, url) in activity.attachments().iter().enumerate() {
        draw_link(ctx, &attachment_label(i), url, MARGIN_X, attachment_y(i));
    }
}
