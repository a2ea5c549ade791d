//! Page 4: total cost summary and the approval chain.

use crate::activity::{Activity, SignerRole};
use crate::canvas::{RenderContext, TextStyle, draw_image, draw_rect, draw_text};
use crate::fields::DATE_BLANK;
use crate::model::{Paint, Rgb};
use crate::table::{TableGeometry, TableLayout, render_table};

use super::{MARGIN_X, draw_section_heading};

const BLOCK_FILL: Rgb = [220, 220, 220];
const BLOCK_WIDTH: f32 = 530.0;
const BLOCK_HEIGHT: f32 = 60.0;
const SIGNATURE_LINE: &str = "Signature: _______________________________";
const BLOCK_DATE_BLANK: &str = "Date: ____________________________________";

const TOTAL_COST_TABLE: TableGeometry = TableGeometry {
    x: MARGIN_X,
    y: 190.0,
    col_width: 265.0,
    row_height: 16.0,
    cell_padding: 5.0,
    font_size: 9.0,
    text_color: crate::canvas::TEXT_COLOR,
};

/// (label, record key) of the total cost summary rows.
const TOTAL_COST_ROWS: [(&str, &str); 4] = [
    (
        "Scientific Meeting Expenses (Marketing/Sales)",
        "scientificMeetingExpensesMarketingSales",
    ),
    ("Scientific Meeting Expenses (PR)", "scientificMeetingExpensesPR"),
    ("Guest Expenses", "guestExpenses"),
    ("Total", "total"),
];

/// One bordered approval block. Offsets are absolute page positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApprovalBlock {
    pub label: &'static str,
    /// Signer list backing the block; blocks without one print blanks.
    pub role: Option<SignerRole>,
    pub top: f32,
    pub label_y: f32,
    pub signature_y: f32,
    pub date_y: f32,
    pub image_y: f32,
}

pub const APPROVAL_BLOCKS: [ApprovalBlock; 5] = [
    ApprovalBlock {
        label: "Country Head",
        role: Some(SignerRole::CountryHead),
        top: 390.0,
        label_y: 415.0,
        signature_y: 410.0,
        date_y: 430.0,
        image_y: 385.0,
    },
    ApprovalBlock {
        label: "GCC Director",
        role: Some(SignerRole::GccDirector),
        top: 460.0,
        label_y: 485.0,
        signature_y: 480.0,
        date_y: 500.0,
        image_y: 455.0,
    },
    ApprovalBlock {
        label: "Corporate PR & Communication Director",
        role: None,
        top: 530.0,
        label_y: 555.0,
        signature_y: 540.0,
        date_y: 570.0,
        image_y: 525.0,
    },
    ApprovalBlock {
        label: "Finance Department",
        role: None,
        top: 600.0,
        label_y: 625.0,
        signature_y: 610.0,
        date_y: 640.0,
        image_y: 595.0,
    },
    ApprovalBlock {
        label: "Chief Commercial Officer/General Manager",
        role: None,
        top: 670.0,
        label_y: 695.0,
        signature_y: 680.0,
        date_y: 710.0,
        image_y: 665.0,
    },
];

pub fn total_cost_rows(activity: &Activity) -> Vec<Vec<String>> {
    TOTAL_COST_ROWS
        .iter()
        .map(|(label, key)| {
            vec![
                label.to_string(),
                activity.field_or(&format!("totalCost.{key}"), "0"),
            ]
        })
        .collect()
}

pub(super) fn compose_page(ctx: &mut RenderContext, activity: &Activity) {
    draw_section_heading(ctx, "Total Cost", 160.0, 80.0);
    render_table(
        ctx,
        TableLayout::Uniform,
        &total_cost_rows(activity),
        &TOTAL_COST_TABLE,
    );
    draw_text(
        ctx,
        &format!("Date: {}", activity.date_or("totalCost.date", DATE_BLANK)),
        420.0,
        270.0,
        TextStyle::default(),
    );

    draw_section_heading(ctx, "Approvals", 350.0, 60.0);
    for block in &APPROVAL_BLOCKS {
        draw_approval_block(ctx, activity, block);
    }
}

fn draw_approval_block(ctx: &mut RenderContext, a: &Activity, block: &ApprovalBlock) {
    let text = TextStyle::default();

    draw_rect(
        ctx,
        MARGIN_X,
        block.top,
        BLOCK_WIDTH,
        BLOCK_HEIGHT,
        Paint::Fill(BLOCK_FILL),
    );
    draw_text(ctx, block.label, 50.0, block.label_y, text);
    draw_text(ctx, SIGNATURE_LINE, 290.0, block.signature_y, text);

    let signer = block.role.and_then(|role| a.last_signer(role));
    let date_line = match &signer {
        Some(signer) => {
            draw_image(
                ctx,
                signer.signature_image_ref.as_deref(),
                400.0,
                block.image_y,
                100.0,
                40.0,
            );
            format!(
                "Date: {}",
                signer.formatted_date().as_deref().unwrap_or(DATE_BLANK)
            )
        }
        None => BLOCK_DATE_BLANK.to_string(),
    };
    draw_text(ctx, &date_line, 290.0, block.date_y, text);
}
