//! Page 3: Marketing/Sales and PR expense tables with their sign-off rows.

use crate::activity::{Activity, SignerRole};
use crate::canvas::{RenderContext, TextStyle, draw_text};
use crate::fields::DATE_BLANK;
use crate::signature::{MARKETING_HEAD_ROW, PORTFOLIO_MANAGER_ROW, draw_signature_row};
use crate::table::{TableGeometry, TableLayout, render_table};

use super::{MARGIN_X, draw_section_heading};

pub const EXPENSE_HEADINGS: [&str; 3] = [
    "Category (Please select the related categories)",
    "Average cost (AED)",
    "Allocation",
];

/// (label, record key) for the Marketing/Sales categories.
const MARKETING_SALES_CATEGORIES: [(&str, &str); 8] = [
    ("Registration", "registration"),
    ("Sponsorship fees/ exhibition space", "sponsorshipFeesExhibitionSpace"),
    ("Honorarium", "honorarium"),
    ("Branding", "branding"),
    ("Gifts", "gifts"),
    ("CME fee", "cmeFee"),
    ("Others", "others"),
    ("Total", "total"),
];

/// (label, record key) for the PR categories.
const PR_CATEGORIES: [(&str, &str); 8] = [
    ("Accommodation", "accommodation"),
    ("Dining", "dining"),
    ("Transportation", "transportation"),
    ("Meeting room rent and facilities", "meetingRoomRentAndFacilities"),
    ("Gala Dinner", "galaDinner"),
    ("Entertainment", "entertainment"),
    ("Others", "others"),
    ("Total", "total"),
];

const EXPENSE_TABLE: TableGeometry = TableGeometry {
    x: MARGIN_X,
    y: 190.0,
    col_width: 120.0,
    row_height: 18.0,
    cell_padding: 5.0,
    font_size: 9.0,
    text_color: [60, 60, 60],
};

const PR_TABLE_Y: f32 = 500.0;

/// Heading row plus one row per category: label, average cost, allocation.
fn expense_rows(activity: &Activity, section: &str, categories: &[(&str, &str)]) -> Vec<Vec<String>> {
    let mut rows = vec![EXPENSE_HEADINGS.iter().map(|h| h.to_string()).collect()];
    rows.extend(categories.iter().map(|(label, key)| {
        vec![
            label.to_string(),
            activity.field_or(&format!("{section}.{key}.averageCost"), ""),
            activity.field_or(&format!("{section}.{key}.allocation"), ""),
        ]
    }));
    rows
}

pub fn marketing_sales_rows(activity: &Activity) -> Vec<Vec<String>> {
    expense_rows(activity, "scientificMarketingSales", &MARKETING_SALES_CATEGORIES)
}

pub fn pr_rows(activity: &Activity) -> Vec<Vec<String>> {
    expense_rows(activity, "scientificMeetingExpensesPR", &PR_CATEGORIES)
}

pub(super) fn compose_page(ctx: &mut RenderContext, activity: &Activity) {
    draw_marketing_sales(ctx, activity);
    draw_pr(ctx, activity);
}

fn draw_marketing_sales(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;

    draw_section_heading(ctx, "Scientific Meeting Expenses (Marketing/Sales)", 160.0, 200.0);
    render_table(
        ctx,
        TableLayout::MergedFirstColumn,
        &marketing_sales_rows(a),
        &EXPENSE_TABLE,
    );

    draw_text(
        ctx,
        &format!(
            "Other Details: {}",
            a.field_or(
                "scientificMarketingSales.otherDetails",
                "_________________________________________________________________"
            )
        ),
        x,
        360.0,
        text,
    );

    draw_signature_row(ctx, &MARKETING_HEAD_ROW, &a.signers(SignerRole::MarketingHead));
    draw_text(
        ctx,
        "Marketing Head: ________________________________________________________________________",
        x,
        390.0,
        text,
    );

    draw_signature_row(
        ctx,
        &PORTFOLIO_MANAGER_ROW,
        &a.signers(SignerRole::PortfolioManager),
    );
    draw_text(
        ctx,
        "Portfolio Manager: _______________________________________________________________________",
        x,
        415.0,
        text,
    );
}

fn draw_pr(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;
    let pr = "scientificMeetingExpensesPR";

    draw_section_heading(ctx, "Scientific Meeting Expenses (PR)", 440.0, 120.0);
    draw_text(
        ctx,
        "Actual expenses should not exceed the pre-planning approved expenses",
        x,
        470.0,
        text,
    );

    let geom = TableGeometry {
        y: PR_TABLE_Y,
        ..EXPENSE_TABLE
    };
    render_table(ctx, TableLayout::MergedFirstColumn, &pr_rows(a), &geom);

    draw_text(
        ctx,
        &format!(
            "City: {}",
            a.field_or(&format!("{pr}.city"), "__________________________")
        ),
        x,
        670.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Hotel name: {}",
            a.field_or(&format!("{pr}.hotelName"), "__________________________")
        ),
        300.0,
        670.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Average cost (all inclusive): Single: {} Double: {}",
            a.field_or(&format!("{pr}.averageCost.single"), "________________"),
            a.field_or(&format!("{pr}.averageCost.double"), "________________")
        ),
        x,
        690.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Speaker(s) cost (tickets/accommodation): {}",
            a.field_or(
                &format!("{pr}.speakersCost"),
                "___________________________________________________"
            )
        ),
        x,
        715.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Corporate PR & Communication Director Signature : {}",
            a.field_or(
                &format!("{pr}.corporatePRCommunicationDirector.signature"),
                "____________________"
            )
        ),
        x,
        740.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Date: {}",
            a.date_or(
                &format!("{pr}.corporatePRCommunicationDirector.date"),
                DATE_BLANK
            )
        ),
        420.0,
        740.0,
        text,
    );
}
