//! The five fixed pages of the approval form.

mod approvals;
mod beneficiary;
mod brief;
mod expenses;
mod meeting;

use crate::activity::Activity;
use crate::canvas::{PAGE_WIDTH, RenderContext, TextStyle, WHITE, draw_rect, draw_text};
use crate::images::ImageSource;
use crate::model::{Document, Paint, Rgb};

pub use approvals::{APPROVAL_BLOCKS, ApprovalBlock, total_cost_rows};
pub use beneficiary::{attachment_label, attachment_y};
pub use brief::{QUANTITATIVE_BLANK_ROWS, QUANTITATIVE_HEADINGS, quantitative_rows, venue_line};
pub use expenses::{EXPENSE_HEADINGS, marketing_sales_rows, pr_rows};

pub const DOCUMENT_TITLE: &str = "Scientific Meeting Approval Form (Local)";
pub const PAGE_COUNT: usize = 5;

pub(crate) const MARGIN_X: f32 = 30.0;
pub(crate) const INITIATOR_SIGN: &str = "initiatorSign";

const HEADER_COLOR: Rgb = [0, 170, 213];
const SECTION_COLOR: Rgb = [31, 72, 108];
const HEADER_HEIGHT: f32 = 100.0;
const SECTION_BAR_HEIGHT: f32 = 20.0;

type PageRoutine = fn(&mut RenderContext<'_>, &Activity);

const PAGES: [(&str, PageRoutine); PAGE_COUNT] = [
    ("brief", brief::compose_page),
    ("meeting", meeting::compose_page),
    ("expenses", expenses::compose_page),
    ("approvals", approvals::compose_page),
    ("beneficiary", beneficiary::compose_page),
];

/// Compose all five pages, in order, into a fresh display list.
pub fn compose(activity: &Activity, images: &dyn ImageSource) -> Document {
    let mut ctx = RenderContext::new(images);
    for (name, routine) in PAGES {
        ctx.begin_page();
        draw_page_header(&mut ctx, activity);
        routine(&mut ctx, activity);
        log::debug!(
            "PAGE {} ({}) ops={}",
            ctx.page_count(),
            name,
            ctx.current_page().map_or(0, |p| p.ops.len())
        );
    }
    ctx.finish(DOCUMENT_TITLE)
}

/// Banner, form boilerplate, tracking identifier, meeting and initiator.
pub(crate) fn draw_page_header(ctx: &mut RenderContext, activity: &Activity) {
    let on_banner = TextStyle::default().color(WHITE);
    let text = TextStyle::default();

    draw_rect(ctx, 0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT, Paint::Fill(HEADER_COLOR));
    draw_text(ctx, "SOPs No. MK-PR-EN-022", 30.0, 15.0, on_banner);
    draw_text(ctx, "SAP Code:____________", 30.0, 35.0, on_banner);
    draw_text(ctx, DOCUMENT_TITLE, 30.0, 65.0, on_banner.size(24.0));
    draw_text(
        ctx,
        "Corporate Public Relations Execution Form",
        340.0,
        15.0,
        on_banner.bold(),
    );
    draw_text(ctx, "Julphar", 450.0, 35.0, on_banner.bold().size(28.0));

    draw_text(
        ctx,
        &format!("Tracking ID: {}", activity.tracking_id()),
        450.0,
        120.0,
        text,
    );
    draw_text(
        ctx,
        &format!("Meeting Name: {}", activity.field_or("meetingName", "")),
        30.0,
        115.0,
        text,
    );
    draw_text(
        ctx,
        &format!("Initiator Name: {}", activity.field_or("initiatorName", "")),
        30.0,
        135.0,
        text,
    );
}

/// Full-width coloured bar with a white bold title. `title_offset` is the
/// distance the title starts left of the page centre.
pub(crate) fn draw_section_heading(ctx: &mut RenderContext, title: &str, y: f32, title_offset: f32) {
    draw_rect(
        ctx,
        MARGIN_X,
        y,
        PAGE_WIDTH - 2.0 * MARGIN_X,
        SECTION_BAR_HEIGHT,
        Paint::Fill(SECTION_COLOR),
    );
    draw_text(
        ctx,
        title,
        PAGE_WIDTH / 2.0 - title_offset,
        y + 3.0,
        TextStyle::default().color(WHITE).bold().size(16.0),
    );
}
