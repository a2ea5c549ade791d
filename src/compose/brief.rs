//! Page 1: Brief, Objectives & ROI, initiator and business-unit-head rows.

use crate::activity::{Activity, SignerRole};
use crate::canvas::{RenderContext, TextStyle, draw_checkbox, draw_image, draw_text};
use crate::fields::DATE_BLANK;
use crate::signature::{BUSINESS_UNIT_HEAD_ROW, draw_signature_row};
use crate::table::{TableGeometry, TableLayout, fill_empty, render_table};

use super::{INITIATOR_SIGN, MARGIN_X, draw_section_heading};

const SHORT_DATE_BLANK: &str = "____/____/____";
const VENUE_BLANK: &str = "_____________________";
const VENUE_SLOTS: usize = 3;

/// Blank rows printed when no quantitative line items are supplied.
pub const QUANTITATIVE_BLANK_ROWS: usize = 4;

pub const QUANTITATIVE_HEADINGS: [&str; 6] = [
    "Product",
    "Countries",
    "Previous Year Sales AED",
    "Current year Target AED",
    "Growth%",
    "Expense%",
];

const QUANTITATIVE_TABLE: TableGeometry = TableGeometry {
    x: MARGIN_X,
    y: 545.0,
    col_width: 90.0,
    row_height: 16.0,
    cell_padding: 5.0,
    font_size: 9.0,
    text_color: crate::canvas::TEXT_COLOR,
};

/// The "Proposed Venue(s)" line. Filled venues are followed by a run of
/// spaces so the numbering stays spread across the line.
pub fn venue_line(activity: &Activity) -> String {
    let slots: Vec<String> = (0..VENUE_SLOTS)
        .map(|i| {
            let path = format!("brief.proposedVenues[{i}]");
            match activity.field_or(&path, "") {
                v if v.is_empty() => VENUE_BLANK.to_string(),
                v => format!("{v}          "),
            }
        })
        .collect();
    format!(
        "Proposed Venue(s): 1. {} 2. {} 3. {}",
        slots[0], slots[1], slots[2]
    )
}

/// Heading row followed by one row per line item, or blank rows when there
/// are none.
pub fn quantitative_rows(activity: &Activity) -> Vec<Vec<String>> {
    let data: Vec<Vec<String>> = activity
        .quantitative_items()
        .iter()
        .map(|item| item.cells().to_vec())
        .collect();
    let data = fill_empty(data, QUANTITATIVE_BLANK_ROWS, QUANTITATIVE_HEADINGS.len());

    let mut rows = Vec::with_capacity(data.len() + 1);
    rows.push(QUANTITATIVE_HEADINGS.iter().map(|h| h.to_string()).collect());
    rows.extend(data);
    rows
}

pub(super) fn compose_page(ctx: &mut RenderContext, activity: &Activity) {
    draw_brief(ctx, activity);
    draw_objectives(ctx, activity);
    draw_sign_off(ctx, activity);
}

fn draw_brief(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;

    draw_section_heading(ctx, "Brief", 160.0, 30.0);

    draw_text(
        ctx,
        &format!("From : {}", a.date_or("brief.from", SHORT_DATE_BLANK)),
        x,
        190.0,
        text,
    );
    draw_text(
        ctx,
        &format!("To: {}", a.date_or("brief.to", SHORT_DATE_BLANK)),
        180.0,
        190.0,
        text,
    );

    draw_text(
        ctx,
        &format!(
            "Brand/Franchise: {}",
            a.field_or("brief.brandOrFranchise", "_____________________________")
        ),
        x,
        210.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Specialities: {}",
            a.field_or("brief.specialties", "_____________________________")
        ),
        300.0,
        210.0,
        text,
    );

    draw_text(
        ctx,
        &format!(
            "Market(s): {} ",
            a.field_or("brief.market", "_____________________________")
        ),
        x,
        230.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Total Numbers: Doctors: {}  Staff: {}",
            a.field_or("brief.NoOfDoctorsAndStaff.doctors", "_________"),
            a.field_or("brief.NoOfDoctorsAndStaff.staff", "_________")
        ),
        260.0,
        230.0,
        text,
    );

    draw_text(ctx, "Budget:*", x, 250.0, text);
    draw_checkbox(
        ctx,
        80.0,
        250.0,
        &format!(
            "Marketing: {}%",
            a.field_or("brief.budget.marketing.amount", "_______")
        ),
        a.flag("brief.budget.marketing.selected"),
    );
    draw_checkbox(
        ctx,
        250.0,
        250.0,
        &format!("Sales: {}%", a.field_or("brief.budget.sales.amount", "_________")),
        a.flag("brief.budget.sales.selected"),
    );

    draw_text(ctx, &venue_line(a), x, 270.0, text);
    draw_text(
        ctx,
        &format!(
            "Rational of venue proposed: {}",
            a.field_or(
                "brief.rationalOfVenueProposed",
                "_______________________________________________________________"
            )
        ),
        x,
        290.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Average/Delegate: {} AED: {}",
            a.field_or("brief.averageDelegate", "______________"),
            a.field_or("brief.aed", "______________")
        ),
        130.0,
        310.0,
        text.size(10.0),
    );

    draw_text(ctx, "Type", x, 330.0, text.bold().size(14.0));
    let types = [
        (30.0, "Standalone", "standalone"),
        (120.0, "Workshop", "workshop"),
        (200.0, "Symposium", "symposium"),
        (290.0, "Plant visit", "plantVisit"),
        (370.0, "Cycle meeting", "cycleMeeting"),
        (490.0, "Training", "training"),
    ];
    for (cx, label, key) in types {
        draw_checkbox(ctx, cx, 350.0, label, a.flag(&format!("brief.type.{key}")));
    }
    draw_checkbox(
        ctx,
        30.0,
        370.0,
        "3rd party conference",
        a.flag("brief.type.thirdPartyConference"),
    );
    draw_checkbox(
        ctx,
        200.0,
        370.0,
        &format!(
            "Other (pelase specify) {}",
            a.field_or("brief.type.other.customType", "_______________________________")
        ),
        a.flag("brief.type.other.selected"),
    );
    draw_text(
        ctx,
        "* Tickets are to be allocated to the local market.",
        x,
        390.0,
        text.size(10.0),
    );
}

fn draw_objectives(ctx: &mut RenderContext, a: &Activity) {
    let heading = TextStyle::default().bold().size(14.0);
    let x = MARGIN_X;

    draw_section_heading(ctx, "Objectives & ROI", 410.0, 60.0);

    draw_text(ctx, "A) Qualitative:", x, 435.0, heading);
    let q = "objectivesAndROI.qualitative";
    draw_checkbox(
        ctx,
        30.0,
        460.0,
        "New product launch",
        a.flag(&format!("{q}.newProductLaunch")),
    );
    draw_checkbox(
        ctx,
        250.0,
        460.0,
        "New concept launch",
        a.flag(&format!("{q}.newConceptLaunch")),
    );
    draw_checkbox(
        ctx,
        30.0,
        480.0,
        "Increase market share",
        a.flag(&format!("{q}.increaseMarketShare")),
    );
    draw_checkbox(
        ctx,
        250.0,
        480.0,
        "Establish KOL\u{2019}s long term partnership",
        a.flag(&format!("{q}.establishKOLPartnership")),
    );
    draw_checkbox(
        ctx,
        30.0,
        500.0,
        &format!(
            "Others (specify): {}",
            a.field_or(
                &format!("{q}.othersSpecify.other"),
                "_________________________________________________"
            )
        ),
        a.flag(&format!("{q}.othersSpecify.selected")),
    );

    draw_text(ctx, "B) Quantitative:", x, 525.0, heading);
    let rows = quantitative_rows(a);
    render_table(ctx, TableLayout::DoubleHeightHeader, &rows, &QUANTITATIVE_TABLE);
}

fn draw_sign_off(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;

    draw_text(
        ctx,
        "Initiator Signature: ___________________________________ ",
        x,
        660.0,
        text,
    );
    let initiator = a.field_or(INITIATOR_SIGN, "");
    draw_image(ctx, Some(initiator.as_str()), 180.0, 638.0, 100.0, 40.0);
    draw_text(
        ctx,
        &format!(
            "Date: {}",
            a.date_or("objectivesAndROI.initiatorDate", DATE_BLANK)
        ),
        420.0,
        660.0,
        text,
    );

    draw_text(
        ctx,
        &format!(
            "Allocated Approved Budget: {}",
            a.field_or(
                "objectivesAndROI.allocatedApprovedBudget",
                "____________________________"
            )
        ),
        x,
        680.0,
        text,
    );

    let buh = a.signers(SignerRole::BusinessUnitHead);
    draw_signature_row(ctx, &BUSINESS_UNIT_HEAD_ROW, &buh);
    draw_text(
        ctx,
        "Business Unit/Head Signature: ______________________________________________________________",
        x,
        730.0,
        text,
    );
}
