//! Page 2: meeting logistics and social activities.

use crate::activity::Activity;
use crate::canvas::{RenderContext, TextStyle, draw_checkbox, draw_image, draw_text};
use crate::fields::DATE_BLANK;

use super::{INITIATOR_SIGN, MARGIN_X, draw_section_heading};

/// Left label with a Yes/No checkbox pair driven by a string field.
fn yes_no_row(ctx: &mut RenderContext, a: &Activity, label: &str, path: &str, y: f32, xs: (f32, f32)) {
    draw_text(ctx, label, MARGIN_X, y, TextStyle::default());
    draw_checkbox(ctx, xs.0, y, "Yes", a.field_is(path, "yes"));
    draw_checkbox(ctx, xs.1, y, "No", a.field_is(path, "no"));
}

/// Left label with a row of independent checkboxes.
fn option_row(ctx: &mut RenderContext, a: &Activity, label: &str, y: f32, options: &[(f32, &str, &str)]) {
    draw_text(ctx, label, MARGIN_X, y, TextStyle::default());
    for &(x, text, path) in options {
        draw_checkbox(ctx, x, y, text, a.flag(path));
    }
}

pub(super) fn compose_page(ctx: &mut RenderContext, activity: &Activity) {
    draw_meeting_details(ctx, activity);
    draw_social_activities(ctx, activity);
}

fn draw_meeting_details(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;
    const YES_NO: (f32, f32) = (130.0, 250.0);

    draw_section_heading(ctx, "Meeting Details", 160.0, 50.0);

    draw_text(
        ctx,
        &format!("Date: {}", a.date_or("meetingDetails.date", DATE_BLANK)),
        x,
        190.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Number of days: {}",
            a.field_or("meetingDetails.noOfDays", "________________")
        ),
        x,
        215.0,
        text,
    );

    option_row(
        ctx,
        a,
        "Meeting setup",
        240.0,
        &[
            (130.0, "Classroom", "meetingDetails.meetingSetup.classroom"),
            (250.0, "Cabaret (half moon)", "meetingDetails.meetingSetup.cabaret"),
            (430.0, "U-shape", "meetingDetails.meetingSetup.uShape"),
        ],
    );
    option_row(
        ctx,
        a,
        "Meeting time",
        265.0,
        &[
            (130.0, "Morning", "meetingDetails.meetingTime.morning"),
            (250.0, "Afternoon", "meetingDetails.meetingTime.afternoon"),
            (430.0, "Evening", "meetingDetails.meetingTime.evening"),
        ],
    );
    option_row(
        ctx,
        a,
        "Projector",
        290.0,
        &[
            (130.0, "1", "meetingDetails.projector.one"),
            (250.0, "2", "meetingDetails.projector.two"),
        ],
    );

    draw_text(
        ctx,
        &format!(
            "Signage Logo: {}",
            a.field_or(
                "meetingDetails.signageLogo",
                "________________________________________"
            )
        ),
        x,
        315.0,
        text,
    );

    yes_no_row(ctx, a, "Podium", "meetingDetails.podium", 340.0, YES_NO);
    yes_no_row(ctx, a, "Headtable", "meetingDetails.headTable", 365.0, YES_NO);

    option_row(
        ctx,
        a,
        "Microphones",
        390.0,
        &[
            (130.0, "Clip-on Mic", "meetingDetails.microphones.clipOn"),
            (280.0, "Podium Mic", "meetingDetails.microphones.micPodium"),
            (430.0, "Hand-held Mic", "meetingDetails.microphones.micHandheld"),
        ],
    );

    yes_no_row(ctx, a, "Heavy branding", "meetingDetails.heavyBranding", 415.0, YES_NO);
    yes_no_row(ctx, a, "Photographer", "meetingDetails.photographer", 440.0, YES_NO);
    yes_no_row(ctx, a, "Videographer", "meetingDetails.videographer", 465.0, YES_NO);
    yes_no_row(ctx, a, "Sound system", "meetingDetails.soundSystem", 490.0, YES_NO);

    yes_no_row(
        ctx,
        a,
        "Coffee break",
        "meetingDetails.coffeeBreak.selected",
        515.0,
        YES_NO,
    );
    draw_checkbox(ctx, 310.0, 515.0, "1", a.flag("meetingDetails.coffeeBreak.one"));
    draw_checkbox(ctx, 370.0, 515.0, "2", a.flag("meetingDetails.coffeeBreak.two"));
}

fn draw_social_activities(ctx: &mut RenderContext, a: &Activity) {
    let text = TextStyle::default();
    let x = MARGIN_X;
    const COLUMNS: (f32, f32) = (200.0, 360.0);

    draw_section_heading(ctx, "Social Activities", 540.0, 50.0);

    yes_no_row(ctx, a, "Lunch", "socialActivities.lunch", 570.0, COLUMNS);
    yes_no_row(ctx, a, "Dinner", "socialActivities.dinner", 595.0, COLUMNS);

    for (label, group, y) in [
        ("Numbers of rooms for invitees", "noOfRoomsForInvitees", 620.0),
        ("Numbers of rooms for staff", "noOfRoomsForStaff", 645.0),
    ] {
        let base = format!("socialActivities.{group}");
        draw_text(ctx, label, x, y, text);
        draw_checkbox(
            ctx,
            COLUMNS.0,
            y,
            &format!(
                "Single: {}",
                a.field_or(&format!("{base}.single.singleNumber"), "____________")
            ),
            a.flag(&format!("{base}.single.selected")),
        );
        draw_checkbox(
            ctx,
            COLUMNS.1,
            y,
            &format!(
                "Double: {}",
                a.field_or(&format!("{base}.double.doubleNumber"), "____________")
            ),
            a.flag(&format!("{base}.double.selected")),
        );
    }

    draw_text(ctx, "Booking dates", x, 670.0, text);
    draw_text(
        ctx,
        &format!(
            "Check in: {}",
            a.date_or("socialActivities.bookingDates.checkIn", "______/_____/_____")
        ),
        COLUMNS.0,
        670.0,
        text,
    );
    draw_text(
        ctx,
        &format!(
            "Check out: {}",
            a.date_or("socialActivities.bookingDates.checkOut", DATE_BLANK)
        ),
        COLUMNS.1,
        670.0,
        text,
    );

    draw_text(
        ctx,
        &format!(
            "Other requirements: {}",
            a.field_or(
                "socialActivities.otherRequirements",
                "_____________________________________________________________"
            )
        ),
        x,
        695.0,
        text,
    );

    draw_text(
        ctx,
        "Initiator Signature: ___________________________________ ",
        x,
        745.0,
        text,
    );
    let initiator = a.field_or(INITIATOR_SIGN, "");
    draw_image(ctx, Some(initiator.as_str()), 150.0, 720.0, 100.0, 40.0);
    draw_text(
        ctx,
        &format!(
            "Date: {}",
            a.date_or("socialActivities.initiatorDate", DATE_BLANK)
        ),
        420.0,
        745.0,
        text,
    );
}
