use crate::activity::Signer;
use crate::canvas::{PAGE_WIDTH, RenderContext, draw_image};

/// Horizontal row of signature images centred on the page.
///
/// `adjustment` shifts the whole row right by `adjustment / 2`, which keeps
/// the images clear of the label printed at the left of each row. The value
/// differs per row and is kept exactly as the printed form has it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignatureRow {
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
    pub adjustment: f32,
}

/// Business Unit/Head row on page 1.
pub const BUSINESS_UNIT_HEAD_ROW: SignatureRow = SignatureRow {
    y: 700.0,
    width: 100.0,
    height: 40.0,
    spacing: 100.0,
    adjustment: 180.0,
};

/// Marketing Head row on page 3.
pub const MARKETING_HEAD_ROW: SignatureRow = SignatureRow {
    y: 365.0,
    width: 100.0,
    height: 40.0,
    spacing: 100.0,
    adjustment: 120.0,
};

/// Portfolio Manager row on page 3.
pub const PORTFOLIO_MANAGER_ROW: SignatureRow = SignatureRow {
    y: 390.0,
    width: 100.0,
    height: 40.0,
    spacing: 100.0,
    adjustment: 100.0,
};

impl SignatureRow {
    pub fn total_width(&self, count: usize) -> f32 {
        count as f32 * self.spacing
    }

    pub fn start_x(&self, count: usize) -> f32 {
        (PAGE_WIDTH - self.total_width(count) + self.adjustment) / 2.0
    }

    /// Left edge of each of `count` images, left to right.
    pub fn positions(&self, count: usize) -> Vec<f32> {
        let start = self.start_x(count);
        (0..count).map(|i| start + i as f32 * self.spacing).collect()
    }
}

/// Draw one image per signer at its slot. Signers whose image is missing
/// or unreadable leave their slot empty. Returns the number of images placed.
pub fn draw_signature_row(ctx: &mut RenderContext, row: &SignatureRow, signers: &[Signer]) -> usize {
    let mut placed = 0;
    for (x, signer) in row.positions(signers.len()).into_iter().zip(signers) {
        let reference = signer.signature_image_ref.as_deref();
        if draw_image(ctx, reference, x, row.y, row.width, row.height) {
            placed += 1;
        }
    }
    placed
}
