use crate::constants::{CARD_LIFT_PX, CARD_PERSPECTIVE_PX, CARD_TILT_MAX_DEG};

/// Client-space bounding box of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position inside the card, centred: each axis in [-0.5, 0.5]
/// while the pointer is over the card. A zero-sized card yields (0, 0).
pub fn card_offset(client_x: f64, client_y: f64, rect: &CardRect) -> (f64, f64) {
    let x = if rect.width > 0.0 {
        (client_x - rect.left) / rect.width - 0.5
    } else {
        0.0
    };
    let y = if rect.height > 0.0 {
        (client_y - rect.top) / rect.height - 0.5
    } else {
        0.0
    };
    (x, y)
}

pub fn card_tilt_transform(client_x: f64, client_y: f64, rect: &CardRect) -> String {
    let (x, y) = card_offset(client_x, client_y, rect);
    let rotate_x = 0.0 - y * CARD_TILT_MAX_DEG;
    let rotate_y = x * CARD_TILT_MAX_DEG;
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{}px)",
        CARD_PERSPECTIVE_PX, rotate_x, rotate_y, CARD_LIFT_PX
    )
}
