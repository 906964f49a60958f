//! Popup placement math.
//!
//! Pure computation of where the popup goes relative to the pointer:
//! a small offset below and to the right, flipping to the other side
//! of the pointer on an axis when the popup would overflow the
//! viewport there. The embedding layer applies the numbers; no layout
//! happens here.

/// Pointer offset applied on each axis, in pixels.
const POINTER_OFFSET: f64 = 5.0;
/// Extra margin used in the overflow test, in pixels.
const OVERFLOW_MARGIN: f64 = 10.0;

/// A computed popup position.
///
/// `left`/`top` are viewport pixels; the translate fields are
/// percentages of the popup's own size (0 or -100), so a flipped axis
/// anchors the popup's far edge at the offset point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPlacement {
    pub left: f64,
    pub top: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Place a popup of `popup_w` x `popup_h` near pointer `(x, y)` inside
/// a `viewport_w` x `viewport_h` viewport.
pub fn place(
    x: f64,
    y: f64,
    popup_w: f64,
    popup_h: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> PopupPlacement {
    let (mut dx, mut translate_x) = (POINTER_OFFSET, 0.0);
    if x + OVERFLOW_MARGIN + popup_w > viewport_w {
        dx = -POINTER_OFFSET;
        translate_x = -100.0;
    }

    let (mut dy, mut translate_y) = (POINTER_OFFSET, 0.0);
    if y + OVERFLOW_MARGIN + popup_h > viewport_h {
        dy = -POINTER_OFFSET;
        translate_y = -100.0;
    }

    PopupPlacement {
        left: x + dx,
        top: y + dy,
        translate_x,
        translate_y,
    }
}
