use crate::constants::{
    BG_TEXT_PARALLAX, GLOW_SCROLL_PARALLAX, NAV_SCROLLED_THRESHOLD_PX, NAV_SECTION_PROBE_OFFSET_PX,
    RING_CIRCUMFERENCE,
};

#[inline]
pub fn is_nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

pub fn bg_text_transform(scroll_y: f64) -> String {
    format!("translate(-50%, calc(-50% + {:.2}px))", scroll_y * BG_TEXT_PARALLAX)
}

pub fn glow_scroll_transform(scroll_y: f64) -> String {
    format!("translate(-50%, calc(-50% + {:.2}px))", scroll_y * GLOW_SCROLL_PARALLAX)
}

/// Vertical extent of a page section with an id.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section whose `[top, top + height)` contains the probe line.
/// Later sections win when ranges overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + NAV_SECTION_PROBE_OFFSET_PX;
    sections
        .iter()
        .filter(|s| probe >= s.top && probe < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// Leading integer of an attribute, e.g. `"75"` or `" 40%"`.
pub fn parse_percent(attr: &str) -> Option<i32> {
    let s = attr.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|v| sign * v)
}

/// `stroke-dashoffset` that leaves `percent` of the ring stroked.
#[inline]
pub fn ring_dash_offset(percent: i32) -> f64 {
    RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * f64::from(percent) / 100.0
}
