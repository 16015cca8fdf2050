use crate::constants::{CARD_LIFT_PX, CARD_TILT_DIVISOR};
use glam::Vec2;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Category selection of the project grid, from a button's `data-filter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
    /// A button without `data-filter`: matches cards without a category.
    Uncategorized,
}

impl ProjectFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("all") => ProjectFilter::All,
            Some(c) => ProjectFilter::Category(c.to_string()),
            None => ProjectFilter::Uncategorized,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => category == Some(c.as_str()),
            ProjectFilter::Uncategorized => category.is_none(),
        }
    }
}

/// Rotation in degrees (x, y) for a pointer at `pointer` inside a card of `size`.
#[inline]
pub fn tilt_degrees(pointer: Vec2, size: Vec2) -> Vec2 {
    let center = size * 0.5;
    Vec2::new(
        (pointer.y - center.y) / CARD_TILT_DIVISOR,
        (center.x - pointer.x) / CARD_TILT_DIVISOR,
    )
}

pub fn tilt_transform(pointer: Vec2, size: Vec2) -> String {
    let r = tilt_degrees(pointer, size);
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY({}px)",
        r.x, r.y, CARD_LIFT_PX
    )
}

/// Keys that toggle a revealable card from the keyboard.
#[inline]
pub fn is_reveal_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
