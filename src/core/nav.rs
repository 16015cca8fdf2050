use crate::constants::{
    ACTIVE_SECTION_LEAD_PX, NAVBAR_HIDE_AFTER_PX, NAVBAR_OFFSET_PX, SCROLL_TOP_SHOW_AFTER_PX,
};

/// Remembers the previous scroll position to tell scroll direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_scroll_top: f64,
}

impl ScrollTracker {
    /// Record a scroll position and return whether the navbar should hide.
    ///
    /// The bar hides while scrolling down past `NAVBAR_HIDE_AFTER_PX` and
    /// reappears on any upward scroll.
    pub fn on_scroll(&mut self, scroll_top: f64) -> bool {
        let hidden = scroll_top > self.last_scroll_top && scroll_top > NAVBAR_HIDE_AFTER_PX;
        self.last_scroll_top = scroll_top.max(0.0);
        hidden
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_SHOW_AFTER_PX
}

/// Id of the last section whose top (less a small lead) has been scrolled past.
pub fn active_section<'a>(sections: &'a [(String, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| scroll_y >= top - ACTIVE_SECTION_LEAD_PX)
        .map(|(id, _)| id.as_str())
}

/// Fragment id of an in-page link (`#about` -> `about`).
#[inline]
pub fn href_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll destination for an anchor target, leaving room for the fixed navbar.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    target_offset_top - NAVBAR_OFFSET_PX
}
