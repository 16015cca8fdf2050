use crate::canvas::CanvasSurface;
use crate::constants::{THEME_CLEAR_DELAY_MS, THEME_STORAGE_KEY};
use crate::core::{Renderer, Theme};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Theme currently applied to the page.
#[inline]
pub fn current_theme(document: &web::Document) -> Theme {
    Theme::from_attr(theme_attr(document).as_deref())
}

fn theme_attr(document: &web::Document) -> Option<String> {
    document
        .document_element()
        .and_then(|el| el.get_attribute("data-theme"))
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    let stored = web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|s| s.set_item(THEME_STORAGE_KEY, theme.as_str()));
    match stored {
        Some(Ok(())) => {}
        Some(Err(e)) => log::warn!("[theme] could not store preference: {:?}", e),
        None => log::warn!("[theme] localStorage unavailable"),
    }
}

/// Flip the theme on `#themeToggle` clicks and clear the dot canvases once
/// the new colours have settled.
pub fn wire_theme_toggle(
    document: &web::Document,
    renderer: Option<Rc<RefCell<Renderer<CanvasSurface>>>>,
) {
    let doc = document.clone();
    dom::add_click_listener(document, "themeToggle", move || {
        let next = Theme::next_from_attr(theme_attr(&doc).as_deref());
        apply_theme(&doc, next);
        log::info!("[theme] switched to {}", next.as_str());

        if let Some(renderer) = renderer.clone() {
            dom::set_timeout(THEME_CLEAR_DELAY_MS, move || {
                renderer.borrow_mut().clear_all();
            });
        }
    });
}
