use crate::core::nav::{self, ScrollTracker};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn set_menu_open(hamburger: &web::HtmlElement, wrapper: &web::HtmlElement, open: bool) {
    for el in [hamburger, wrapper] {
        _ = el.class_list().toggle_with_force("active", open);
    }
    _ = hamburger.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

/// Hamburger menu toggle; any nav link closes the menu again.
pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(hamburger), Some(wrapper)) = (
        dom::query(document, ".hamburger"),
        dom::query(document, ".nav-wrapper"),
    ) else {
        return;
    };

    let (h, w) = (hamburger.clone(), wrapper.clone());
    dom::add_listener(&hamburger, "click", move |_: web::MouseEvent| {
        let expanded = h.get_attribute("aria-expanded").as_deref() == Some("true");
        set_menu_open(&h, &w, !expanded);
    });

    for link in dom::query_all(document, ".nav-btn") {
        let (h, w) = (hamburger.clone(), wrapper.clone());
        dom::add_listener(&link, "click", move |_: web::MouseEvent| {
            set_menu_open(&h, &w, false);
        });
    }
}

/// In-page anchors scroll smoothly, stopping below the fixed navbar.
pub fn wire_anchor_scrolling(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            let Some(id) = nav::href_fragment(&href) else {
                return;
            };
            if let Some(target) = dom::by_id::<web::HtmlElement>(&doc, id) {
                dom::smooth_scroll_to(nav::anchor_scroll_top(target.offset_top() as f64));
            }
        });
    }
}

/// Navbar hide-on-scroll, scroll-to-top button and active link highlighting.
pub fn wire_scroll_effects(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navbar = dom::query(document, ".navbar");
    let scroll_top_btn = dom::by_id::<web::HtmlElement>(document, "scrollTopBtn");
    let sections = dom::query_all(document, "section");
    let nav_buttons = dom::query_all(document, ".nav-btn");
    let tracker = Rc::new(RefCell::new(ScrollTracker::default()));

    if let Some(btn) = &scroll_top_btn {
        dom::add_listener(btn, "click", |_: web::MouseEvent| dom::smooth_scroll_to(0.0));
    }

    dom::add_listener(&window, "scroll", move |_: web::Event| {
        let scroll_y = dom::scroll_y();

        let hidden = tracker.borrow_mut().on_scroll(scroll_y);
        if let Some(bar) = &navbar {
            let transform = if hidden { "translateY(-100%)" } else { "translateY(0)" };
            dom::set_style(bar, "transform", transform);
        }

        if let Some(btn) = &scroll_top_btn {
            _ = btn
                .class_list()
                .toggle_with_force("show", nav::scroll_top_visible(scroll_y));
        }

        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
        let current = nav::active_section(&tops, scroll_y).filter(|id| !id.is_empty());
        for link in &nav_buttons {
            let href = link.get_attribute("href").unwrap_or_default();
            let is_active = current.is_some() && nav::href_fragment(&href) == current;
            _ = link.class_list().toggle_with_force("active", is_active);
        }
    });
}
