use crate::constants::{CARD_HIDE_DELAY_MS, CARD_SHOW_DELAY_MS};
use crate::core::cards::{self, ProjectFilter};
use crate::dom;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn show_card(card: &web::HtmlElement) {
    dom::set_style(card, "display", "block");
    let c = card.clone();
    dom::set_timeout(CARD_SHOW_DELAY_MS, move || {
        dom::set_style(&c, "opacity", "1");
        dom::set_style(&c, "transform", "translateY(0)");
    });
}

fn hide_card(card: &web::HtmlElement) {
    dom::set_style(card, "opacity", "0");
    dom::set_style(card, "transform", "translateY(20px)");
    let c = card.clone();
    dom::set_timeout(CARD_HIDE_DELAY_MS, move || {
        dom::set_style(&c, "display", "none");
    });
}

/// Category buttons over the project grid.
pub fn wire_project_filter(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, ".filter-btn"));
    let project_cards = Rc::new(dom::query_all(document, ".project-card"));

    for button in buttons.iter() {
        let (all, cards_ref, clicked) = (buttons.clone(), project_cards.clone(), button.clone());
        dom::add_listener(button, "click", move |_: web::MouseEvent| {
            for b in all.iter() {
                _ = b.class_list().remove_1("active");
                _ = b.set_attribute("aria-selected", "false");
            }
            _ = clicked.class_list().add_1("active");
            _ = clicked.set_attribute("aria-selected", "true");

            let filter = ProjectFilter::parse(clicked.get_attribute("data-filter").as_deref());
            for card in cards_ref.iter() {
                let category = card.get_attribute("data-category");
                if filter.matches(category.as_deref()) {
                    show_card(card);
                } else {
                    hide_card(card);
                }
            }
        });
    }
}

/// Pointer-following 3D tilt on project cards.
pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, ".project-card") {
        let c = card.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            let rect = c.get_bounding_client_rect();
            let pointer = Vec2::new(
                ev.client_x() as f32 - rect.left() as f32,
                ev.client_y() as f32 - rect.top() as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            dom::set_style(&c, "transform", &cards::tilt_transform(pointer, size));
        });

        let c = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&c, "transform", cards::TILT_RESET);
        });
    }
}

/// Click or Enter/Space toggles the hidden details of a card. Clicks on
/// links inside the card are left alone.
pub fn wire_card_reveal(document: &web::Document) {
    for el in dom::query_all(document, ".skill-card, .detail-item, .project-card") {
        let target = el.clone();
        dom::add_listener(&el, "click", move |ev: web::MouseEvent| {
            let on_link = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|t| t.closest("a").ok().flatten())
                .is_some();
            if on_link {
                return;
            }
            let revealed = target
                .class_list()
                .toggle("revealed")
                .unwrap_or(false);
            _ = target.set_attribute("aria-expanded", if revealed { "true" } else { "false" });
        });

        let target = el.clone();
        dom::add_listener(&el, "keydown", move |ev: web::KeyboardEvent| {
            if cards::is_reveal_key(&ev.key()) {
                ev.prevent_default();
                target.click();
            }
        });
    }
}

/// Open a project's demo link when its preview image is clicked.
pub fn wire_project_images(document: &web::Document) {
    for image in dom::query_all(document, ".project-image") {
        dom::set_style(&image, "cursor", "pointer");
        let img = image.clone();
        dom::add_listener(&image, "click", move |ev: web::MouseEvent| {
            let on_action = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|t| t.closest(".project-link").ok().flatten())
                .is_some();
            if on_action {
                return;
            }
            let demo = img
                .query_selector(".project-link[aria-label*=\"demo\"]")
                .ok()
                .flatten()
                .and_then(|a| a.get_attribute("href"));
            if let (Some(href), Some(w)) = (demo, web::window()) {
                _ = w.open_with_url_and_target(&href, "_blank");
            }
        });
    }
}

/// Fill `#currentYear` with the current calendar year.
pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("currentYear") {
        el.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }
}
