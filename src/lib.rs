#![cfg(target_arch = "wasm32")]
use crate::canvas::{CanvasSurface, SectionElements};
use crate::core::{FieldParams, Renderer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;

type SharedRenderer = Rc<RefCell<Renderer<CanvasSurface>>>;

fn wire_canvas_resize(renderer: SharedRenderer, sections: SectionElements) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_: web::Event| {
        renderer
            .borrow_mut()
            .resize(|section| sections.measure(section));
    });
}

/// Bind section canvases, build the dot field and start the animation loop.
/// Returns `None` when the page has no dot canvases at all.
fn start_dot_field(document: &web::Document) -> Option<SharedRenderer> {
    let (bindings, sections) = canvas::bind_sections(document);
    if bindings.is_empty() {
        log::info!("[dots] no section canvases on this page");
        return None;
    }

    let theme_doc = document.clone();
    let renderer = Rc::new(RefCell::new(Renderer::new(
        FieldParams::default(),
        bindings,
        Box::new(move || events::theme::current_theme(&theme_doc)),
    )));

    wire_canvas_resize(renderer.clone(), sections);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        renderer: renderer.clone(),
        last_instant: Instant::now(),
    }));
    let handle = frame::start_loop(frame_ctx);
    if let Some(window) = web::window() {
        dom::add_listener(&window, "pagehide", move |_: web::Event| handle.cancel());
    }
    Some(renderer)
}

/// Pages always open at the top, also after a reload.
fn reset_scroll(window: &web::Window) {
    if let Ok(history) = window.history() {
        _ = history.set_scroll_restoration(web::ScrollRestoration::Manual);
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let w = window.clone();
    dom::add_listener(window, "beforeunload", move |_: web::Event| {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    });
}

fn fade_in_body(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    dom::on_load(move || {
        dom::set_style(&body, "opacity", "0");
        dom::set_timeout(constants::BODY_FADE_IN_DELAY_MS, move || {
            dom::set_style(&body, "transition", "opacity 0.5s ease");
            dom::set_style(&body, "opacity", "1");
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    reset_scroll(&window);

    let renderer = start_dot_field(&document);
    events::theme::wire_theme_toggle(&document, renderer);

    events::nav::wire_mobile_menu(&document);
    events::nav::wire_anchor_scrolling(&document);
    events::nav::wire_scroll_effects(&document);

    events::typewriter::wire_typewriter(&document);

    events::cards::wire_project_filter(&document);
    events::cards::wire_card_tilt(&document);
    events::cards::wire_card_reveal(&document);
    events::cards::wire_project_images(&document);
    events::cards::set_footer_year(&document);

    events::form::wire_contact_form(&document);

    fade_in_body(&document);
    log::info!("portfolio-web ready");
    Ok(())
}
