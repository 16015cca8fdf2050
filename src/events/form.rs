use crate::constants::{FEEDBACK_HIDE_MS, SIMULATED_SUBMIT_MS};
use crate::core::validation::{
    self, FeedbackKind, FeedbackSchedule, FieldState, FormField, FIX_ERRORS_MESSAGE,
    SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn field_value(document: &web::Document, field: FormField) -> String {
    let Some(el) = document.get_element_by_id(field.element_id()) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<web::HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_default()
}

fn set_error_text(input: &web::Element, text: &str) {
    let error_el = input
        .parent_element()
        .and_then(|group| group.query_selector(".error-message").ok().flatten());
    if let Some(el) = error_el {
        el.set_text_content(Some(text));
    }
}

/// Reflect `state` on the input's classes, ARIA attribute and error text.
fn apply_state(document: &web::Document, field: FormField, state: &FieldState) {
    let Some(input) = document.get_element_by_id(field.element_id()) else {
        return;
    };
    let classes = input.class_list();
    match state {
        FieldState::Cleared => {
            _ = classes.remove_2("error", "success");
            _ = input.remove_attribute("aria-invalid");
            set_error_text(&input, "");
        }
        FieldState::Invalid(err) => {
            _ = classes.add_1("error");
            _ = classes.remove_1("success");
            _ = input.set_attribute("aria-invalid", "true");
            set_error_text(&input, &err.to_string());
        }
        FieldState::Valid => {
            _ = classes.remove_1("error");
            _ = classes.add_1("success");
            _ = input.set_attribute("aria-invalid", "false");
            set_error_text(&input, "");
        }
    }
}

type SharedSchedule = Rc<Cell<FeedbackSchedule>>;

/// Show `message` under the form; only the latest message's timer hides it.
fn show_feedback(
    document: &web::Document,
    schedule: &SharedSchedule,
    message: &str,
    kind: FeedbackKind,
) {
    let Some(feedback) = dom::by_id::<web::HtmlElement>(document, "formFeedback") else {
        return;
    };
    feedback.set_text_content(Some(message));
    feedback.set_class_name(kind.class_name());
    dom::set_style(&feedback, "display", "");

    let mut current = schedule.get();
    let token = current.show();
    schedule.set(current);
    let schedule = schedule.clone();
    dom::set_timeout(FEEDBACK_HIDE_MS, move || {
        if schedule.get().should_hide(token) {
            dom::set_style(&feedback, "display", "none");
        }
    });
}

/// Toggle the submit button between its idle and loading presentation.
fn set_loading(form: &web::HtmlFormElement, loading: bool) {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    let part = |selector: &str| {
        button
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    };
    if let Some(text) = part(".btn-text") {
        dom::set_style(&text, "display", if loading { "none" } else { "inline" });
    }
    if let Some(spinner) = part(".btn-loading") {
        dom::set_style(&spinner, "display", if loading { "inline-flex" } else { "none" });
    }
    button.set_disabled(loading);
}

/// Stand-in for a backend call: resolves after a fixed delay.
async fn simulate_submission() -> Result<(), JsValue> {
    dom::sleep(SIMULATED_SUBMIT_MS).await
}

async fn submit(document: web::Document, form: web::HtmlFormElement, schedule: SharedSchedule) {
    set_loading(&form, true);
    match simulate_submission().await {
        Ok(()) => {
            show_feedback(&document, &schedule, SUBMIT_SUCCESS_MESSAGE, FeedbackKind::Success);
            form.reset();
            for field in FormField::ALL {
                apply_state(&document, field, &FieldState::Cleared);
            }
            log::info!("[form] message submitted");
        }
        Err(e) => {
            log::error!("[form] submission failed: {:?}", e);
            show_feedback(&document, &schedule, SUBMIT_FAILURE_MESSAGE, FeedbackKind::Error);
        }
    }
    set_loading(&form, false);
}

/// Live validation on blur and validated, simulated submission.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(document, "contactForm") else {
        return;
    };

    for field in FormField::ALL {
        let Some(input) = document.get_element_by_id(field.element_id()) else {
            continue;
        };
        let doc = document.clone();
        dom::add_listener(&input, "blur", move |_: web::Event| {
            let value = field_value(&doc, field);
            apply_state(&doc, field, &validation::blur_state(field, &value));
        });
    }

    let doc = document.clone();
    let f = form.clone();
    let schedule = SharedSchedule::default();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let values: Vec<(FormField, String)> = FormField::ALL
            .iter()
            .map(|&field| (field, field_value(&doc, field)))
            .collect();
        let states =
            validation::submit_states(values.iter().map(|(field, v)| (*field, v.as_str())));
        for (field, state) in &states {
            apply_state(&doc, *field, state);
        }
        if !validation::all_valid(&states) {
            show_feedback(&doc, &schedule, FIX_ERRORS_MESSAGE, FeedbackKind::Error);
            return;
        }
        spawn_local(submit(doc.clone(), f.clone(), schedule.clone()));
    });
}
