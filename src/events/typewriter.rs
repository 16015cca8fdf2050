use crate::constants::TYPEWRITER_START_DELAY_MS;
use crate::core::typewriter::Typewriter;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn run_step(target: web::HtmlElement, typewriter: Rc<RefCell<Typewriter>>) {
    let step = typewriter.borrow_mut().step();
    target.set_text_content(Some(&step.text));
    dom::set_timeout(step.delay_ms as i32, move || run_step(target, typewriter));
}

/// Start the rotating subtitle once the page has loaded.
pub fn wire_typewriter(document: &web::Document) {
    let Some(target) = dom::query(document, ".hero-subtitle") else {
        return;
    };
    let typewriter = Rc::new(RefCell::new(Typewriter::with_default_phrases()));
    dom::on_load(move || {
        dom::set_timeout(TYPEWRITER_START_DELAY_MS, move || run_step(target, typewriter));
    });
}
