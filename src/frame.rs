use crate::canvas::CanvasSurface;
use crate::core::Renderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub renderer: Rc<RefCell<Renderer<CanvasSurface>>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed_ms = (now - self.last_instant).as_secs_f32() * 1000.0;
        self.last_instant = now;
        self.renderer.borrow_mut().tick(elapsed_ms);
    }
}

/// Handle to a running animation loop.
///
/// Dropping the handle leaves the loop running; call [`LoopHandle::cancel`]
/// to stop it and release the frame closure.
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle with itself.
        drop(self.tick.borrow_mut().take());
        log::info!("[frame] animation loop cancelled");
    }
}

fn request_frame(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let cancelled = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    LoopHandle {
        cancelled,
        raf_id,
        tick,
    }
}
