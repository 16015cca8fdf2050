use crate::core::{Binding, Section, Surface};
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A section background canvas with its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

/// Section elements kept for re-measuring on resize.
pub struct SectionElements {
    elements: Vec<(Section, web::HtmlElement)>,
}

impl SectionElements {
    /// Canvas size for `section`: viewport width by the section's rendered height.
    pub fn measure(&self, section: Section) -> (u32, u32) {
        self.elements
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, el)| measure_element(el))
            .unwrap_or((dom::viewport_width().max(0.0) as u32, 0))
    }
}

#[inline]
fn measure_element(el: &web::HtmlElement) -> (u32, u32) {
    (
        dom::viewport_width().max(0.0) as u32,
        el.offset_height().max(0) as u32,
    )
}

/// Bind every section that has both its element and its canvas on the page.
pub fn bind_sections(document: &web::Document) -> (Vec<Binding<CanvasSurface>>, SectionElements) {
    let mut bindings = Vec::new();
    let mut elements = Vec::new();
    for section in Section::ALL {
        let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, section.canvas_id())
        else {
            continue;
        };
        let Some(element) = dom::query(document, section.selector()) else {
            continue;
        };
        let surface = match CanvasSurface::new(canvas) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[dots] skipping {} section: {:?}", section.name(), e);
                continue;
            }
        };
        let (w, h) = measure_element(&element);
        bindings.push(Binding::new(section, surface, w, h));
        elements.push((section, element));
    }
    log::info!(
        "[dots] bound sections: {:?}",
        bindings.iter().map(|b| b.section.name()).collect::<Vec<_>>()
    );
    (bindings, SectionElements { elements })
}
