use crate::core::field::{draw_dots, DotField, FieldParams, SectionLayout, Surface};
use crate::core::section::Section;
use crate::core::theme::Theme;

/// A bound section: its drawing surface and current pixel size.
pub struct Binding<S> {
    pub section: Section,
    pub surface: S,
    pub width: u32,
    pub height: u32,
}

impl<S: Surface> Binding<S> {
    pub fn new(section: Section, mut surface: S, width: u32, height: u32) -> Self {
        surface.set_size(width, height);
        Self {
            section,
            surface,
            width,
            height,
        }
    }

    fn layout(&self) -> SectionLayout {
        SectionLayout {
            section: self.section,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

/// Dot-field renderer owning the dot state and every bound surface.
///
/// Sections without a binding simply contribute no dots. The theme is read
/// through `theme` on every draw so colours follow toggles immediately.
pub struct Renderer<S> {
    field: DotField,
    bindings: Vec<Binding<S>>,
    theme: Box<dyn Fn() -> Theme>,
}

impl<S: Surface> Renderer<S> {
    /// Build the renderer and lay out the initial grids.
    pub fn new(
        params: FieldParams,
        mut bindings: Vec<Binding<S>>,
        theme: Box<dyn Fn() -> Theme>,
    ) -> Self {
        bindings.sort_by_key(|b| b.section);
        let mut renderer = Self {
            field: DotField::new(params),
            bindings,
            theme,
        };
        renderer.rebuild();
        renderer
    }

    /// Re-derive every grid from the current binding sizes.
    pub fn rebuild(&mut self) {
        let layouts: Vec<SectionLayout> = self.bindings.iter().map(Binding::layout).collect();
        self.field.rebuild(&layouts);
        log::info!(
            "[dots] rebuilt {} dots across {} sections",
            self.field.dot_count(),
            self.bindings.len()
        );
    }

    /// Refresh each surface's size from `measure` and rebuild all grids.
    pub fn resize(&mut self, mut measure: impl FnMut(Section) -> (u32, u32)) {
        for b in &mut self.bindings {
            let (w, h) = measure(b.section);
            b.width = w;
            b.height = h;
            b.surface.set_size(w, h);
        }
        self.rebuild();
    }

    /// One animation step: update all dots, then redraw every section.
    pub fn tick(&mut self, elapsed_ms: f32) {
        self.field.update(elapsed_ms);
        let theme = (self.theme)();
        for b in &mut self.bindings {
            draw_dots(self.field.dots(b.section), &mut b.surface, theme);
        }
    }

    /// Wipe every bound surface; the next tick repaints with live colours.
    pub fn clear_all(&mut self) {
        for b in &mut self.bindings {
            b.surface.clear();
        }
    }

    pub fn field(&self) -> &DotField {
        &self.field
    }

    pub fn bindings(&self) -> &[Binding<S>] {
        &self.bindings
    }
}
