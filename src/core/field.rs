use crate::constants::*;
use crate::core::dots::{build_grid, connection_alpha, Dot};
use crate::core::section::Section;
use crate::core::theme::Theme;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drawing target for one section's dots.
///
/// The browser implementation wraps a 2D canvas context; host tests use a
/// recorder. Coordinates are section-local pixels.
pub trait Surface {
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f64, color: &str);
}

/// Runtime parameters for a [`DotField`].
///
/// - `fixed_frame_ms`: fade-timer increment per update. `Some` ignores the
///   measured frame time and always advances by that amount; `None` uses the
///   elapsed time handed to [`DotField::update`].
/// - `seed`: RNG seed for deterministic layouts; `None` seeds from entropy.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub fixed_frame_ms: Option<f32>,
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            fixed_frame_ms: Some(FRAME_TIME_MS),
            seed: None,
        }
    }
}

/// Pixel size of one bound section, in page order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLayout {
    pub section: Section,
    pub width: f32,
    pub height: f32,
}

/// The dots belonging to one section.
#[derive(Clone, Debug)]
pub struct SectionDots {
    pub section: Section,
    pub dots: Vec<Dot>,
}

/// All dot populations of the page, keyed by section in page order.
pub struct DotField {
    layers: Vec<SectionDots>,
    params: FieldParams,
    rng: StdRng,
}

impl DotField {
    pub fn new(params: FieldParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            layers: Vec::new(),
            params,
            rng,
        }
    }

    /// Discard every dot and lay out fresh grids for `layouts`.
    ///
    /// Each section's dots get a vertical offset equal to the summed heights
    /// of the layouts before it.
    pub fn rebuild(&mut self, layouts: &[SectionLayout]) {
        self.layers.clear();
        let mut y_offset = 0.0;
        for layout in layouts {
            let dots = build_grid(
                layout.section,
                layout.width,
                layout.height,
                y_offset,
                &mut self.rng,
            );
            self.layers.push(SectionDots {
                section: layout.section,
                dots,
            });
            y_offset += layout.height.max(0.0);
        }
    }

    /// Advance every dot in every section by one frame.
    pub fn update(&mut self, elapsed_ms: f32) {
        let dt_ms = self.params.fixed_frame_ms.unwrap_or(elapsed_ms);
        for layer in &mut self.layers {
            for dot in &mut layer.dots {
                dot.update(dt_ms, &mut self.rng);
            }
        }
    }

    /// Dots of `section`, empty when the section is not part of the field.
    pub fn dots(&self, section: Section) -> &[Dot] {
        self.layers
            .iter()
            .find(|l| l.section == section)
            .map(|l| l.dots.as_slice())
            .unwrap_or(&[])
    }

    pub fn layers(&self) -> &[SectionDots] {
        &self.layers
    }

    pub fn dot_count(&self) -> usize {
        self.layers.iter().map(|l| l.dots.len()).sum()
    }
}

/// Clear `surface` and draw `dots` with their proximity connections.
pub fn draw_dots<S: Surface + ?Sized>(dots: &[Dot], surface: &mut S, theme: Theme) {
    surface.clear();

    for dot in dots {
        if let Some(alpha) = dot.fill_alpha() {
            surface.fill_circle(dot.pos.x, dot.pos.y, dot.radius, &theme.rgba(alpha));
        }
    }

    // O(n^2) per section; n stays in the hundreds for typical viewports.
    for (i, a) in dots.iter().enumerate() {
        if !a.can_connect() {
            continue;
        }
        for b in &dots[i + 1..] {
            let alpha = connection_alpha(a, b);
            if alpha > 0.0 {
                surface.stroke_line(
                    (a.pos.x, a.pos.y),
                    (b.pos.x, b.pos.y),
                    LINE_WIDTH,
                    &theme.rgba(alpha),
                );
            }
        }
    }
}
