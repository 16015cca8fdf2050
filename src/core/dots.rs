use crate::constants::*;
use crate::core::section::Section;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One animated grid point.
///
/// The dot orbits its fixed `home` on two independent sine/cosine phases and
/// cycles between fully visible and fully hidden on its own random schedule.
///
/// Fields:
/// - `home`: grid-anchored position, never changes after spawn
/// - `pos`: current position, recomputed from `home` every update
/// - `y_offset`: summed heights of the sections stacked above this one
/// - `phase` / `phase_speed`: oscillator angles (x uses sin, y uses cos)
/// - `float_range`: per-axis amplitude of the orbit
/// - `fade_timer` / `fade_delay`: milliseconds since the last fade target was
///   reached, and how long to wait before moving toward the next one
#[derive(Clone, Debug)]
pub struct Dot {
    pub home: Vec2,
    pub pos: Vec2,
    pub section: Section,
    pub y_offset: f32,
    pub radius: f32,
    pub phase: Vec2,
    pub phase_speed: Vec2,
    pub float_range: Vec2,
    pub opacity: f32,
    pub target_opacity: f32,
    pub fade_speed: f32,
    pub fade_delay: f32,
    pub fade_timer: f32,
}

impl Dot {
    /// Create a dot at `home` with randomized motion and fade parameters.
    pub fn spawn<R: Rng + ?Sized>(home: Vec2, section: Section, y_offset: f32, rng: &mut R) -> Self {
        let phase = Vec2::new(rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU);
        let phase_speed = Vec2::new(
            FLOAT_SPEED + rng.gen::<f32>() * FLOAT_SPEED,
            FLOAT_SPEED + rng.gen::<f32>() * FLOAT_SPEED,
        );
        let span = 1.0 - FLOAT_RANGE_MIN_FACTOR;
        let float_range = Vec2::new(
            FLOAT_RANGE * (FLOAT_RANGE_MIN_FACTOR + rng.gen::<f32>() * span),
            FLOAT_RANGE * (FLOAT_RANGE_MIN_FACTOR + rng.gen::<f32>() * span),
        );
        Self {
            home,
            pos: home,
            section,
            y_offset,
            radius: DOT_RADIUS,
            phase,
            phase_speed,
            float_range,
            opacity: rng.gen::<f32>(),
            target_opacity: random_target(rng),
            fade_speed: FADE_SPEED_MIN + rng.gen::<f32>() * FADE_SPEED_SPAN,
            fade_delay: rng.gen::<f32>() * INITIAL_FADE_DELAY_MAX_MS,
            fade_timer: 0.0,
        }
    }

    /// Advance motion by one frame and the fade timer by `dt_ms`.
    pub fn update<R: Rng + ?Sized>(&mut self, dt_ms: f32, rng: &mut R) {
        self.phase += self.phase_speed;
        self.pos = self.home
            + Vec2::new(
                self.phase.x.sin() * self.float_range.x,
                self.phase.y.cos() * self.float_range.y,
            );

        self.fade_timer += dt_ms;
        if self.fade_timer > self.fade_delay {
            self.step_fade(rng);
        }
    }

    fn step_fade<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.opacity < self.target_opacity {
            self.opacity = (self.opacity + self.fade_speed).min(self.target_opacity);
        } else if self.opacity > self.target_opacity {
            self.opacity = (self.opacity - self.fade_speed).max(self.target_opacity);
        }
        if self.opacity == self.target_opacity {
            self.target_opacity = random_target(rng);
            self.fade_delay = FADE_DELAY_MIN_MS + rng.gen::<f32>() * FADE_DELAY_SPAN_MS;
            self.fade_timer = 0.0;
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > DOT_VISIBILITY_THRESHOLD
    }

    #[inline]
    pub fn can_connect(&self) -> bool {
        self.opacity >= CONNECTION_VISIBILITY_THRESHOLD
    }

    /// Fill alpha for the dot, or `None` when it is below the visibility threshold.
    #[inline]
    pub fn fill_alpha(&self) -> Option<f32> {
        self.is_visible().then_some(self.opacity * DOT_ALPHA_SCALE)
    }

    /// Position relative to the top of the first bound section.
    #[inline]
    pub fn absolute_position(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.y_offset)
    }
}

/// Next fade target: fully visible 70% of the time, otherwise fully hidden.
#[inline]
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(VISIBLE_TARGET_PROBABILITY) {
        1.0
    } else {
        0.0
    }
}

/// Column and row counts covering a `width` x `height` area, including the
/// partial trailing cell on each axis.
#[inline]
pub fn grid_dims(width: f32, height: f32) -> (usize, usize) {
    let cols = (width.max(0.0) / GRID_SPACING).ceil() as usize + 1;
    let rows = (height.max(0.0) / GRID_SPACING).ceil() as usize + 1;
    (cols, rows)
}

/// Lay out a complete row-major grid of fresh dots for one section.
pub fn build_grid<R: Rng + ?Sized>(
    section: Section,
    width: f32,
    height: f32,
    y_offset: f32,
    rng: &mut R,
) -> Vec<Dot> {
    let (cols, rows) = grid_dims(width, height);
    let mut dots = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let home = Vec2::new(col as f32 * GRID_SPACING, row as f32 * GRID_SPACING);
            dots.push(Dot::spawn(home, section, y_offset, rng));
        }
    }
    dots
}

/// Line alpha between two dots; 0.0 means no connection is drawn.
///
/// Fades linearly to zero at `CONNECTION_DISTANCE` (exclusive) and scales
/// with the mean opacity of both endpoints. Symmetric in its arguments.
#[inline]
pub fn connection_alpha(a: &Dot, b: &Dot) -> f32 {
    if !a.can_connect() || !b.can_connect() {
        return 0.0;
    }
    let distance = a.pos.distance(b.pos);
    if distance >= CONNECTION_DISTANCE {
        return 0.0;
    }
    let fade = (1.0 - distance / CONNECTION_DISTANCE) * LINE_ALPHA_SCALE;
    fade * (a.opacity + b.opacity) / 2.0
}
