// Host-side tests for the dot model, grid layout and connection math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod section {
        include!("../src/core/section.rs");
    }
    pub mod dots {
        include!("../src/core/dots.rs");
    }
}

use constants::*;
use crate::core::dots::*;
use crate::core::section::Section;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn dot_at(x: f32, y: f32, opacity: f32) -> Dot {
    let mut dot = Dot::spawn(Vec2::new(x, y), Section::Hero, 0.0, &mut rng());
    dot.pos = Vec2::new(x, y);
    dot.opacity = opacity;
    dot
}

#[test]
fn grid_dims_cover_partial_cells() {
    assert_eq!(grid_dims(45.0, 45.0), (2, 2));
    assert_eq!(grid_dims(90.0, 90.0), (3, 3));
    assert_eq!(grid_dims(91.0, 10.0), (4, 2));
    assert_eq!(grid_dims(1280.0, 720.0), (30, 17));
}

#[test]
fn grid_dims_degrade_for_empty_sections() {
    assert_eq!(grid_dims(0.0, 0.0), (1, 1));
    assert_eq!(grid_dims(-10.0, 0.0), (1, 1));
}

#[test]
fn build_grid_places_homes_row_major() {
    let dots = build_grid(Section::About, 90.0, 90.0, 12.0, &mut rng());
    assert_eq!(dots.len(), 9);
    let homes: Vec<(f32, f32)> = dots.iter().map(|d| (d.home.x, d.home.y)).collect();
    assert_eq!(
        homes,
        vec![
            (0.0, 0.0),
            (45.0, 0.0),
            (90.0, 0.0),
            (0.0, 45.0),
            (45.0, 45.0),
            (90.0, 45.0),
            (0.0, 90.0),
            (45.0, 90.0),
            (90.0, 90.0),
        ]
    );
    for d in &dots {
        assert_eq!(d.section, Section::About);
        assert_eq!(d.y_offset, 12.0);
        assert_eq!(d.radius, DOT_RADIUS);
    }
}

#[test]
fn spawn_parameters_stay_in_documented_ranges() {
    let mut r = rng();
    for i in 0..500 {
        let d = Dot::spawn(Vec2::new(i as f32, 0.0), Section::Hero, 0.0, &mut r);
        assert!(d.phase.x >= 0.0 && d.phase.x <= std::f32::consts::TAU);
        assert!(d.phase.y >= 0.0 && d.phase.y <= std::f32::consts::TAU);
        assert!(d.phase_speed.x >= FLOAT_SPEED && d.phase_speed.x <= 2.0 * FLOAT_SPEED);
        assert!(d.phase_speed.y >= FLOAT_SPEED && d.phase_speed.y <= 2.0 * FLOAT_SPEED);
        assert!(d.float_range.x >= FLOAT_RANGE * 0.5 && d.float_range.x <= FLOAT_RANGE);
        assert!(d.float_range.y >= FLOAT_RANGE * 0.5 && d.float_range.y <= FLOAT_RANGE);
        assert!((0.0..=1.0).contains(&d.opacity));
        assert!(d.target_opacity == 0.0 || d.target_opacity == 1.0);
        assert!(d.fade_speed >= FADE_SPEED_MIN && d.fade_speed <= FADE_SPEED_MIN + FADE_SPEED_SPAN);
        assert!(d.fade_delay >= 0.0 && d.fade_delay <= INITIAL_FADE_DELAY_MAX_MS);
        assert_eq!(d.fade_timer, 0.0);
    }
}

#[test]
fn position_stays_within_float_range_of_home() {
    let mut r = rng();
    let mut dots = build_grid(Section::Hero, 200.0, 200.0, 0.0, &mut r);
    for _ in 0..5_000 {
        for d in &mut dots {
            d.update(FRAME_TIME_MS, &mut r);
            let offset = d.pos - d.home;
            assert!(offset.x.abs() <= d.float_range.x + 1e-3);
            assert!(offset.y.abs() <= d.float_range.y + 1e-3);
        }
    }
}

#[test]
fn opacity_stays_within_unit_interval() {
    let mut r = rng();
    let mut dots = build_grid(Section::Hero, 300.0, 135.0, 0.0, &mut r);
    for _ in 0..20_000 {
        for d in &mut dots {
            d.update(FRAME_TIME_MS, &mut r);
            assert!((0.0..=1.0).contains(&d.opacity), "opacity {}", d.opacity);
            assert!(d.target_opacity == 0.0 || d.target_opacity == 1.0);
        }
    }
}

#[test]
fn fade_waits_for_delay_before_moving() {
    let mut r = rng();
    let mut d = dot_at(0.0, 0.0, 0.5);
    d.target_opacity = 1.0;
    d.fade_speed = 0.005;
    d.fade_delay = 100.0;
    d.fade_timer = 0.0;

    for _ in 0..6 {
        d.update(FRAME_TIME_MS, &mut r);
    }
    assert_eq!(d.opacity, 0.5, "timer at 96ms must not pass a 100ms delay");

    d.update(FRAME_TIME_MS, &mut r);
    assert!((d.opacity - 0.505).abs() < 1e-6);
}

#[test]
fn fade_moves_monotonically_toward_target() {
    let mut r = rng();
    let mut d = dot_at(0.0, 0.0, 0.9);
    d.target_opacity = 0.0;
    d.fade_speed = 0.004;
    d.fade_delay = 0.0;

    let mut prev = d.opacity;
    while d.target_opacity == 0.0 && d.opacity > 0.0 {
        d.update(FRAME_TIME_MS, &mut r);
        assert!(d.opacity <= prev);
        prev = d.opacity;
    }
    assert_eq!(d.opacity, 0.0);
}

#[test]
fn reaching_target_draws_new_target_and_delay() {
    let mut r = rng();
    let mut d = dot_at(0.0, 0.0, 0.998);
    d.target_opacity = 1.0;
    d.fade_speed = 0.005;
    d.fade_delay = 0.0;
    d.fade_timer = 500.0;

    d.update(FRAME_TIME_MS, &mut r);
    assert_eq!(d.opacity, 1.0, "overshoot is clamped to the target");
    assert_eq!(d.fade_timer, 0.0);
    assert!(d.fade_delay >= FADE_DELAY_MIN_MS);
    assert!(d.fade_delay <= FADE_DELAY_MIN_MS + FADE_DELAY_SPAN_MS);
    assert!(d.target_opacity == 0.0 || d.target_opacity == 1.0);
}

#[test]
fn random_target_favours_visible() {
    let mut r = rng();
    let visible = (0..10_000).filter(|_| random_target(&mut r) == 1.0).count();
    assert!((6_500..7_500).contains(&visible), "visible={visible}");
}

#[test]
fn faint_dot_is_hidden_but_still_moves() {
    let mut r = rng();
    let mut d = dot_at(45.0, 45.0, 0.04);
    d.target_opacity = 0.04;
    d.fade_delay = 1e9;
    assert!(!d.is_visible());
    assert_eq!(d.fill_alpha(), None);

    let before = d.phase;
    d.update(FRAME_TIME_MS, &mut r);
    assert_ne!(d.phase, before);
    assert!(!d.is_visible());
}

#[test]
fn fill_alpha_is_half_opacity() {
    let d = dot_at(0.0, 0.0, 0.8);
    assert_eq!(d.fill_alpha(), Some(0.4));
}

#[test]
fn connection_at_threshold_distance_is_excluded() {
    let a = dot_at(0.0, 0.0, 1.0);
    let b = dot_at(80.0, 0.0, 1.0);
    assert_eq!(connection_alpha(&a, &b), 0.0);

    let c = dot_at(0.0, 0.0, 1.0);
    let d = dot_at(48.0, 64.0, 1.0); // 3-4-5 triangle, exactly 80 apart
    assert_eq!(connection_alpha(&c, &d), 0.0);
}

#[test]
fn connection_fades_with_distance_and_opacity() {
    let a = dot_at(0.0, 0.0, 1.0);
    let b = dot_at(40.0, 0.0, 1.0);
    let full = connection_alpha(&a, &b);
    assert!((full - 0.15).abs() < 1e-6);

    let faint = dot_at(40.0, 0.0, 0.5);
    let mixed = connection_alpha(&a, &faint);
    assert!((mixed - 0.15 * 0.75).abs() < 1e-6);

    let near = dot_at(10.0, 0.0, 1.0);
    assert!(connection_alpha(&a, &near) > full);
}

#[test]
fn connection_requires_both_endpoints_visible_enough() {
    let a = dot_at(0.0, 0.0, 1.0);
    let b = dot_at(10.0, 0.0, 0.09);
    assert_eq!(connection_alpha(&a, &b), 0.0);
    assert_eq!(connection_alpha(&b, &a), 0.0);

    let c = dot_at(10.0, 0.0, CONNECTION_VISIBILITY_THRESHOLD);
    assert!(connection_alpha(&a, &c) > 0.0);
}

#[test]
fn connection_alpha_is_symmetric() {
    let mut r = rng();
    let mut dots = build_grid(Section::Skills, 180.0, 180.0, 0.0, &mut r);
    for _ in 0..50 {
        for d in &mut dots {
            d.update(FRAME_TIME_MS, &mut r);
        }
    }
    for a in &dots {
        for b in &dots {
            assert_eq!(connection_alpha(a, b), connection_alpha(b, a));
        }
    }
}

#[test]
fn absolute_position_adds_section_offset() {
    let mut d = dot_at(10.0, 20.0, 1.0);
    d.y_offset = 500.0;
    assert_eq!(d.absolute_position(), Vec2::new(10.0, 520.0));
}
