//! Integration tests for the public engine API.
//!
//! These tests drive [`FieldEngine`] the way an embedder would: build it with
//! the builder, feed pointer and scroll events, advance ticks, and read back
//! rendered frames. Everything runs headless.

use driftfield::{FieldEngine, MotionPreference, Rect, Vec2};

fn demo_scene() -> driftfield::SceneLayout {
    let mut scene = driftfield::SceneLayout::new();
    scene.add_content(Rect::new(100.0, 80.0, 240.0, 220.0));
    scene.add_interactive(Rect::new(40.0, 340.0, 120.0, 40.0));
    scene
}

fn seeded_engine() -> FieldEngine {
    FieldEngine::builder(480, 360)
        .with_seed(77)
        .with_particle_count(24)
        .with_motion(MotionPreference::Full)
        .with_scene(demo_scene())
        .build()
}

// ============================================================================
// Builder & determinism
// ============================================================================

#[test]
fn test_builder_applies_settings() {
    let engine = seeded_engine();

    assert_eq!(engine.viewport_width(), 480);
    assert_eq!(engine.viewport_height(), 360);
    assert_eq!(engine.seed(), 77);
    assert_eq!(engine.field().len(), 24);
    // Field extends one padding beyond the viewport on every side.
    assert_eq!(engine.field().width(), 520.0);
    assert_eq!(engine.field().height(), 400.0);
}

#[test]
fn test_seeded_runs_agree() {
    let mut a = seeded_engine();
    let mut b = seeded_engine();

    for step in 0..30 {
        let t = step as f32;
        a.pointer_moved(40.0 + 6.0 * t, 180.0);
        b.pointer_moved(40.0 + 6.0 * t, 180.0);
        if step % 7 == 0 {
            a.scroll_to(12.0 * t);
            b.scroll_to(12.0 * t);
        }
        a.tick(1.0 / 60.0);
        b.tick(1.0 / 60.0);
    }

    assert_eq!(a.field(), b.field());
    assert_eq!(a.render().data(), b.render().data());
}

#[test]
fn test_full_motion_drifts() {
    let mut engine = seeded_engine();
    let before: Vec<Vec2> = engine.field().particles().iter().map(|p| p.pos).collect();

    for _ in 0..10 {
        engine.tick(1.0 / 60.0);
    }

    let moved = engine
        .field()
        .particles()
        .iter()
        .zip(&before)
        .any(|(p, old)| p.pos != *old);
    assert!(moved, "particles did not drift under full motion");
}

// ============================================================================
// Motion preferences & pausing
// ============================================================================

#[test]
fn test_reduced_motion_is_static() {
    let build = || {
        FieldEngine::builder(480, 360)
            .with_seed(77)
            .with_particle_count(24)
            .with_motion(MotionPreference::Reduced)
            .build()
    };
    let mut touched = build();
    let untouched = build();
    assert!(!touched.is_animating());

    // A whole run of pointer and scroll traffic must not leak into the field.
    for step in 0..50 {
        let t = step as f32;
        touched.pointer_moved(40.0 + 8.0 * t, 180.0);
        touched.scroll_to(5.0 * t);
        touched.tick(1.0 / 60.0);
    }
    assert_eq!(touched.field(), untouched.field());

    let first = touched.render().data().to_vec();
    let second = touched.render().data().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut engine = seeded_engine();
    engine.tick(1.0 / 60.0);

    engine.pause();
    assert!(engine.is_paused());
    let frozen = engine.field().clone();
    engine.tick(1.0 / 60.0);
    assert_eq!(engine.field(), &frozen);

    engine.resume();
    assert!(!engine.is_paused());
    engine.tick(1.0 / 60.0);
    assert_ne!(engine.field(), &frozen);
}

#[test]
fn test_fixed_delta_advance() {
    let mut engine = seeded_engine();
    engine.set_fixed_delta(Some(1.0 / 60.0));

    let dt = engine.advance();
    assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    assert_eq!(engine.frame_count(), 1);
}

// ============================================================================
// Input reactions
// ============================================================================

#[test]
fn test_pointer_brightens_nearby_particle() {
    let mut engine = seeded_engine();
    let target = engine.field().particles()[0].pos;
    let pad = engine.field().padding();

    // Park the pointer 10px from the particle, in viewport coordinates.
    engine.pointer_moved(target.x - pad + 10.0, target.y - pad);
    engine.tick(1.0 / 60.0);

    let p = &engine.field().particles()[0];
    assert!(
        p.opacity > p.base_opacity + 0.2,
        "opacity {} did not rise above base {}",
        p.opacity,
        p.base_opacity
    );
}

#[test]
fn test_tint_reads_last_pointer_position() {
    // A fresh engine tints from the viewport center.
    let mut untouched = seeded_engine();
    let mut centered = seeded_engine();
    centered.pointer_moved(240.0, 180.0);
    assert_eq!(untouched.render().data(), centered.render().data());

    // Departure keeps the tint where the pointer last was.
    let mut roaming = seeded_engine();
    roaming.pointer_moved(60.0, 40.0);
    let over = roaming.render().data().to_vec();
    roaming.pointer_left();
    assert_eq!(roaming.render().data(), &over[..]);
}

#[test]
fn test_interactive_rect_flags_and_brightens() {
    let mut engine = FieldEngine::builder(480, 360)
        .with_seed(123)
        .with_particle_count(8)
        .with_motion(MotionPreference::Full)
        .build();
    let pad = engine.field().padding();
    let center = engine.field().particles()[0].pos - Vec2::splat(pad);
    let before = engine.field().particles()[0].opacity;

    engine
        .scene_mut()
        .add_interactive(Rect::new(center.x - 10.0, center.y - 10.0, 20.0, 20.0));
    engine.tick(1.0 / 60.0);

    let p = &engine.field().particles()[0];
    assert!(p.near_interactive);
    // Full boost is 0.3; the pre-boost relax can eat a sliver of it.
    assert!(p.opacity >= before + 0.25);
}

#[test]
fn test_scroll_settles_back_to_rest() {
    let mut engine = seeded_engine();
    engine.scroll_to(150.0);

    for _ in 0..200 {
        engine.tick(0.05);
    }
    assert_eq!(engine.input().scroll().velocity, 0.0);
}

#[test]
fn test_long_run_state_stays_bounded() {
    let mut engine = seeded_engine();

    for step in 0..2000u32 {
        let angle = step as f32 * 0.05;
        engine.pointer_moved(240.0 + angle.sin() * 230.0, 180.0 + angle.cos() * 170.0);
        if step % 7 == 0 {
            engine.scroll_to(step as f32 * 3.0);
        }
        if step % 97 == 0 {
            engine.pointer_left();
        }
        engine.tick(1.0 / 60.0);

        let field = engine.field();
        let (w, h, pad) = (field.width(), field.height(), field.padding());
        for p in field.particles() {
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
            assert!(p.vel.x.is_finite() && p.vel.y.is_finite());
            assert!(
                p.pos.x >= pad - 1e-3 && p.pos.x <= w - pad + 1e-3,
                "x {} escaped the band at step {step}",
                p.pos.x
            );
            assert!(
                p.pos.y >= pad - 1e-3 && p.pos.y <= h - pad + 1e-3,
                "y {} escaped the band at step {step}",
                p.pos.y
            );
            assert!(
                (0.0..=1.0).contains(&p.opacity),
                "opacity {} out of range at step {step}",
                p.opacity
            );
        }
    }
}

// ============================================================================
// Resize & capture
// ============================================================================

#[test]
fn test_resize_respawns_inside_band() {
    let mut engine = seeded_engine();
    engine.resize(600, 400);

    assert_eq!(engine.field().width(), 640.0);
    assert_eq!(engine.field().height(), 440.0);
    for p in engine.field().particles() {
        assert!(p.pos.x >= 20.0 && p.pos.x <= 620.0);
        assert!(p.pos.y >= 20.0 && p.pos.y <= 420.0);
    }

    let frame = engine.render();
    assert_eq!(frame.width(), 600);
    assert_eq!(frame.height(), 400);
}

#[test]
fn test_capture_roundtrip() {
    let mut engine = seeded_engine();
    engine.pointer_moved(240.0, 180.0);
    for _ in 0..30 {
        engine.tick(1.0 / 60.0);
    }

    let frame = engine.render();
    assert!(frame.data().iter().any(|&b| b != 0));

    let path_buf = std::env::temp_dir().join("driftfield_field_api_capture.png");
    let path = path_buf.to_str().unwrap();
    frame.save_png(path).unwrap();

    let image = image::open(path).unwrap();
    assert_eq!(image.width(), 480);
    assert_eq!(image.height(), 360);
    std::fs::remove_file(path).unwrap();
}
