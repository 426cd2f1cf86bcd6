// Integration tests for a single line slider driven directly, without a manager.

use glam::{Quat, Vec3};
use handle_core::*;

// Ray looking down -Z that crosses the X axis at `x`.
fn ray_at_x(x: f32) -> Ray {
    Ray::new(Vec3::new(x, 0.0, 5.0), Vec3::NEG_Z)
}

fn x_slider(snap: f32) -> LineSlider {
    LineSlider::new(Vec3::X, 2.0, false, snap).unwrap()
}

#[test]
fn zero_direction_is_invalid_axis() {
    let result = LineSlider::new(Vec3::ZERO, 1.0, true, 0.0);
    assert_eq!(result.unwrap_err(), SliderError::InvalidAxis);
}

#[test]
fn non_finite_direction_is_invalid_axis() {
    let result = LineSlider::new(Vec3::new(f32::NAN, 1.0, 0.0), 1.0, true, 0.0);
    assert_eq!(result.unwrap_err(), SliderError::InvalidAxis);
    let result = LineSlider::new(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0, true, 0.0);
    assert_eq!(result.unwrap_err(), SliderError::InvalidAxis);
}

#[test]
fn direction_is_normalized_on_construction() {
    let slider = LineSlider::new(Vec3::new(0.0, 3.0, 4.0), 1.0, true, 0.0).unwrap();
    assert!((slider.direction().length() - 1.0).abs() < 1e-6);
    assert!((slider.direction() - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
}

#[test]
fn huge_and_tiny_directions_normalize() {
    let huge = LineSlider::new(Vec3::new(1e20, 0.0, 0.0), 1.0, false, 0.0).unwrap();
    assert_eq!(huge.direction(), Vec3::X);
    let huge = LineSlider::new(Vec3::new(3e38, -3e38, 0.0), 1.0, false, 0.0).unwrap();
    assert!((huge.direction() - Vec3::new(1.0, -1.0, 0.0).normalize()).length() < 1e-6);

    let tiny = LineSlider::new(Vec3::new(1e-30, 1e-30, 0.0), 1.0, false, 0.0).unwrap();
    assert!((tiny.direction().length() - 1.0).abs() < 1e-6);
    let subnormal = LineSlider::new(Vec3::new(0.0, 0.0, -1e-44), 1.0, false, 0.0).unwrap();
    assert_eq!(subnormal.direction(), Vec3::NEG_Z);
}

#[test]
fn negative_length_and_snap_are_clamped() {
    let slider = LineSlider::new(Vec3::Y, -3.0, false, -0.25).unwrap();
    assert_eq!(slider.length(), 0.0);
    assert_eq!(slider.snap_value(), 0.0);
}

#[test]
fn desc_defaults_to_fixed_scale_without_snapping() {
    let desc = LineSliderDesc::new(Vec3::Z, 1.5);
    assert!(desc.fixed_scale);
    assert_eq!(desc.snap_value, 0.0);
    let slider = LineSlider::from_desc(&desc.snap_value(0.25)).unwrap();
    assert!(slider.fixed_scale());
    assert_eq!(slider.snap_value(), 0.25);
}

#[test]
fn drag_to_one_unit_moves_one_unit() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    assert_eq!(slider.delta(), 0.0);

    let delta = slider.drag(&ray_at_x(1.0)).unwrap();
    assert_eq!(delta, 1.0);
    assert_eq!(slider.delta(), 1.0);
    assert_eq!(slider.new_position(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn unit_snap_rounds_down_below_half() {
    let mut slider = x_slider(1.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(1.4)).unwrap();
    assert_eq!(slider.delta(), 1.0);
    assert_eq!(slider.new_position(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn half_snap_rounds_to_nearest() {
    let mut slider = x_slider(0.5);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(0.73)).unwrap();
    assert_eq!(slider.delta(), 0.5);
    slider.drag(&ray_at_x(1.26)).unwrap();
    assert_eq!(slider.delta(), 1.5);
    slider.drag(&ray_at_x(-0.8)).unwrap();
    assert_eq!(slider.delta(), -1.0);
}

#[test]
fn snap_delta_matches_rounding_table() {
    assert_eq!(snap_delta(0.73, 0.5), 0.5);
    assert_eq!(snap_delta(1.26, 0.5), 1.5);
    assert_eq!(snap_delta(1.4, 1.0), 1.0);
    assert_eq!(snap_delta(0.3, 0.0), 0.3);
}

#[test]
fn delta_is_not_clamped_to_length() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(7.0)).unwrap();
    assert_eq!(slider.delta(), 7.0);
}

#[test]
fn reads_are_stable_between_updates() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.25))
        .unwrap();
    slider.drag(&ray_at_x(0.9)).unwrap();
    let first = (slider.delta(), slider.new_position());
    let second = (slider.delta(), slider.new_position());
    assert_eq!(first, second);
}

#[test]
fn end_then_restart_resets_delta() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(1.5)).unwrap();
    assert!(slider.end_drag());
    assert!(!slider.is_dragging());
    assert_eq!(slider.delta(), 1.5);
    assert_eq!(slider.new_position(), Vec3::new(1.5, 0.0, 0.0));

    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(1.5))
        .unwrap();
    assert_eq!(slider.delta(), 0.0);
    assert_eq!(slider.new_position(), Vec3::ZERO);
}

#[test]
fn cancel_keeps_last_outputs() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(0.5)).unwrap();
    assert!(slider.cancel_drag());
    assert!(!slider.cancel_drag());
    assert_eq!(slider.delta(), 0.5);

    // idle sliders ignore drag frames
    assert_eq!(slider.drag(&ray_at_x(3.0)), Ok(0.5));
    assert_eq!(slider.delta(), 0.5);
}

#[test]
fn parallel_ray_holds_previous_frame() {
    let mut slider = x_slider(0.0);
    slider
        .begin_drag(&SliderFrame::at(Vec3::ZERO), &ray_at_x(0.0))
        .unwrap();
    slider.drag(&ray_at_x(0.75)).unwrap();

    let parallel = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
    assert_eq!(slider.drag(&parallel), Err(SliderError::NoIntersection));
    assert!(slider.is_dragging());
    assert_eq!(slider.delta(), 0.75);
    assert_eq!(slider.new_position(), Vec3::new(0.75, 0.0, 0.0));
}

#[test]
fn parallel_ray_cannot_start_a_drag() {
    let mut slider = x_slider(0.0);
    let parallel = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
    assert_eq!(
        slider.begin_drag(&SliderFrame::at(Vec3::ZERO), &parallel),
        Err(SliderError::NoIntersection)
    );
    assert!(!slider.is_dragging());
}

#[test]
fn rotated_frame_moves_along_world_axis() {
    let mut slider = x_slider(0.0);
    let frame = SliderFrame {
        origin: Vec3::new(1.0, 1.0, 0.0),
        rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        scale: 1.0,
    };
    let ray_at_y = |y: f32| Ray::new(Vec3::new(1.0, y, 5.0), Vec3::NEG_Z);
    slider.begin_drag(&frame, &ray_at_y(1.0)).unwrap();
    assert!((slider.axis() - Vec3::Y).length() < 1e-6);

    slider.drag(&ray_at_y(3.0)).unwrap();
    assert!((slider.delta() - 2.0).abs() < 1e-5);
    assert!((slider.new_position() - Vec3::new(1.0, 3.0, 0.0)).length() < 1e-5);
}

#[test]
fn hit_test_covers_segment_and_tip() {
    let mut slider = x_slider(0.0);
    let camera = Camera::default();
    let settings = HandleSettings::default();
    let frame = SliderFrame::at(Vec3::ZERO);

    let t = slider.hit_test(&frame, &ray_at_x(1.0), &camera, &settings);
    assert_eq!(t, Some(5.0));
    // just past the segment end, inside the tip sphere
    assert!(slider
        .hit_test(&frame, &ray_at_x(2.05), &camera, &settings)
        .is_some());
    assert!(slider
        .hit_test(&frame, &ray_at_x(2.5), &camera, &settings)
        .is_none());
    // beside the segment, outside the pick radius
    let beside = Ray::new(Vec3::new(1.0, 0.2, 5.0), Vec3::NEG_Z);
    assert!(slider.hit_test(&frame, &beside, &camera, &settings).is_none());
}
