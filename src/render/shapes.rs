// src/render/shapes.rs
//
// Geometry helpers for the card primitives nannou has no builder for.

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

const CORNER_SEGMENTS: usize = 6;

/// Outline of a square of side `size` with rounded corners, centred on the
/// origin, counter-clockwise.
pub fn rounded_square(size: f32, radius: f32) -> Vec<Point2> {
    let half = size / 2.0;
    let radius = radius.clamp(0.0, half);
    let inner = half - radius;

    // corner centres, starting top right and going counter-clockwise
    let corners = [
        (pt2(inner, inner), 0.0),
        (pt2(-inner, inner), FRAC_PI_2),
        (pt2(-inner, -inner), 2.0 * FRAC_PI_2),
        (pt2(inner, -inner), 3.0 * FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (centre, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
            points.push(centre + vec2(angle.cos(), angle.sin()) * radius);
        }
    }
    points
}

/// Corner radii scale with the card so small cards keep their proportions.
pub fn corner_radius(size: f32, base_radius: f32, base_size: f32) -> f32 {
    if base_size <= 0.0 {
        return base_radius;
    }
    base_radius * (size / base_size).clamp(0.5, 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_square_bounds() {
        let points = rounded_square(100.0, 15.0);
        assert_eq!(points.len(), 4 * (CORNER_SEGMENTS + 1));
        for p in &points {
            assert!(p.x.abs() <= 50.0 + 1e-4);
            assert!(p.y.abs() <= 50.0 + 1e-4);
        }
        // edges touch the square's sides
        assert!(points.iter().any(|p| (p.x - 50.0).abs() < 1e-4));
        assert!(points.iter().any(|p| (p.y + 50.0).abs() < 1e-4));
    }

    #[test]
    fn test_radius_is_clamped_to_half_size() {
        let points = rounded_square(20.0, 50.0);
        for p in &points {
            assert!((p.length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_corner_radius_scales() {
        assert_eq!(corner_radius(240.0, 15.0, 240.0), 15.0);
        assert_eq!(corner_radius(480.0, 15.0, 240.0), 30.0);
        assert_eq!(corner_radius(10.0, 15.0, 240.0), 7.5);
    }
}
