// src/utilities/easing.rs

// easing curves shared by the card animator, card swaps and the text panel

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn ease_in_out_quart(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [(&str, fn(f32) -> f32); 3] = [
        ("out_cubic", ease_out_cubic),
        ("in_out_cubic", ease_in_out_cubic),
        ("in_out_quart", ease_in_out_quart),
    ];

    #[test]
    fn test_endpoints() {
        for (name, curve) in CURVES {
            assert!(curve(0.0).abs() < 1e-6, "{}", name);
            assert!((curve(1.0) - 1.0).abs() < 1e-6, "{}", name);
        }
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for (name, curve) in CURVES {
            let mut previous = curve(0.0);
            for step in 1..=100 {
                let value = curve(step as f32 / 100.0);
                assert!(value >= previous - 1e-6, "{} at {}", name, step);
                assert!((0.0..=1.0 + 1e-6).contains(&value));
                previous = value;
            }
        }
    }

    #[test]
    fn test_symmetric_curves_pass_through_half() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_quart(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }
}
