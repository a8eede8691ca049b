// src/animation/card_animator.rs
//
// Pure pose functions for the cards. Nothing here keeps state: given the
// phase progress (or the card swap) and a card index, each function returns
// the pose to draw for that frame.

use nannou::prelude::*;
use std::f32::consts::PI;

use super::CardSwap;
use crate::models::{CardPose, Layout};
use crate::utilities::easing::{ease_in_out_cubic, ease_in_out_quart, ease_out_cubic, lerp};

pub const TO_STACK_STAGGER: f32 = 0.08;
pub const TO_GRID_STAGGER: f32 = 0.05;
// keeps the last card of a large deck from starting too late to finish
const MAX_DELAY: f32 = 0.6;
// fraction of the to-stack transition during which cards keep their grid size
const SIZE_HOLD: f32 = 0.4;

const CENTRE_ELEVATION: f32 = 8.0;
const MIN_STACK_SCALE: f32 = 0.5;

pub fn stagger_delay(order: usize, step: f32) -> f32 {
    (order as f32 * step).min(MAX_DELAY)
}

/// Remaps global progress so each card starts after its delay and still
/// finishes at 1.0.
pub fn staggered_progress(progress: f32, delay: f32) -> f32 {
    ((progress - delay) / (1.0 - delay)).clamp(0.0, 1.0)
}

pub fn to_stack_progress(index: usize, progress: f32) -> f32 {
    staggered_progress(progress, stagger_delay(index, TO_STACK_STAGGER))
}

pub fn to_grid_progress(index: usize, card_count: usize, progress: f32) -> f32 {
    let order = card_count.saturating_sub(1).saturating_sub(index);
    staggered_progress(progress, stagger_delay(order, TO_GRID_STAGGER))
}

// Quadratic curve through an offset midpoint, so cards arc instead of sliding straight.
fn curved_path(start: Vec2, end: Vec2, mid_offset: Vec2, t: f32) -> Vec2 {
    let mid = (start + end) / 2.0 + mid_offset;
    let a = start.lerp(mid, t);
    let b = mid.lerp(end, t);
    a.lerp(b, t)
}

pub fn grid_pose(home: Vec2, layout: &Layout) -> CardPose {
    CardPose::at_rest(home, layout.card_size)
}

pub fn to_stack_pose(origin: &CardPose, index: usize, layout: &Layout, progress: f32) -> CardPose {
    let adjusted = to_stack_progress(index, progress);
    if adjusted <= 0.0 {
        return CardPose { glow: 0.0, ..*origin };
    }

    let arc = (adjusted * PI).sin();
    let t = ease_in_out_cubic(adjusted);
    let position = curved_path(
        origin.position,
        layout.stack_anchor(),
        vec2(arc * 40.0, -arc.abs() * 60.0),
        t,
    );

    let size = if adjusted < SIZE_HOLD {
        origin.size
    } else {
        let size_progress = (adjusted - SIZE_HOLD) / (1.0 - SIZE_HOLD);
        lerp(
            origin.size,
            layout.target_size,
            ease_in_out_quart(size_progress * size_progress),
        )
    };

    CardPose {
        position,
        size,
        rotation: arc * 2.0,
        scale: 1.0 + arc * 0.01,
        alpha: lerp(origin.alpha, 240.0, t * 0.5),
        elevation: adjusted * 6.0,
        glow: arc.max(0.0) * 30.0,
    }
}

pub fn to_grid_pose(
    origin: &CardPose,
    home: Vec2,
    index: usize,
    layout: &Layout,
    progress: f32,
) -> CardPose {
    let adjusted = to_grid_progress(index, layout.card_count, progress);
    if adjusted <= 0.0 {
        return CardPose { glow: 0.0, ..*origin };
    }

    let arc = (adjusted * PI).sin();
    let t = ease_in_out_cubic(adjusted);
    let position = curved_path(
        origin.position,
        home,
        vec2(-arc * 50.0, -arc.abs() * 80.0),
        t,
    );

    CardPose {
        position,
        size: lerp(origin.size, layout.card_size, ease_out_cubic(adjusted)),
        rotation: origin.rotation * (1.0 - t) - arc * 6.0,
        scale: lerp(origin.scale, 1.0, t) + arc * 0.03,
        alpha: lerp(origin.alpha, 255.0, t),
        elevation: (1.0 - adjusted) * 10.0,
        glow: arc.max(0.0) * 60.0,
    }
}

/// The card holding the focus of the deck.
pub fn centre_pose(layout: &Layout, time: f32) -> CardPose {
    CardPose {
        position: layout.stack_anchor(),
        size: layout.target_size,
        rotation: 0.0,
        scale: 1.0 + (time).sin() * 0.01,
        alpha: 255.0,
        elevation: CENTRE_ELEVATION,
        glow: 0.0,
    }
}

/// Resting pose of a card `offset` places from the focus. Positive offsets
/// are still ahead in the deck, negative ones were already shown.
pub fn slot_pose(offset: f32, layout: &Layout) -> CardPose {
    let anchor = layout.stack_anchor();
    let s = layout.scale_factor;

    if offset >= 0.0 {
        let d = offset;
        CardPose {
            position: anchor + vec2(d * 8.0 * s, d * 3.0 * s),
            size: layout.target_size,
            rotation: d * 1.5,
            scale: (1.0 - d * 0.03).max(MIN_STACK_SCALE),
            alpha: (180.0 - d * 25.0).max(60.0),
            elevation: (6.0 - d).max(1.0),
            glow: 0.0,
        }
    } else {
        let o = -offset;
        CardPose {
            position: anchor + vec2(-o * 5.0 * s, o * 2.0 * s),
            size: layout.target_size,
            rotation: -o,
            scale: (1.0 - o * 0.02).max(MIN_STACK_SCALE),
            alpha: (120.0 - o * 15.0).max(40.0),
            elevation: (4.0 - o).max(0.0),
            glow: 0.0,
        }
    }
}

pub fn stacked_pose(index: usize, swap: &CardSwap, layout: &Layout, time: f32) -> CardPose {
    if swap.is_settled() {
        return if index == swap.to() {
            centre_pose(layout, time)
        } else {
            slot_pose(index as f32 - swap.to() as f32, layout)
        };
    }

    let e = swap.eased();
    let flick = (e * PI).sin();
    let direction = swap.direction();
    let (from, to) = (swap.from(), swap.to());

    if index == from {
        // leaves the centre for its slot relative to the new focus
        let slot = slot_pose(from as f32 - to as f32, layout);
        let mut pose = centre_pose(layout, time).lerp(&slot, e);
        pose.position.x += direction * layout.slide_distance() * flick;
        pose.position.y -= 20.0 * layout.scale_factor * flick;
        pose.rotation -= direction * 15.0 * flick;
        pose
    } else if index == to {
        let slot = slot_pose(to as f32 - from as f32, layout);
        let mut pose = slot.lerp(&centre_pose(layout, time), e);
        pose.position.x -= direction * layout.slide_distance() * 0.5 * flick;
        pose.rotation += direction * 8.0 * flick;
        pose
    } else {
        slot_pose(index as f32 - swap.focus_position(), layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;

    fn layout() -> Layout {
        Layout::new(1200.0, 800.0, 8, &LayoutConfig::default())
    }

    fn assert_display_safe(pose: &CardPose, layout: &Layout) {
        assert!((0.0..=255.0).contains(&pose.alpha), "alpha {}", pose.alpha);
        assert!(pose.size >= layout.card_size - 1e-3, "size {}", pose.size);
        assert!(pose.size <= layout.target_size + 1e-3, "size {}", pose.size);
        assert!(pose.scale > 0.0);
        assert!(pose.elevation >= 0.0);
        assert!(pose.glow >= 0.0);
    }

    #[test]
    fn test_staggered_progress() {
        assert_eq!(staggered_progress(0.0, 0.0), 0.0);
        assert_eq!(staggered_progress(0.3, 0.4), 0.0);
        assert!((staggered_progress(0.7, 0.4) - 0.5).abs() < 1e-6);
        assert_eq!(staggered_progress(1.0, 0.56), 1.0);
        assert_eq!(stagger_delay(20, TO_STACK_STAGGER), MAX_DELAY);
    }

    #[test]
    fn test_cascade_order() {
        // cards leave the grid in index order and return in reverse
        assert!(to_stack_progress(0, 0.3) > to_stack_progress(7, 0.3));
        assert!(to_grid_progress(7, 8, 0.2) > to_grid_progress(0, 8, 0.2));
    }

    #[test]
    fn test_to_stack_endpoints() {
        let l = layout();
        for index in 0..8 {
            let origin = grid_pose(l.home(index), &l);
            let start = to_stack_pose(&origin, index, &l, 0.0);
            assert_eq!(start.position, origin.position);
            assert_eq!(start.size, l.card_size);

            let end = to_stack_pose(&origin, index, &l, 1.0);
            assert!((end.position - l.stack_anchor()).length() < 1e-3);
            assert!((end.size - l.target_size).abs() < 1e-3);
            assert!(end.glow.abs() < 1e-3);
        }
    }

    #[test]
    fn test_to_stack_size_held_early() {
        let l = layout();
        let origin = grid_pose(l.home(0), &l);
        let early = to_stack_pose(&origin, 0, &l, 0.35);
        assert_eq!(early.size, l.card_size);
        let late = to_stack_pose(&origin, 0, &l, 0.8);
        assert!(late.size > l.card_size);
    }

    #[test]
    fn test_to_stack_path_is_curved() {
        let l = layout();
        let origin = grid_pose(l.home(0), &l);
        let mid = to_stack_pose(&origin, 0, &l, 0.5);
        let straight = origin.position.lerp(l.stack_anchor(), ease_in_out_cubic(0.5));
        assert!((mid.position - straight).length() > 1.0);
    }

    #[test]
    fn test_to_grid_endpoints() {
        let l = layout();
        for index in 0..8 {
            let origin = slot_pose(index as f32 - 2.0, &l);
            let start = to_grid_pose(&origin, l.home(index), index, &l, 0.0);
            assert_eq!(start.position, origin.position);

            let end = to_grid_pose(&origin, l.home(index), index, &l, 1.0);
            assert!((end.position - l.home(index)).length() < 1e-3);
            assert!((end.size - l.card_size).abs() < 1e-3);
            assert!((end.alpha - 255.0).abs() < 1e-3);
            assert!(end.rotation.abs() < 1e-3);
        }
    }

    #[test]
    fn test_transition_poses_stay_display_safe() {
        let l = layout();
        for step in 0..=100 {
            let p = step as f32 / 100.0;
            for index in 0..8 {
                let origin = grid_pose(l.home(index), &l);
                assert_display_safe(&to_stack_pose(&origin, index, &l, p), &l);

                let origin = slot_pose(index as f32 - 3.0, &l);
                assert_display_safe(&to_grid_pose(&origin, l.home(index), index, &l, p), &l);
            }
        }
    }

    #[test]
    fn test_slots_fade_with_distance() {
        let l = layout();
        assert!(slot_pose(1.0, &l).alpha > slot_pose(3.0, &l).alpha);
        assert!(slot_pose(-1.0, &l).alpha > slot_pose(-3.0, &l).alpha);
        assert_eq!(slot_pose(10.0, &l).alpha, 60.0);
        assert_eq!(slot_pose(-10.0, &l).alpha, 40.0);
        assert!(slot_pose(2.0, &l).position.x > l.stack_anchor().x);
        assert!(slot_pose(-2.0, &l).position.x < l.stack_anchor().x);
    }

    #[test]
    fn test_settled_deck_has_one_opaque_card() {
        let l = layout();
        let swap = CardSwap::settled(3, 0.06);
        let poses: Vec<CardPose> = (0..8).map(|i| stacked_pose(i, &swap, &l, 0.0)).collect();
        let opaque: Vec<usize> = (0..8).filter(|&i| poses[i].alpha >= 255.0).collect();
        assert_eq!(opaque, vec![3]);
        assert_eq!(poses[3].position, l.stack_anchor());
        for pose in &poses {
            assert_display_safe(pose, &l);
        }
    }

    #[test]
    fn test_swap_is_continuous_at_both_ends() {
        let l = layout();
        let mut swap = CardSwap::settled(3, 0.05);
        let before: Vec<CardPose> = (0..8).map(|i| stacked_pose(i, &swap, &l, 0.0)).collect();
        swap.request(4);
        let started: Vec<CardPose> = (0..8).map(|i| stacked_pose(i, &swap, &l, 0.0)).collect();
        for i in 0..8 {
            assert!((before[i].position - started[i].position).length() < 1e-3, "card {}", i);
            assert!((before[i].alpha - started[i].alpha).abs() < 1e-3, "card {}", i);
        }

        let mut max_opaque = 0;
        while !swap.tick() {
            let poses: Vec<CardPose> = (0..8).map(|i| stacked_pose(i, &swap, &l, 0.0)).collect();
            let opaque = poses.iter().filter(|p| p.alpha >= 254.9).count();
            max_opaque = max_opaque.max(opaque);
            for pose in &poses {
                assert_display_safe(pose, &l);
            }
        }
        assert!(max_opaque <= 2);

        let settled: Vec<CardPose> = (0..8).map(|i| stacked_pose(i, &swap, &l, 0.0)).collect();
        assert_eq!(settled[4].alpha, 255.0);
        assert_eq!(settled[3], slot_pose(-1.0, &l));
    }
}
