// src/models/card.rs
//
// A single service card: fixed identity, grid home, and the pose the
// animator recomputes every frame.

use nannou::prelude::*;
use std::collections::VecDeque;

use crate::utilities::easing::lerp;

/// Number of past positions kept for the motion trail.
pub const TRAIL_LENGTH: usize = 6;

/// Everything the renderer needs to place one card. Screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub position: Vec2,
    pub size: f32,
    pub rotation: f32, // degrees, clockwise on screen
    pub scale: f32,
    pub alpha: f32, // 0.0..=255.0
    pub elevation: f32,
    pub glow: f32,
}

impl CardPose {
    pub fn at_rest(position: Vec2, size: f32) -> Self {
        Self {
            position,
            size,
            rotation: 0.0,
            scale: 1.0,
            alpha: 255.0,
            elevation: 0.0,
            glow: 0.0,
        }
    }

    pub fn lerp(&self, other: &CardPose, t: f32) -> CardPose {
        CardPose {
            position: vec2(
                lerp(self.position.x, other.position.x, t),
                lerp(self.position.y, other.position.y, t),
            ),
            size: lerp(self.size, other.size, t),
            rotation: lerp(self.rotation, other.rotation, t),
            scale: lerp(self.scale, other.scale, t),
            alpha: lerp(self.alpha, other.alpha, t),
            elevation: lerp(self.elevation, other.elevation, t),
            glow: lerp(self.glow, other.glow, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub glow: f32,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub home: Vec2,
    pub pose: CardPose,
    // pose at the moment the current grid <-> stack transition began
    pub transition_origin: CardPose,
    trail: VecDeque<TrailPoint>,
}

impl Card {
    pub fn new(index: usize, home: Vec2, size: f32) -> Self {
        let pose = CardPose::at_rest(home, size);
        Self {
            index,
            home,
            pose,
            transition_origin: pose,
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
        }
    }

    pub fn capture_origin(&mut self) {
        self.transition_origin = self.pose;
    }

    pub fn push_trail(&mut self) {
        if self.trail.len() >= TRAIL_LENGTH {
            self.trail.pop_front();
        }
        self.trail.push_back(TrailPoint {
            position: self.pose.position,
            glow: self.pose.glow,
        });
    }

    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Oldest first.
    pub fn trail(&self) -> &VecDeque<TrailPoint> {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_is_bounded() {
        let mut card = Card::new(0, vec2(10.0, 10.0), 100.0);
        for i in 0..20 {
            card.pose.position = vec2(i as f32, 0.0);
            card.push_trail();
        }
        assert_eq!(card.trail().len(), TRAIL_LENGTH);
        assert_eq!(card.trail().front().unwrap().position.x, 14.0);
        assert_eq!(card.trail().back().unwrap().position.x, 19.0);

        card.clear_trail();
        assert!(card.trail().is_empty());
    }

    #[test]
    fn test_pose_lerp_endpoints() {
        let a = CardPose::at_rest(vec2(0.0, 0.0), 100.0);
        let mut b = CardPose::at_rest(vec2(10.0, 20.0), 200.0);
        b.alpha = 55.0;
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.position, vec2(5.0, 10.0));
        assert_eq!(mid.alpha, 155.0);
    }

    #[test]
    fn test_capture_origin() {
        let mut card = Card::new(2, vec2(1.0, 2.0), 50.0);
        card.pose.alpha = 120.0;
        card.capture_origin();
        assert_eq!(card.transition_origin.alpha, 120.0);
    }
}
