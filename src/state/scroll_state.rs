//! Page scroll position and smooth-scroll animation

use std::time::{Duration, Instant};

/// Header gains its bottom border past this many rows
pub const HEADER_SOLID_THRESHOLD: u16 = 5;
/// Scroll-to-top button shows past this many rows
pub const SCROLL_TO_TOP_THRESHOLD: u16 = 20;

/// An in-flight eased scroll
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    pub from: u16,
    pub to: u16,
    pub start: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// First page row shown at the top of the viewport
    pub offset: u16,
    pub animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of a smooth scroll
    const ANIMATION_DURATION: Duration = Duration::from_millis(500);

    /// Scroll by a number of rows, cancelling any animation
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        self.animation = None;
        let next = (self.offset as i32 + delta).clamp(0, max_offset as i32);
        self.offset = next as u16;
    }

    /// Keep the offset within the page after a resize
    pub fn clamp(&mut self, max_offset: u16) {
        self.offset = self.offset.min(max_offset);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(max_offset);
        }
    }

    /// Move to `target`, eased unless `reduced_motion` is set
    pub fn scroll_to(&mut self, target: u16, reduced_motion: bool) {
        self.scroll_to_at(target, reduced_motion, Instant::now());
    }

    pub fn scroll_to_at(&mut self, target: u16, reduced_motion: bool, now: Instant) {
        if reduced_motion || target == self.offset {
            self.animation = None;
            self.offset = target;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            start: now,
        });
    }

    /// Advance the animation; returns true while still animating
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let elapsed = now.saturating_duration_since(animation.start);
        if elapsed >= Self::ANIMATION_DURATION {
            self.offset = animation.to;
            self.animation = None;
            return false;
        }

        // Cubic ease-out for smooth deceleration
        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let from = animation.from as f32;
        let to = animation.to as f32;
        self.offset = (from + (to - from) * eased).round() as u16;
        true
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_header_solid(&self) -> bool {
        self.offset > HEADER_SOLID_THRESHOLD
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.offset > SCROLL_TO_TOP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod manual_scroll {
        use super::*;

        #[test]
        fn test_scroll_by_clamps() {
            let mut scroll = ScrollState::default();
            scroll.scroll_by(-3, 50);
            assert_eq!(scroll.offset, 0);
            scroll.scroll_by(80, 50);
            assert_eq!(scroll.offset, 50);
        }

        #[test]
        fn test_scroll_by_cancels_animation() {
            let mut scroll = ScrollState::default();
            scroll.scroll_to(30, false);
            scroll.scroll_by(1, 50);
            assert!(!scroll.is_animating());
            assert_eq!(scroll.offset, 1);
        }

        #[test]
        fn test_clamp_after_resize() {
            let mut scroll = ScrollState {
                offset: 40,
                animation: None,
            };
            scroll.clamp(10);
            assert_eq!(scroll.offset, 10);
        }
    }

    mod animation {
        use super::*;

        #[test]
        fn test_reduced_motion_jumps() {
            let mut scroll = ScrollState::default();
            scroll.scroll_to(30, true);
            assert_eq!(scroll.offset, 30);
            assert!(!scroll.is_animating());
        }

        #[test]
        fn test_same_target_does_not_animate() {
            let mut scroll = ScrollState::default();
            scroll.scroll_to(0, false);
            assert!(!scroll.is_animating());
        }

        #[test]
        fn test_animation_progresses_and_finishes() {
            let start = Instant::now();
            let mut scroll = ScrollState::default();
            scroll.scroll_to_at(40, false, start);

            assert!(scroll.update_at(start + Duration::from_millis(100)));
            let midway = scroll.offset;
            assert!(midway > 0 && midway < 40);

            assert!(scroll.update_at(start + Duration::from_millis(300)));
            assert!(scroll.offset >= midway);

            assert!(!scroll.update_at(start + Duration::from_millis(600)));
            assert_eq!(scroll.offset, 40);
            assert!(!scroll.is_animating());
        }

        #[test]
        fn test_animation_upwards() {
            let start = Instant::now();
            let mut scroll = ScrollState {
                offset: 40,
                animation: None,
            };
            scroll.scroll_to_at(0, false, start);
            scroll.update_at(start + Duration::from_millis(250));
            assert!(scroll.offset < 40);
            scroll.update_at(start + Duration::from_secs(1));
            assert_eq!(scroll.offset, 0);
        }

        #[test]
        fn test_update_without_animation_is_noop() {
            let mut scroll = ScrollState::default();
            assert!(!scroll.update());
            assert_eq!(scroll.offset, 0);
        }
    }

    mod thresholds {
        use super::*;

        #[test]
        fn test_header_solid_after_threshold() {
            let mut scroll = ScrollState::default();
            assert!(!scroll.is_header_solid());
            scroll.offset = HEADER_SOLID_THRESHOLD;
            assert!(!scroll.is_header_solid());
            scroll.offset = HEADER_SOLID_THRESHOLD + 1;
            assert!(scroll.is_header_solid());
        }

        #[test]
        fn test_scroll_to_top_visibility() {
            let mut scroll = ScrollState::default();
            scroll.offset = SCROLL_TO_TOP_THRESHOLD;
            assert!(!scroll.show_scroll_to_top());
            scroll.offset = SCROLL_TO_TOP_THRESHOLD + 1;
            assert!(scroll.show_scroll_to_top());
        }
    }
}
