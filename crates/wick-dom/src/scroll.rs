//! Scroll Behavior API
//!
//! `Element.scrollBy` with smooth scrolling. Every request is recorded so
//! callers can observe what was asked for, independent of animation.

/// Scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// Scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f32,
    pub y: f32,
}

/// Scroll options (`{ left, top, behavior }`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollOptions {
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub behavior: ScrollBehavior,
}

impl ScrollOptions {
    /// Horizontal offset with the given behavior
    pub fn horizontal(left: f32, behavior: ScrollBehavior) -> Self {
        Self { top: None, left: Some(left), behavior }
    }
}

/// Smooth scroll duration in milliseconds
const SMOOTH_DURATION_MS: f32 = 300.0;

/// Per-element scroll state
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    position: ScrollPosition,
    smooth_from: ScrollPosition,
    smooth_target: Option<ScrollPosition>,
    animation_progress: f32,
    requests: Vec<ScrollOptions>,
}

impl ScrollState {
    /// Current scroll position
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// Position once any running animation finishes
    pub fn destination(&self) -> ScrollPosition {
        self.smooth_target.unwrap_or(self.position)
    }

    /// Every `scroll_by` request received, oldest first
    pub fn requests(&self) -> &[ScrollOptions] {
        &self.requests
    }

    /// Check if smooth scrolling
    pub fn is_scrolling(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Scroll by delta; offsets are relative to the pending destination
    pub fn scroll_by(&mut self, options: ScrollOptions) {
        let base = self.destination();
        let target = ScrollPosition {
            x: (base.x + options.left.unwrap_or(0.0)).max(0.0),
            y: (base.y + options.top.unwrap_or(0.0)).max(0.0),
        };

        match options.behavior {
            ScrollBehavior::Instant | ScrollBehavior::Auto => {
                self.position = target;
                self.smooth_target = None;
            }
            ScrollBehavior::Smooth => {
                self.smooth_from = self.position;
                self.smooth_target = Some(target);
                self.animation_progress = 0.0;
            }
        }
        self.requests.push(options);
    }

    /// Advance smooth scroll animation; returns true while it moved
    pub fn update(&mut self, delta_ms: f32) -> bool {
        let Some(target) = self.smooth_target else { return false };

        self.animation_progress += delta_ms / SMOOTH_DURATION_MS;
        if self.animation_progress >= 1.0 {
            self.position = target;
            self.smooth_target = None;
            return true;
        }

        // Ease-out cubic
        let t = 1.0 - (1.0 - self.animation_progress).powi(3);
        self.position.x = self.smooth_from.x + (target.x - self.smooth_from.x) * t;
        self.position.y = self.smooth_from.y + (target.y - self.smooth_from.y) * t;
        true
    }
}
