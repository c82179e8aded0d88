//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region containing the pointer.
//! Scoped gestures fall out of the priority order: badge-remove and clear
//! regions sit above the container region they overlap, so their clicks
//! never double as a container toggle.

use ratatui::layout::Rect;

use crate::events::Action;

/// Rectangular hit-test area in terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
///
/// Components create these during render to define clickable/hoverable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging).
    pub id: &'static str,

    /// The bounds of this interactive region.
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable).
    pub on_click: Option<Action>,

    /// Action to dispatch when the pointer moves over the region.
    pub on_hover: Option<Action>,

    /// Priority for overlapping regions (higher = checked first).
    /// Popup rows sit above field lines, badges and the clear affordance
    /// above their container.
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region.
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_hover: None,
            priority: 0,
        }
    }

    /// Attach a hover action (builder pattern).
    pub fn with_hover(mut self, action: Action) -> Self {
        self.on_hover = Some(action);
        self
    }

    /// Set the priority (builder pattern).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render).
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region.
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Find the action to dispatch for a click at (x, y).
    ///
    /// Returns the action from the highest-priority region that contains
    /// the point and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_click)
    }

    /// Find the action to dispatch for pointer movement at (x, y).
    pub fn handle_hover(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_hover)
    }

    fn best_match(
        &self,
        x: u16,
        y: u16,
        pick: impl Fn(&InteractiveRegion) -> Option<Action>,
    ) -> Action {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && pick(r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .and_then(|r| pick(r))
            .unwrap_or(Action::None)
    }
}
