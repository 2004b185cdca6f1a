use tracing::debug;

/// Pointer gesture state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PanState {
    #[default]
    Idle,
    /// A drag is in progress; `anchor_x` is the pointer x of the last
    /// accepted move (or of the press).
    Dragging { anchor_x: f64 },
}

/// Horizontal pan offset driven by pointer drags.
///
/// The offset never leaves `[-bound, bound]`. A move whose candidate offset
/// falls outside that range is dropped entirely and the anchor stays put, so
/// the pattern sticks at the edge instead of lagging behind the pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanSession {
    state: PanState,
    offset: f64,
}

impl PanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PanState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.state = PanState::Dragging { anchor_x: x };
    }

    /// Feed a pointer move. Returns `true` when the offset was committed.
    pub fn pointer_move(&mut self, x: f64, bound: f64) -> bool {
        let PanState::Dragging { anchor_x } = self.state else {
            return false;
        };

        let delta = x - anchor_x;
        let candidate = self.offset + delta;
        if candidate >= -bound && candidate <= bound {
            debug!(offset = candidate, delta, bound, "Pan committed");
            self.offset = candidate;
            self.state = PanState::Dragging { anchor_x: x };
            true
        } else {
            false
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = PanState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.state = PanState::Idle;
    }

    /// Pull the offset back inside `[-bound, bound]` after the bound shrank.
    /// A non-finite or negative bound leaves the offset alone. Returns `true`
    /// if the offset moved.
    pub fn clamp_to(&mut self, bound: f64) -> bool {
        if !(bound.is_finite() && bound >= 0.0) {
            return false;
        }
        let clamped = self.offset.clamp(-bound, bound);
        if clamped == self.offset {
            return false;
        }
        debug!(from = self.offset, to = clamped, bound, "Pan clamped");
        self.offset = clamped;
        true
    }

    /// Return to the rest position and end any drag.
    pub fn reset(&mut self) {
        self.state = PanState::Idle;
        self.offset = 0.0;
    }
}
