use trk_math::DVec2;

/// Input from the interactive front end. Events carry no mutation logic.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A control point was placed in the authoring plane.
    ControlPointAdded { position: DVec2 },
    /// Boundary generation was switched on. It stays on for the session.
    BoundaryGenerationEnabled,
    /// The export key went down.
    ExportPressed,
    /// The export key went up.
    ExportReleased,
}

/// Turns a held signal into one pending action per released-to-held transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    held: bool,
    pending: bool,
}

impl EdgeTrigger {
    /// Mark the signal held. Only a transition from released arms the trigger.
    pub fn press(&mut self) {
        if !self.held {
            self.held = true;
            self.pending = true;
        }
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending edge, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
