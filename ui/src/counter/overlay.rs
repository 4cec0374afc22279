//! Which overlay panel is shown, including its enter/exit animation phases.
//!
//! Every transition bumps `generation`; animation timers carry the generation
//! they were started with so a late completion cannot close or open the
//! wrong panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Info,
    Settings,
    Reset,
}

impl OverlayKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            OverlayKind::Info => "overlay--info",
            OverlayKind::Settings => "overlay--settings",
            OverlayKind::Reset => "overlay--reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Entering(OverlayKind),
    Open(OverlayKind),
    Exiting(OverlayKind),
}

/// Animation durations awaited before the matching completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTiming {
    pub enter_ms: u64,
    pub exit_ms: u64,
}

impl Default for OverlayTiming {
    fn default() -> Self {
        Self {
            enter_ms: 320,
            exit_ms: 240,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub phase: OverlayPhase,
    pub generation: u64,
}

impl OverlayState {
    /// The overlay being drawn, in any phase but `Closed`.
    pub fn kind(&self) -> Option<OverlayKind> {
        match self.phase {
            OverlayPhase::Closed => None,
            OverlayPhase::Entering(kind) | OverlayPhase::Open(kind) | OverlayPhase::Exiting(kind) => {
                Some(kind)
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.phase == OverlayPhase::Closed
    }

    /// Start the entrance animation. Ignored unless closed.
    pub fn open(&mut self, kind: OverlayKind) -> Option<u64> {
        if !self.is_closed() {
            return None;
        }
        Some(self.advance(OverlayPhase::Entering(kind)))
    }

    /// Entrance animation finished.
    pub fn entered(&mut self, generation: u64) -> bool {
        match self.phase {
            OverlayPhase::Entering(kind) if generation == self.generation => {
                self.advance(OverlayPhase::Open(kind));
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation; the kind stays set until [`exit_complete`](Self::exit_complete).
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            OverlayPhase::Entering(kind) | OverlayPhase::Open(kind) => {
                Some(self.advance(OverlayPhase::Exiting(kind)))
            }
            _ => None,
        }
    }

    pub fn exit_complete(&mut self, generation: u64) -> bool {
        match self.phase {
            OverlayPhase::Exiting(_) if generation == self.generation => {
                self.advance(OverlayPhase::Closed);
                true
            }
            _ => false,
        }
    }

    /// Class list for the overlay root; drives the CSS transitions.
    pub fn css_class(&self) -> String {
        let state = match self.phase {
            OverlayPhase::Closed => "overlay--closed",
            OverlayPhase::Entering(_) | OverlayPhase::Open(_) => "overlay--visible",
            OverlayPhase::Exiting(_) => "overlay--exiting",
        };
        match self.kind() {
            Some(kind) => format!("overlay {state} {}", kind.css_modifier()),
            None => format!("overlay {state}"),
        }
    }

    fn advance(&mut self, phase: OverlayPhase) -> u64 {
        self.phase = phase;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
