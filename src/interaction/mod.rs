mod tooltip;
mod view_transform;

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

pub use tooltip::{TooltipContent, TooltipPanel, TooltipRow, TooltipState};
pub use view_transform::{ScaleExtent, ViewTransform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer bookkeeping for drag-pan gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    last_pointer: Option<ScreenPoint>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            last_pointer: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn last_pointer(self) -> Option<ScreenPoint> {
        self.last_pointer
    }

    pub fn on_pan_start(&mut self, pointer: ScreenPoint) {
        self.mode = InteractionMode::Panning;
        self.last_pointer = Some(pointer);
    }

    /// Records a pointer move and returns the delta since the previous one.
    ///
    /// Returns `None` outside of a pan gesture.
    pub fn on_pan_move(&mut self, pointer: ScreenPoint) -> Option<(f64, f64)> {
        if self.mode != InteractionMode::Panning {
            return None;
        }
        let previous = self.last_pointer.replace(pointer)?;
        Some((pointer.x - previous.x, pointer.y - previous.y))
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.last_pointer = None;
    }
}
