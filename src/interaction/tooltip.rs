use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// One label/value line of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

impl TooltipRow {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Detail panel contents for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub url: String,
    pub rows: Vec<TooltipRow>,
}

/// The single visible panel: owning record, anchor and contents.
///
/// `anchor` is the owning mark's center in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPanel {
    pub record_id: String,
    pub anchor: ScreenPoint,
    pub content: TooltipContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(TooltipPanel),
}

impl TooltipState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    #[must_use]
    pub fn panel(&self) -> Option<&TooltipPanel> {
        match self {
            Self::Visible(panel) => Some(panel),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        self.panel().map(|panel| panel.record_id.as_str())
    }

    pub fn show(&mut self, panel: TooltipPanel) {
        *self = Self::Visible(panel);
    }

    pub fn hide(&mut self) {
        *self = Self::Hidden;
    }

    /// Toggle on click: a visible panel is hidden whichever record it shows;
    /// otherwise `panel` becomes visible. Returns the new visibility.
    pub fn toggle(&mut self, panel: TooltipPanel) -> bool {
        if self.is_visible() {
            self.hide();
            false
        } else {
            self.show(panel);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TooltipContent, TooltipPanel, TooltipState};
    use crate::core::ScreenPoint;

    fn panel(id: &str) -> TooltipPanel {
        TooltipPanel {
            record_id: id.to_owned(),
            anchor: ScreenPoint::new(10.0, 20.0),
            content: TooltipContent {
                title: id.to_owned(),
                url: String::new(),
                rows: Vec::new(),
            },
        }
    }

    #[test]
    fn toggle_alternates_visibility() {
        let mut state = TooltipState::default();
        assert!(state.toggle(panel("A")));
        assert_eq!(state.record_id(), Some("A"));
        assert!(!state.toggle(panel("B")));
        assert_eq!(state, TooltipState::Hidden);
    }
}
