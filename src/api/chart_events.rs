use serde::{Deserialize, Serialize};

use crate::core::{ContainerSize, ScreenPoint};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ScatterChart;

/// Host event routed into the chart.
///
/// Points are surface coordinates. Lets adapters and scripted sessions feed
/// the chart through a single entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChartEvent {
    Resize { container: ContainerSize },
    Wheel { delta_y: f64, anchor: ScreenPoint },
    Pinch { scale_factor: f64, anchor: ScreenPoint },
    PanStart { pointer: ScreenPoint },
    PanMove { pointer: ScreenPoint },
    PanEnd,
    Click { point: ScreenPoint },
    ClickMark { record_id: String },
    HideTooltip,
}

impl<R: Renderer> ScatterChart<R> {
    /// Applies one event. Returns whether anything visible may have changed.
    pub fn dispatch(&mut self, event: ChartEvent) -> ChartResult<bool> {
        match event {
            ChartEvent::Resize { container } => {
                self.resize(container)?;
                Ok(true)
            }
            ChartEvent::Wheel { delta_y, anchor } => self.wheel_zoom(delta_y, anchor),
            ChartEvent::Pinch {
                scale_factor,
                anchor,
            } => self.pinch_zoom(scale_factor, anchor),
            ChartEvent::PanStart { pointer } => {
                self.pan_start(pointer);
                Ok(false)
            }
            ChartEvent::PanMove { pointer } => self.pan_move(pointer),
            ChartEvent::PanEnd => {
                self.pan_end();
                Ok(false)
            }
            ChartEvent::Click { point } => Ok(self.click_at(point)?.is_some()),
            ChartEvent::ClickMark { record_id } => {
                self.click_mark(&record_id)?;
                Ok(true)
            }
            ChartEvent::HideTooltip => {
                let was_visible = self.tooltip().is_visible();
                self.hide_tooltip();
                Ok(was_visible)
            }
        }
    }

    /// Applies events in order, stopping at the first error.
    pub fn dispatch_all<I>(&mut self, events: I) -> ChartResult<bool>
    where
        I: IntoIterator<Item = ChartEvent>,
    {
        let mut changed = false;
        for event in events {
            changed |= self.dispatch(event)?;
        }
        Ok(changed)
    }
}
