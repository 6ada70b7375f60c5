use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ScatterChart;
use crate::core::{ContainerSize, DatasetSource, ScreenPoint};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

// GTK reports discrete wheel steps as +-1.0; the chart expects DOM-style
// delta units.
const WHEEL_DELTA_UNITS_PER_STEP: f64 = 120.0;

pub type SharedScatterChart = Rc<RefCell<ScatterChart<CairoRenderer>>>;

/// Hosts a scatter chart inside a `gtk::DrawingArea`.
///
/// The adapter wires widget resizes, wheel zoom, drag panning and mark
/// clicks into the chart, and redraws through the widget's cairo context.
pub struct GtkScatterAdapter {
    chart: SharedScatterChart,
    drawing_area: gtk::DrawingArea,
}

impl GtkScatterAdapter {
    #[must_use]
    pub fn new(chart: ScatterChart<CairoRenderer>) -> Self {
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_focusable(true);

        attach_draw(&drawing_area, Rc::clone(&chart));
        attach_resize(&drawing_area, Rc::clone(&chart));
        attach_interactions(&drawing_area, Rc::clone(&chart));

        Self {
            chart,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedScatterChart {
        Rc::clone(&self.chart)
    }

    pub fn load_json(&self, payload: &str) -> ChartResult<()> {
        self.chart.borrow_mut().load_json(payload)?;
        self.drawing_area.queue_draw();
        Ok(())
    }

    pub fn populate(&self, source: &dyn DatasetSource) -> ChartResult<()> {
        self.chart.borrow_mut().populate(source)?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}

fn attach_draw(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(mut chart) = chart.try_borrow_mut() else {
            return;
        };
        if let Err(err) = chart.render_on_cairo_context(context) {
            warn!(error = %err, "scatter draw failed");
        }
    });
}

fn attach_resize(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    drawing_area.connect_resize(move |widget, width, height| {
        let viewport_height = widget
            .root()
            .map(|root| root.height())
            .filter(|root_height| *root_height > 0)
            .unwrap_or(height);
        let container = ContainerSize::new(f64::from(width), f64::from(viewport_height));
        if let Ok(mut chart) = chart.try_borrow_mut() {
            if let Err(err) = chart.resize(container) {
                warn!(error = %err, "scatter resize failed");
            }
        }
        widget.queue_draw();
    });
}

fn attach_interactions(drawing_area: &gtk::DrawingArea, chart: SharedScatterChart) {
    let pointer = Rc::new(Cell::new(ScreenPoint::new(0.0, 0.0)));

    let motion = gtk::EventControllerMotion::new();
    {
        let pointer = Rc::clone(&pointer);
        motion.connect_motion(move |_, x, y| {
            pointer.set(ScreenPoint::new(x, y));
        });
    }
    drawing_area.add_controller(motion);

    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        let pointer = Rc::clone(&pointer);
        scroll.connect_scroll(move |_, _dx, dy| {
            if dy.abs() <= f64::EPSILON {
                return gtk::glib::Propagation::Proceed;
            }
            if let Ok(mut chart) = chart.try_borrow_mut() {
                match chart.wheel_zoom(dy * WHEEL_DELTA_UNITS_PER_STEP, pointer.get()) {
                    Ok(true) => drawing_area.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "wheel zoom rejected"),
                }
            }
            gtk::glib::Propagation::Stop
        });
    }
    drawing_area.add_controller(scroll);

    let drag = gtk::GestureDrag::new();
    {
        let chart = Rc::clone(&chart);
        drag.connect_drag_begin(move |_, start_x, start_y| {
            if let Ok(mut chart) = chart.try_borrow_mut() {
                chart.pan_start(ScreenPoint::new(start_x, start_y));
            }
        });
    }
    {
        let chart = Rc::clone(&chart);
        let drawing_area = drawing_area.clone();
        let pointer = Rc::clone(&pointer);
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let current = ScreenPoint::new(start_x + offset_x, start_y + offset_y);
            pointer.set(current);
            if let Ok(mut chart) = chart.try_borrow_mut() {
                match chart.pan_move(current) {
                    Ok(true) => drawing_area.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "pan rejected"),
                }
            }
        });
    }
    {
        let chart = Rc::clone(&chart);
        drag.connect_drag_end(move |_, _, _| {
            if let Ok(mut chart) = chart.try_borrow_mut() {
                chart.pan_end();
            }
        });
    }
    drawing_area.add_controller(drag);

    // `released` only fires when the press did not turn into a drag.
    let click = gtk::GestureClick::new();
    {
        let drawing_area = drawing_area.clone();
        click.connect_released(move |_, n_press, x, y| {
            if n_press != 1 {
                return;
            }
            if let Ok(mut chart) = chart.try_borrow_mut() {
                match chart.click_at(ScreenPoint::new(x, y)) {
                    Ok(Some(_)) => drawing_area.queue_draw(),
                    Ok(None) => {}
                    Err(err) => warn!(error = %err, "mark click rejected"),
                }
            }
        });
    }
    drawing_area.add_controller(click);
}
