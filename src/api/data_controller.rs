use tracing::{debug, warn};

use crate::core::{DatasetSource, Record, RecordSet, compute_domains, load_records, parse_records};
use crate::error::ChartResult;
use crate::interaction::ViewTransform;

use super::chart_state::{ChartState, PlotState};
use super::mark_renderer::MarkLayer;
use super::scale_manager::{build_scales, compute_dimensions};

/// Replaces the loaded dataset and rebuilds the chart from scratch.
///
/// Every fallible step runs before the previous dataset is torn down, so an
/// error leaves the chart exactly as it was.
pub(super) fn load(state: &mut ChartState, records: Vec<Record>) -> ChartResult<()> {
    let records = RecordSet::new(records)?;
    let x_field = state.config.x_axis.field.clone();
    let y_field = state.config.y_axis.field.clone();
    let domains = compute_domains(&records, &x_field, &y_field, state.config.domain_padding)?;

    let dimensions = compute_dimensions(state.container, state.config.layout);
    let scales = build_scales(
        dimensions,
        domains,
        state.config.tick_count,
        state.config.nice_domains,
    )?;
    let mut marks = MarkLayer::default();
    marks.sync(&records, &x_field, &y_field, &scales, ViewTransform::IDENTITY)?;

    state.tear_down();

    let (x_axis, y_axis) = scales.render_axes(ViewTransform::IDENTITY);
    state.dimensions = dimensions;
    state.plot = Some(PlotState {
        domains,
        scales,
        x_axis,
        y_axis,
    });
    state.marks = marks;
    state.records = records;
    state.zoom.rebind(scales);

    debug!(
        records = state.records.len(),
        x_domain_min = domains.x.min,
        x_domain_max = domains.x.max,
        y_domain_min = domains.y.min,
        y_domain_max = domains.y.max,
        "chart populated"
    );
    Ok(())
}

pub(super) fn load_json(state: &mut ChartState, payload: &str) -> ChartResult<()> {
    let records = parse_records(payload, &state.config.cleaning).inspect_err(|err| {
        warn!(error = %err, "rejected dataset payload");
    })?;
    load(state, records)
}

pub(super) fn populate(state: &mut ChartState, source: &dyn DatasetSource) -> ChartResult<()> {
    let records = load_records(source, &state.config.cleaning)?;
    load(state, records)
}
