use tracing::{debug, trace};

use crate::core::Record;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipContent, TooltipPanel, TooltipRow};

use super::chart_config::ScatterChartConfig;
use super::chart_state::ChartState;

const AUTHOR_SEPARATOR: &str = ", ";

/// Click on the mark of `record_id`: hides a visible panel (whichever record
/// it shows), otherwise shows this record's panel at its mark.
///
/// Returns whether a panel is visible afterwards.
pub(super) fn on_mark_clicked(state: &mut ChartState, record_id: &str) -> ChartResult<bool> {
    let record = state
        .records
        .get(record_id)
        .ok_or_else(|| ChartError::UnknownRecord(record_id.to_owned()))?;
    let mark = state
        .marks
        .get(record_id)
        .ok_or_else(|| ChartError::UnknownRecord(record_id.to_owned()))?;

    let panel = TooltipPanel {
        record_id: record.id.clone(),
        anchor: mark.position,
        content: build_content(&state.config, record),
    };
    let visible = state.tooltip.toggle(panel);
    debug!(record_id, visible, "tooltip toggled");
    Ok(visible)
}

/// Re-anchors a visible panel at its mark's current position.
///
/// The panel is hidden if its record no longer has a mark.
pub(super) fn refresh_if_visible(state: &mut ChartState) {
    let Some(record_id) = state.tooltip.record_id().map(str::to_owned) else {
        return;
    };

    match (state.records.get(&record_id), state.marks.get(&record_id)) {
        (Some(record), Some(mark)) => {
            let panel = TooltipPanel {
                record_id: record.id.clone(),
                anchor: mark.position,
                content: build_content(&state.config, record),
            };
            trace!(
                record_id = %panel.record_id,
                x = panel.anchor.x,
                y = panel.anchor.y,
                "tooltip re-anchored"
            );
            state.tooltip.show(panel);
        }
        _ => {
            debug!(%record_id, "tooltip record vanished; hiding");
            state.tooltip.hide();
        }
    }
}

pub(super) fn hide(state: &mut ChartState) {
    state.tooltip.hide();
}

/// Detail panel content: title with link, authors, and the configured
/// numeric fields.
pub(super) fn build_content(config: &ScatterChartConfig, record: &Record) -> TooltipContent {
    let mut rows = Vec::with_capacity(2 + config.tooltip_fields.len().max(2));
    rows.push(TooltipRow::new("Title", record.title.clone()));
    rows.push(TooltipRow::new(
        "Author",
        record.authors.join(AUTHOR_SEPARATOR),
    ));
    for field in config.effective_tooltip_fields() {
        let value = record
            .field(&field.field)
            .map(format_field_value)
            .unwrap_or_default();
        rows.push(TooltipRow::new(field.label, value));
    }

    TooltipContent {
        title: record.title.clone(),
        url: record.url.clone(),
        rows,
    }
}

fn format_field_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::build_content;
    use crate::api::ScatterChartConfig;
    use crate::core::Record;

    #[test]
    fn books_panel_lists_title_authors_rank_and_pages() {
        let record = Record::new("X1", "Some Book", "https://example.test/X1")
            .with_authors(["Ann", "Bob"])
            .with_field("pages", 100.0)
            .with_field("sales_rank", 10.0)
            .with_field("log_sales_rank", 1.0);
        let content = build_content(&ScatterChartConfig::books("#scatter"), &record);
        let rows: Vec<(&str, &str)> = content
            .rows
            .iter()
            .map(|row| (row.label.as_str(), row.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Title", "Some Book"),
                ("Author", "Ann, Bob"),
                ("Sales Rank", "10"),
                ("Pages", "100"),
            ]
        );
        assert_eq!(content.url, "https://example.test/X1");
    }

    #[test]
    fn default_fields_fall_back_to_axes() {
        let config = ScatterChartConfig::books("#scatter").with_tooltip_fields(Vec::new());
        let record = Record::new("X1", "t", "u")
            .with_field("pages", 250.5)
            .with_field("log_sales_rank", 2.0);
        let content = build_content(&config, &record);
        assert_eq!(content.rows[2].label, "Sales Rank, log₁₀");
        assert_eq!(content.rows[2].value, "2");
        assert_eq!(content.rows[3].value, "250.5");
    }
}
