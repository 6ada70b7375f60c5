use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Dimensions, Record, RecordSet, ScreenPoint};
use crate::error::ChartResult;
use crate::interaction::ViewTransform;

use super::scale_manager::ScaleSet;

/// One drawn glyph for one record.
///
/// `base` is the position under the base scales; `position` is where the
/// mark is displayed after the view transform. Both are plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub record_id: String,
    pub x_value: f64,
    pub y_value: f64,
    pub base: ScreenPoint,
    pub position: ScreenPoint,
}

/// Id-keyed set of marks, drawn in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkLayer {
    marks: Vec<Mark>,
    index: IndexMap<String, usize>,
}

impl MarkLayer {
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[must_use]
    pub fn get(&self, record_id: &str) -> Option<&Mark> {
        self.index.get(record_id).map(|&slot| &self.marks[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
        self.index.clear();
    }

    /// Creates or updates one mark per record and drops marks whose record
    /// is gone. Existing marks keep their draw order.
    pub fn sync(
        &mut self,
        records: &RecordSet,
        x_field: &str,
        y_field: &str,
        scales: &ScaleSet,
        transform: ViewTransform,
    ) -> ChartResult<()> {
        let mut next = Vec::with_capacity(records.len());
        let mut kept: Vec<(usize, Mark)> = Vec::new();
        let mut created = 0usize;

        for record in records.iter() {
            let mark = project_record(record, x_field, y_field, scales, transform)?;
            match self.index.get(&record.id) {
                Some(&slot) => kept.push((slot, mark)),
                None => {
                    created += 1;
                    next.push(mark);
                }
            }
        }

        kept.sort_by_key(|(slot, _)| *slot);
        let mut marks: Vec<Mark> = kept.into_iter().map(|(_, mark)| mark).collect();
        marks.extend(next);
        let index = marks
            .iter()
            .enumerate()
            .map(|(slot, mark)| (mark.record_id.clone(), slot))
            .collect();

        trace!(
            total = marks.len(),
            created,
            removed = self.marks.len().saturating_sub(marks.len() - created),
            "synced marks"
        );
        self.marks = marks;
        self.index = index;
        Ok(())
    }

    /// Recomputes every mark position from its stored data values.
    pub fn reposition(&mut self, scales: &ScaleSet, transform: ViewTransform) {
        let (x, y) = (scales.x(), scales.y());
        let place = |mark: &mut Mark| {
            mark.base = ScreenPoint::new(
                x.domain_to_pixel(mark.x_value),
                y.domain_to_pixel(mark.y_value),
            );
            mark.position = transform.apply(mark.base);
        };

        // Large datasets can spread the projection across threads; output is
        // identical to the sequential path.
        #[cfg(feature = "parallel-projection")]
        self.marks.par_iter_mut().for_each(place);

        #[cfg(not(feature = "parallel-projection"))]
        self.marks.iter_mut().for_each(place);
    }

    /// Topmost drawn mark whose circle of `radius` contains `point`.
    ///
    /// Marks culled from the plot area of `dimensions` are skipped.
    /// Overlapping hits resolve to the nearest center, then to the mark drawn
    /// last.
    #[must_use]
    pub fn hit_test(
        &self,
        point: ScreenPoint,
        radius: f64,
        dimensions: Dimensions,
    ) -> Option<&Mark> {
        let radius_sq = radius * radius;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| dimensions.plot_contains_within(mark.position, radius))
            .map(|(slot, mark)| (slot, mark, mark.position.distance_squared(point)))
            .filter(|(_, _, distance_sq)| *distance_sq <= radius_sq)
            .min_by_key(|(slot, _, distance_sq)| (OrderedFloat(*distance_sq), Reverse(*slot)))
            .map(|(_, mark, _)| mark)
    }
}

fn project_record(
    record: &Record,
    x_field: &str,
    y_field: &str,
    scales: &ScaleSet,
    transform: ViewTransform,
) -> ChartResult<Mark> {
    let x_value = record.require_field(x_field)?;
    let y_value = record.require_field(y_field)?;
    let base = ScreenPoint::new(
        scales.x().domain_to_pixel(x_value),
        scales.y().domain_to_pixel(y_value),
    );
    Ok(Mark {
        record_id: record.id.clone(),
        x_value,
        y_value,
        base,
        position: transform.apply(base),
    })
}
