use serde::{Deserialize, Serialize};

use crate::core::record::RecordSet;
use crate::error::{ChartError, ChartResult};

/// Fraction of the raw span added on each side of an axis domain.
pub const DEFAULT_DOMAIN_PADDING: f64 = 0.125;

/// Closed data-space interval represented by one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "domain bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(
                "domain min must be <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Extends both sides by `fraction * span`.
    #[must_use]
    pub fn padded(self, fraction: f64) -> Self {
        let pad = fraction * self.span();
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Padded x and y domains for one record collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomains {
    pub x: Domain,
    pub y: Domain,
}

/// Raw `[min, max]` of one numeric field over the collection.
pub fn field_extent(records: &RecordSet, field: &str) -> ChartResult<Domain> {
    let mut extent: Option<(f64, f64)> = None;
    for record in records.iter() {
        let value = record.require_field(field)?;
        extent = Some(match extent {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    let (min, max) = extent.ok_or(ChartError::EmptyDataset)?;
    Domain::new(min, max)
}

/// Computes padded domains for the selected x and y fields.
///
/// A collection where every value of a field is equal yields a zero-width
/// domain for that axis; this is accepted and maps all marks onto a single
/// pixel column or row.
pub fn compute_domains(
    records: &RecordSet,
    x_field: &str,
    y_field: &str,
    padding_fraction: f64,
) -> ChartResult<AxisDomains> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    if !padding_fraction.is_finite() || padding_fraction < 0.0 {
        return Err(ChartError::InvalidConfig(
            "domain padding fraction must be finite and >= 0".to_owned(),
        ));
    }

    let x = field_extent(records, x_field)?.padded(padding_fraction);
    let y = field_extent(records, y_field)?.padded(padding_fraction);
    Ok(AxisDomains { x, y })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{DEFAULT_DOMAIN_PADDING, compute_domains};
    use crate::core::record::{Record, RecordSet};
    use crate::error::ChartError;

    fn book(id: &str, pages: f64, sales_rank: f64) -> Record {
        Record::new(id, id, format!("https://example.test/{id}"))
            .with_field("pages", pages)
            .with_field("sales_rank", sales_rank)
            .with_field("log_sales_rank", sales_rank.log10())
    }

    #[test]
    fn two_book_scenario_pads_both_axes() {
        let records =
            RecordSet::new(vec![book("X1", 100.0, 10.0), book("X2", 400.0, 1000.0)]).expect("set");
        let domains = compute_domains(&records, "pages", "log_sales_rank", DEFAULT_DOMAIN_PADDING)
            .expect("domains");
        assert_relative_eq!(domains.x.min, 62.5);
        assert_relative_eq!(domains.x.max, 437.5);
        assert_relative_eq!(domains.y.min, 0.75, epsilon = 1e-12);
        assert_relative_eq!(domains.y.max, 3.25, epsilon = 1e-12);
    }

    #[test]
    fn single_value_field_yields_zero_width_domain() {
        let records =
            RecordSet::new(vec![book("A", 250.0, 5.0), book("B", 250.0, 50.0)]).expect("set");
        let domains =
            compute_domains(&records, "pages", "sales_rank", DEFAULT_DOMAIN_PADDING).expect("ok");
        assert!(domains.x.is_degenerate());
        assert_eq!(domains.x.min, 250.0);
    }

    #[test]
    fn empty_collection_is_fatal() {
        let records = RecordSet::default();
        let err = compute_domains(&records, "pages", "sales_rank", DEFAULT_DOMAIN_PADDING)
            .expect_err("empty must fail");
        assert!(matches!(err, ChartError::EmptyDataset));
    }

    #[test]
    fn missing_axis_field_names_the_record() {
        let records = RecordSet::new(vec![Record::new("A", "a", "u").with_field("pages", 1.0)])
            .expect("set");
        let err = compute_domains(&records, "pages", "sales_rank", DEFAULT_DOMAIN_PADDING)
            .expect_err("missing field must fail");
        assert!(matches!(
            err,
            ChartError::MissingField { record_id, field } if record_id == "A" && field == "sales_rank"
        ));
    }
}
