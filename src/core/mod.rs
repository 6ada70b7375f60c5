pub mod dataset;
pub mod domain;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod types;

pub use dataset::{
    CleaningSpec, DatasetSource, DerivedField, FileDatasetSource, LoadError, StaticDatasetSource,
    load_records, parse_records,
};
pub use domain::{AxisDomains, DEFAULT_DOMAIN_PADDING, Domain, compute_domains, field_extent};
pub use record::{AxisSelector, Record, RecordSet};
pub use scale::LinearScale;
pub use ticks::{TickValues, format_tick, tick_increment, tick_precision, tick_values};
pub use types::{ContainerSize, Dimensions, Margins, ScreenPoint, Viewport};
