pub mod interpolate;
pub mod types;

pub use interpolate::densify_linear;
pub use types::{SeriesPoint, TimeRange, datetime_to_unix_seconds, decimal_to_f64};
