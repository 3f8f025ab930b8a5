pub mod data;
pub mod layout;
pub mod scale;
pub mod types;

pub use data::{Bar, BarSeries, DashboardData, LinePoint, LineSeries, normalize, parse_timestamp};
pub use layout::ChartLayout;
pub use scale::{BandScale, ColorScale, TimeScale, ValueScale};
pub use types::{DateRange, Padding, RawSample, RawSeriesMap, SeriesDescriptor, Viewport};
