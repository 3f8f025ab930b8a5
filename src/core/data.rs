use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::core::types::{DateRange, RawSample, RawSeriesMap, SeriesDescriptor};
use crate::error::{ChartError, ChartResult};

/// One derived line sample with its band boundary.
///
/// `next_date` is the timestamp of the following non-null sample, or the
/// global range end for the trailing point.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub value: f64,
    pub date: DateTime<Utc>,
    pub next_date: DateTime<Utc>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub key: String,
    pub name: String,
    pub points: Vec<LinePoint>,
}

/// One discrete interval of a bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub key: String,
    pub value: Option<f64>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Bar {
    /// Intervals with a positive value are "on" and get drawn; null counts as off.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.value.is_some_and(|value| value > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub key: String,
    pub name: String,
    pub bars: Vec<Bar>,
}

/// Fully normalized model, rebuilt wholesale on every render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub line_series: Vec<LineSeries>,
    pub bar_series: Vec<BarSeries>,
    pub date_range: DateRange,
}

impl DashboardData {
    /// Largest value across all line series, or `None` when every series is empty.
    #[must_use]
    pub fn max_line_value(&self) -> Option<f64> {
        self.line_series
            .iter()
            .flat_map(|series| series.points.iter())
            .map(|point| point.value)
            .fold(None, |best, value| match best {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }
}

/// Parses an ISO-ish timestamp label as UTC.
///
/// Accepts RFC 3339 as well as the zone-less forms dashboards commonly feed
/// in (`2024-01-01T00:00`, `2024-01-01 00:00:00`, `2024-01-01`).
pub fn parse_timestamp(label: &str) -> ChartResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(label) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(label, pattern) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(ChartError::InvalidData(format!(
        "unparseable timestamp label `{label}`"
    )))
}

/// Derives the typed line/bar collections plus the shared date range.
///
/// Descriptors whose key has no entry in the raw map are skipped. The date
/// range covers the unfiltered union of all configured series so the axis
/// stays consistent regardless of per-series null filtering.
pub fn normalize(
    raw: &RawSeriesMap,
    line_descriptors: &[SeriesDescriptor],
    bar_descriptors: &[SeriesDescriptor],
) -> ChartResult<DashboardData> {
    let date_range = compute_date_range(raw, line_descriptors, bar_descriptors)?;

    let mut line_series = Vec::with_capacity(line_descriptors.len());
    for descriptor in line_descriptors {
        let Some(samples) = raw.get(&descriptor.key) else {
            debug!(key = %descriptor.key, "line series key absent from raw data, skipping");
            continue;
        };
        line_series.push(derive_line_series(descriptor, samples, date_range)?);
    }

    let mut bar_series = Vec::with_capacity(bar_descriptors.len());
    for descriptor in bar_descriptors {
        let Some(samples) = raw.get(&descriptor.key) else {
            debug!(key = %descriptor.key, "bar series key absent from raw data, skipping");
            continue;
        };
        bar_series.push(derive_bar_series(descriptor, samples, date_range)?);
    }

    Ok(DashboardData {
        line_series,
        bar_series,
        date_range,
    })
}

fn compute_date_range(
    raw: &RawSeriesMap,
    line_descriptors: &[SeriesDescriptor],
    bar_descriptors: &[SeriesDescriptor],
) -> ChartResult<DateRange> {
    let mut min: Option<DateTime<Utc>> = None;
    let mut max: Option<DateTime<Utc>> = None;

    for descriptor in line_descriptors.iter().chain(bar_descriptors) {
        let Some(samples) = raw.get(&descriptor.key) else {
            continue;
        };
        for sample in samples {
            let date = parse_timestamp(&sample.label)?;
            min = Some(min.map_or(date, |current| current.min(date)));
            max = Some(max.map_or(date, |current| current.max(date)));
        }
    }

    match (min, max) {
        (Some(start), Some(end)) => Ok(DateRange::new(start, end)),
        _ => Err(ChartError::InvalidData(
            "no samples available for any configured series".to_owned(),
        )),
    }
}

fn derive_line_series(
    descriptor: &SeriesDescriptor,
    samples: &[RawSample],
    date_range: DateRange,
) -> ChartResult<LineSeries> {
    // Nulls drop before pairing so a gap's band reaches the nearest non-null
    // neighbor instead of the raw sample grid.
    let mut present: Vec<(&RawSample, f64, DateTime<Utc>)> = Vec::with_capacity(samples.len());
    for sample in samples {
        if let Some(value) = sample.value {
            present.push((sample, value, parse_timestamp(&sample.label)?));
        }
    }

    let points = present
        .iter()
        .enumerate()
        .map(|(index, (sample, value, date))| LinePoint {
            value: *value,
            date: *date,
            next_date: present
                .get(index + 1)
                .map_or(date_range.end, |(_, _, next)| *next),
            label: sample.label.clone(),
        })
        .collect();

    Ok(LineSeries {
        key: descriptor.key.clone(),
        name: descriptor.name.clone(),
        points,
    })
}

fn derive_bar_series(
    descriptor: &SeriesDescriptor,
    samples: &[RawSample],
    date_range: DateRange,
) -> ChartResult<BarSeries> {
    let mut dates = Vec::with_capacity(samples.len());
    for sample in samples {
        dates.push(parse_timestamp(&sample.label)?);
    }

    let bars = samples
        .iter()
        .zip(dates.iter())
        .enumerate()
        .map(|(index, (sample, start_date))| Bar {
            key: descriptor.key.clone(),
            value: sample.value,
            start_date: *start_date,
            end_date: dates.get(index + 1).copied().unwrap_or(date_range.end),
        })
        .collect();

    Ok(BarSeries {
        key: descriptor.key.clone(),
        name: descriptor.name.clone(),
        bars,
    })
}
