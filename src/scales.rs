use crate::data_types::RenderableSeriesSet;
use crate::utils::date_formatter::{determine_date_format, format_elapsed, format_wall_clock};
use chrono::{DateTime, Utc};
use d3rs::scale::{LinearScale, Scale as D3Scale};

/// How tick values on an axis are turned into labels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AxisFormat {
    /// Two decimals, for the value axis.
    #[default]
    Numeric,
    /// Seconds since the chart started, e.g. `1:05`.
    Elapsed,
    /// Elapsed seconds shifted onto the wall clock of the chart's start.
    WallClock(DateTime<Utc>),
}

/// Half-width given to a window whose values are all equal.
const FLAT_DOMAIN_PAD: f64 = 0.5;

#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear((lo, hi): (f64, f64), range: (f32, f32)) -> Self {
        let (lo, hi) = if hi - lo == 0.0 {
            (lo - FLAT_DOMAIN_PAD, hi + FLAT_DOMAIN_PAD)
        } else {
            (lo, hi)
        };
        let scale = LinearScale::new()
            .domain(lo, hi)
            .range(range.0 as f64, range.1 as f64);
        Self { scale, range }
    }

    /// Scale over every value in `set`, `None` while it holds no values.
    pub fn for_values(set: &RenderableSeriesSet, range: (f32, f32)) -> Option<Self> {
        set.value_range().map(|domain| Self::new_linear(domain, range))
    }

    /// Scale over the elapsed seconds of `set`'s window.
    pub fn for_time(set: &RenderableSeriesSet, range: (f32, f32)) -> Option<Self> {
        set.time_span()
            .map(|(first, last)| Self::new_linear((first as f64, last as f64), range))
    }

    /// Position of `value` in the range. Non-finite values, such as a NaN
    /// sample, land on the start of the range.
    pub fn map(&self, value: f64) -> f32 {
        let s = &self.scale;
        Some(s.scale(value) as f32)
            .filter(|pos| pos.is_finite())
            .unwrap_or(self.range.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        let s = &self.scale;
        (s.domain().0, s.domain().1)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let s = &self.scale;
        s.ticks(count)
    }

    pub fn format_tick(&self, value: f64, format: AxisFormat) -> String {
        match format {
            AxisFormat::Numeric => format!("{:.2}", value),
            AxisFormat::Elapsed => format_elapsed(value.max(0.0) as u64),
            AxisFormat::WallClock(started_at) => {
                let (d_min, d_max) = self.domain();
                let fmt = determine_date_format((d_max - d_min).abs());
                format_wall_clock(started_at, value.max(0.0) as u64, fmt)
            }
        }
    }

    /// Ticks paired with their labels.
    pub fn labelled_ticks(&self, count: usize, format: AxisFormat) -> Vec<(f64, String)> {
        self.ticks(count)
            .into_iter()
            .map(|t| (t, self.format_tick(t, format)))
            .collect()
    }
}
