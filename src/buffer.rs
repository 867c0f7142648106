//! Rolling window of named series sharing one time axis.

use crate::clock::{Clock, SystemClock};
use crate::data_types::{
    ChartOptions, MissingKeyPolicy, RenderableSeriesSet, Sample, SeriesColumn,
};
use crate::error::{ChartError, ChartResult};
use crate::theme::HexColor;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};
use tracing::trace;

struct WindowedSeries {
    key: String,
    values: VecDeque<Option<f64>>,
}

/// Keeps the last `window_size` samples of every series.
///
/// Every series is exactly as long as the time axis after each [`push`]:
/// keys first seen mid-stream are back-filled with gaps, and known keys
/// missing from a sample are filled according to the [`MissingKeyPolicy`].
/// Series keep their first-seen position for the buffer's lifetime, even once
/// their whole window is gaps, so a color assigned by position stays put.
///
/// [`push`]: WindowedSeriesBuffer::push
pub struct WindowedSeriesBuffer {
    window_size: usize,
    missing_keys: MissingKeyPolicy,
    time: VecDeque<u64>,
    series: Vec<WindowedSeries>,
    index: HashMap<String, usize>,
    clock: Box<dyn Clock>,
    started_at: DateTime<Utc>,
}

impl WindowedSeriesBuffer {
    pub fn new(window_size: usize, missing_keys: MissingKeyPolicy) -> ChartResult<Self> {
        Self::with_clock(window_size, missing_keys, SystemClock::new())
    }

    pub fn with_clock(
        window_size: usize,
        missing_keys: MissingKeyPolicy,
        clock: impl Clock + 'static,
    ) -> ChartResult<Self> {
        if window_size == 0 {
            return Err(ChartError::Configuration(
                "window size must be at least 1".into(),
            ));
        }
        Ok(Self {
            window_size,
            missing_keys,
            time: VecDeque::with_capacity(window_size + 1),
            series: Vec::new(),
            index: HashMap::new(),
            clock: Box::new(clock),
            started_at: Utc::now(),
        })
    }

    pub fn from_options(options: &ChartOptions) -> ChartResult<Self> {
        Self::new(options.window_size, options.missing_keys)
    }

    /// Appends one tick: a value per series, then the elapsed time, then
    /// evicts the oldest tick if the window overflowed.
    pub fn push(&mut self, sample: &Sample) {
        let filled = self.time.len();

        for series in &mut self.series {
            let value = match sample.get(&series.key) {
                Some(v) => Some(*v),
                None => match self.missing_keys {
                    MissingKeyPolicy::Gap => None,
                    MissingKeyPolicy::HoldLast => series.values.back().copied().flatten(),
                },
            };
            series.values.push_back(value);
        }

        for (key, value) in sample {
            if self.index.contains_key(key) {
                continue;
            }
            let mut values = VecDeque::with_capacity(self.window_size + 1);
            values.extend(std::iter::repeat(None).take(filled));
            values.push_back(Some(*value));
            self.index.insert(key.clone(), self.series.len());
            self.series.push(WindowedSeries {
                key: key.clone(),
                values,
            });
        }

        self.time.push_back(self.clock.elapsed_secs());
        self.evict();
    }

    fn evict(&mut self) {
        while self.time.len() > self.window_size {
            let t = self.time.pop_front();
            for series in &mut self.series {
                series.values.pop_front();
            }
            trace!(?t, "evicted oldest tick");
        }
    }

    /// Copies the window out for a renderer, with `colors` in series order.
    pub fn snapshot(&self, colors: Vec<HexColor>) -> RenderableSeriesSet {
        RenderableSeriesSet {
            time: self.time.iter().copied().collect(),
            columns: self
                .series
                .iter()
                .map(|s| SeriesColumn::new(s.key.clone(), s.values.iter().copied().collect()))
                .collect(),
            colors,
        }
    }

    /// Number of ticks currently in the window.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn missing_keys(&self) -> MissingKeyPolicy {
        self.missing_keys
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn time_axis(&self) -> Vec<u64> {
        self.time.iter().copied().collect()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.key.as_str())
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series(&self, key: &str) -> Option<Vec<Option<f64>>> {
        let idx = *self.index.get(key)?;
        Some(self.series[idx].values.iter().copied().collect())
    }

    /// Most recent non-gap value of `key`.
    pub fn latest(&self, key: &str) -> Option<f64> {
        let idx = *self.index.get(key)?;
        self.series[idx].values.iter().rev().find_map(|v| *v)
    }

    /// Drops every series and the time axis. The clock keeps running.
    pub fn clear(&mut self) {
        self.time.clear();
        self.series.clear();
        self.index.clear();
    }
}

impl std::fmt::Debug for WindowedSeriesBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowedSeriesBuffer")
            .field("window_size", &self.window_size)
            .field("missing_keys", &self.missing_keys)
            .field("len", &self.time.len())
            .field("series", &self.series.len())
            .finish()
    }
}
