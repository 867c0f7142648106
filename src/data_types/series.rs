use crate::theme::HexColor;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use indexmap::IndexMap;

/// One tick of named values, as produced by a chart's transform callback.
/// Iteration follows insertion order, which decides the order of new series.
pub type Sample = IndexMap<String, f64>;

/// Key of the time axis column in the wire form.
pub const TIME_AXIS_KEY: &str = "x";

/// A named series aligned to the time axis. `None` marks a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesColumn {
    pub key: String,
    pub values: Vec<Option<f64>>,
}

impl SeriesColumn {
    pub fn new(key: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent non-gap value.
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }

    /// (min, max) over the non-gap, finite values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

// Serialised column-first: `[key, v0, v1, ...]`.
impl Serialize for SeriesColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.key)?;
        for v in &self.values {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

struct TimeColumn<'a>(&'a [u64]);

impl Serialize for TimeColumn<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len() + 1))?;
        seq.serialize_element(TIME_AXIS_KEY)?;
        for t in self.0 {
            seq.serialize_element(t)?;
        }
        seq.end()
    }
}

struct Columns<'a>(&'a RenderableSeriesSet);

impl Serialize for Columns<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let set = self.0;
        let mut seq = serializer.serialize_seq(Some(set.columns.len() + 1))?;
        seq.serialize_element(&TimeColumn(&set.time))?;
        for column in &set.columns {
            seq.serialize_element(column)?;
        }
        seq.end()
    }
}

/// Everything a renderer needs to redraw: the time axis, the series aligned
/// to it, and the colors assigned in series order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderableSeriesSet {
    /// Elapsed seconds since the buffer was created.
    pub time: Vec<u64>,
    pub columns: Vec<SeriesColumn>,
    pub colors: Vec<HexColor>,
}

impl RenderableSeriesSet {
    pub fn column(&self, key: &str) -> Option<&SeriesColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Color of the series at `index`, if one was assigned.
    pub fn color_for(&self, index: usize) -> Option<HexColor> {
        self.colors.get(index).copied()
    }

    /// (min, max) over every series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.columns
            .iter()
            .filter_map(SeriesColumn::value_range)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }

    /// (first, last) elapsed seconds in the window.
    pub fn time_span(&self) -> Option<(u64, u64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for RenderableSeriesSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RenderableSeriesSet", 3)?;
        state.serialize_field("x", TIME_AXIS_KEY)?;
        state.serialize_field("columns", &Columns(self))?;
        state.serialize_field("colors", &self.colors)?;
        state.end()
    }
}
