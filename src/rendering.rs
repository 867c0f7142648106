// Renderers consuming the column set produced on every update

use crate::data_types::{LineSeries, PlotPoint, RenderableSeriesSet};
use eyre::{Result, WrapErr};
use gpui::Hsla;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// Receives the full window after every update and redraws from it.
pub trait SeriesRenderer {
    fn load(&mut self, set: &RenderableSeriesSet) -> Result<()>;
}

impl<R: SeriesRenderer + ?Sized> SeriesRenderer for Box<R> {
    fn load(&mut self, set: &RenderableSeriesSet) -> Result<()> {
        (**self).load(set)
    }
}

/// Keeps every loaded set. Clones share the history.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    loads: Arc<Mutex<Vec<RenderableSeriesSet>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().len()
    }

    pub fn last(&self) -> Option<RenderableSeriesSet> {
        self.loads.lock().last().cloned()
    }

    pub fn history(&self) -> Vec<RenderableSeriesSet> {
        self.loads.lock().clone()
    }
}

impl SeriesRenderer for RecordingRenderer {
    fn load(&mut self, set: &RenderableSeriesSet) -> Result<()> {
        self.loads.lock().push(set.clone());
        Ok(())
    }
}

#[derive(Serialize)]
struct MountedLoad<'a> {
    target: &'a str,
    #[serde(flatten)]
    data: &'a RenderableSeriesSet,
}

/// Writes one JSON document per load, one per line, for a chart hosted
/// outside the process (a web page polling a socket, a log file, ...).
pub struct JsonLinesRenderer<W: Write> {
    target: String,
    writer: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(target: impl Into<String>, writer: W) -> Self {
        Self {
            target: target.into(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SeriesRenderer for JsonLinesRenderer<W> {
    fn load(&mut self, set: &RenderableSeriesSet) -> Result<()> {
        let doc = MountedLoad {
            target: &self.target,
            data: set,
        };
        serde_json::to_writer(&mut self.writer, &doc).wrap_err("failed to encode series set")?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Flattens a set into drawable lines. Gaps break nothing, they are skipped;
/// series without an assigned color use `fallback`.
pub fn to_line_series(set: &RenderableSeriesSet, fallback: Hsla) -> Vec<LineSeries> {
    set.columns
        .iter()
        .enumerate()
        .map(|(i, column)| LineSeries {
            id: column.key.clone(),
            color: set.color_for(i).map(Hsla::from).unwrap_or(fallback),
            points: set
                .time
                .iter()
                .zip(&column.values)
                .filter_map(|(&t, v)| v.map(|y| PlotPoint { x: t as f64, y }))
                .collect(),
        })
        .collect()
}

/// Publishes line series for a GPUI view, which reads them through
/// [`LineSeriesRenderer::shared`] when it paints.
#[derive(Clone)]
pub struct LineSeriesRenderer {
    lines: Arc<RwLock<Vec<LineSeries>>>,
    fallback: Hsla,
}

impl LineSeriesRenderer {
    pub fn new(fallback: Hsla) -> Self {
        Self {
            lines: Arc::new(RwLock::new(Vec::new())),
            fallback,
        }
    }

    pub fn shared(&self) -> Arc<RwLock<Vec<LineSeries>>> {
        self.lines.clone()
    }

    pub fn lines(&self) -> Vec<LineSeries> {
        self.lines.read().clone()
    }
}

impl Default for LineSeriesRenderer {
    fn default() -> Self {
        Self::new(crate::theme::ChartTheme::default().fallback_series)
    }
}

impl SeriesRenderer for LineSeriesRenderer {
    fn load(&mut self, set: &RenderableSeriesSet) -> Result<()> {
        let lines = to_line_series(set, self.fallback);
        *self.lines.write() = lines;
        Ok(())
    }
}
