//! gpui_live_chart crate: a rolling-window live chart for GPUI

pub mod buffer;
pub mod chart;
pub mod clock;
pub mod data_types;
pub mod error;
pub mod gradient;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod utils;

pub use buffer::WindowedSeriesBuffer;
pub use chart::{LiveChart, SampleTransform};
pub use clock::{Clock, ManualClock, SystemClock};
pub use data_types::{
    ChartOptions, ChartOptionsOverride, GroupConfig, RenderableSeriesSet, Sample, SeriesColumn,
};
pub use error::{ChartError, ChartResult};
pub use rendering::{JsonLinesRenderer, LineSeriesRenderer, RecordingRenderer, SeriesRenderer};
pub use theme::{ChartTheme, HexColor, Palette};
