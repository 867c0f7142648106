//! Live Chart
//!
//! `LiveChart` ties the pieces together: it owns the rolling buffer, runs the
//! caller's transform on every raw sample, assigns stack colors and hands the
//! resulting column set to a renderer.
//!
//! The chart does not schedule itself. The caller invokes [`LiveChart::update`]
//! from its own timer, typically every [`LiveChart::tick_interval`].

use crate::buffer::WindowedSeriesBuffer;
use crate::clock::Clock;
use crate::data_types::{ChartOptions, ChartOptionsOverride, GroupConfig, Sample};
use crate::error::{ChartError, ChartResult};
use crate::gradient::stack_colors;
use crate::rendering::SeriesRenderer;
use crate::theme::HexColor;
use std::time::Duration;
use tracing::{debug, info};

/// Turns whatever the endpoint delivers into named values.
pub type SampleTransform<Raw> = Box<dyn FnMut(&Raw) -> eyre::Result<Sample> + Send>;

pub struct LiveChart<Raw, R: SeriesRenderer> {
    endpoint: String,
    mount_target: String,
    transform: SampleTransform<Raw>,
    options: ChartOptions,
    buffer: WindowedSeriesBuffer,
    renderer: R,
    last_colors: Vec<HexColor>,
}

impl<Raw, R: SeriesRenderer> LiveChart<Raw, R> {
    pub fn new<F>(
        endpoint: impl Into<String>,
        mount_target: impl Into<String>,
        transform: F,
        renderer: R,
        overrides: Option<ChartOptionsOverride>,
    ) -> ChartResult<Self>
    where
        F: FnMut(&Raw) -> eyre::Result<Sample> + Send + 'static,
    {
        let options = ChartOptions::default().merged(overrides.unwrap_or_default());
        options.validate()?;
        let buffer = WindowedSeriesBuffer::from_options(&options)?;
        Ok(Self::assemble(
            endpoint.into(),
            mount_target.into(),
            Box::new(transform),
            options,
            buffer,
            renderer,
        ))
    }

    /// Like [`LiveChart::new`] with full options and an explicit clock.
    pub fn with_clock<F>(
        endpoint: impl Into<String>,
        mount_target: impl Into<String>,
        transform: F,
        renderer: R,
        options: ChartOptions,
        clock: impl Clock + 'static,
    ) -> ChartResult<Self>
    where
        F: FnMut(&Raw) -> eyre::Result<Sample> + Send + 'static,
    {
        options.validate()?;
        let buffer =
            WindowedSeriesBuffer::with_clock(options.window_size, options.missing_keys, clock)?;
        Ok(Self::assemble(
            endpoint.into(),
            mount_target.into(),
            Box::new(transform),
            options,
            buffer,
            renderer,
        ))
    }

    fn assemble(
        endpoint: String,
        mount_target: String,
        transform: SampleTransform<Raw>,
        options: ChartOptions,
        buffer: WindowedSeriesBuffer,
        renderer: R,
    ) -> Self {
        info!(
            endpoint = %endpoint,
            target = %mount_target,
            window_size = options.window_size,
            "LiveChart created"
        );
        Self {
            endpoint,
            mount_target,
            transform,
            options,
            buffer,
            renderer,
            last_colors: Vec::new(),
        }
    }

    /// Records one tick and redraws.
    ///
    /// Colors and the transform are resolved first, so a configuration or
    /// transform failure leaves the window untouched.
    pub fn update(&mut self, raw: &Raw, group: GroupConfig) -> ChartResult<()> {
        let colors = stack_colors(&self.options.palette, group, self.options.palette_overflow)?;
        let sample = (self.transform)(raw).map_err(ChartError::Transform)?;

        self.buffer.push(&sample);
        let set = self.buffer.snapshot(colors.clone());
        debug!(
            series = set.columns.len(),
            window = set.time.len(),
            colors = set.colors.len(),
            "chart update"
        );
        self.last_colors = colors;
        self.renderer.load(&set).map_err(ChartError::Render)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn mount_target(&self) -> &str {
        &self.mount_target
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn buffer(&self) -> &WindowedSeriesBuffer {
        &self.buffer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn last_colors(&self) -> &[HexColor] {
        &self.last_colors
    }

    pub fn tick_interval(&self) -> Duration {
        self.options.tick_interval()
    }
}
