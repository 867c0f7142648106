use gpui::Hsla;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// A series flattened for line drawing: gaps removed, color resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub id: String,
    pub color: Hsla,
    pub points: Vec<PlotPoint>,
}

impl LineSeries {
    pub fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.x, p.x, p.y, p.y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y))),
        })
    }
}
