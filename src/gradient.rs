//! Gradient stops and per-stack color assignment.
//!
//! Each stack gets a base color from the palette; the chains inside a stack
//! are shaded from that base color towards white. The white end stop is
//! dropped so two neighbouring stacks never share a color.

use crate::data_types::{GroupConfig, PaletteOverflow};
use crate::error::{ChartError, ChartResult};
use crate::theme::{HexColor, Palette};
use tracing::warn;

/// Returns `stops` colors linearly interpolated in RGB from `start` to `end`,
/// both ends included.
pub fn gradient_stops(start: HexColor, end: HexColor, stops: usize) -> Vec<HexColor> {
    match stops {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (stops - 1) as f64;
            (0..stops)
                .map(|i| {
                    let t = i as f64 / last;
                    HexColor::new(
                        lerp_channel(start.r, end.r, t),
                        lerp_channel(start.g, end.g, t),
                        lerp_channel(start.b, end.b, t),
                    )
                })
                .collect()
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let v = from as f64 + (to as f64 - from as f64) * t;
    v.round().clamp(0.0, 255.0) as u8
}

/// Resolves the base color of stack `index` under the overflow policy.
pub fn base_color(
    palette: &Palette,
    index: usize,
    overflow: PaletteOverflow,
) -> ChartResult<HexColor> {
    if let Some(color) = palette.get(index) {
        return Ok(color);
    }
    match overflow {
        PaletteOverflow::Cycle if !palette.is_empty() => {
            Ok(palette.colors()[index % palette.len()])
        }
        _ => Err(ChartError::Configuration(format!(
            "stack {} has no base color (palette holds {})",
            index,
            palette.len()
        ))),
    }
}

/// Computes the full color list for `group`: `chains_per_stack` shades per
/// stack, stacks concatenated in order.
pub fn stack_colors(
    palette: &Palette,
    group: GroupConfig,
    overflow: PaletteOverflow,
) -> ChartResult<Vec<HexColor>> {
    if group.stacks > palette.len() {
        match overflow {
            PaletteOverflow::Reject => {
                return Err(ChartError::Configuration(format!(
                    "{} stacks requested but the palette only has {} colors",
                    group.stacks,
                    palette.len()
                )));
            }
            PaletteOverflow::Cycle => {
                warn!(
                    stacks = group.stacks,
                    palette = palette.len(),
                    "palette exhausted, reusing base colors"
                );
            }
        }
    }

    let mut colors = Vec::with_capacity(group.color_count());
    for stack in 0..group.stacks {
        let base = base_color(palette, stack, overflow)?;
        let mut stops = gradient_stops(base, HexColor::WHITE, group.chains_per_stack + 1);
        stops.pop();
        colors.extend(stops);
    }
    Ok(colors)
}
