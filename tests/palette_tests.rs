use gpui_live_chart::data_types::{GroupConfig, PaletteOverflow};
use gpui_live_chart::gradient::{gradient_stops, stack_colors};
use gpui_live_chart::{ChartError, HexColor, Palette};

fn hex(s: &str) -> HexColor {
    s.parse().unwrap()
}

#[test]
fn test_hex_parse_and_display() {
    assert_eq!(hex("#5DA5DA"), HexColor::new(0x5D, 0xA5, 0xDA));
    assert_eq!(hex("5da5da"), HexColor::new(0x5D, 0xA5, 0xDA));
    assert_eq!(hex("#fff"), HexColor::WHITE);
    assert_eq!(HexColor::from_u32(0xF15854).to_string(), "#F15854");
    assert!(matches!("#12345".parse::<HexColor>(), Err(ChartError::Configuration(_))));
    assert!("#GGGGGG".parse::<HexColor>().is_err());
    assert!("+FFFFF".parse::<HexColor>().is_err());
    assert!("#+FFFFF".parse::<HexColor>().is_err());
    assert!("#-1".parse::<HexColor>().is_err());
}

#[test]
fn test_gradient_stop_counts() {
    let base = hex("#5DA5DA");
    assert!(gradient_stops(base, HexColor::WHITE, 0).is_empty());
    assert_eq!(gradient_stops(base, HexColor::WHITE, 1), vec![base]);

    let stops = gradient_stops(base, HexColor::WHITE, 5);
    assert_eq!(stops.len(), 5);
    assert_eq!(stops[0], base);
    assert_eq!(stops[4], HexColor::WHITE);
}

#[test]
fn test_gradient_midpoint() {
    let stops = gradient_stops(hex("#5DA5DA"), HexColor::WHITE, 3);
    assert_eq!(stops[1], hex("#AED2ED"));
}

#[test]
fn test_gradient_channels_move_towards_end() {
    let stops = gradient_stops(hex("#000000"), hex("#FF8000"), 6);
    for pair in stops.windows(2) {
        assert!(pair[0].r <= pair[1].r);
        assert!(pair[0].g <= pair[1].g);
        assert_eq!(pair[1].b, 0);
    }
}

#[test]
fn test_stack_colors_length() {
    let palette = Palette::default();
    for stacks in 0..=palette.len() {
        for chains in 0..5 {
            let group = GroupConfig::new(stacks, chains);
            let colors = stack_colors(&palette, group, PaletteOverflow::Reject).unwrap();
            assert_eq!(colors.len(), stacks * chains, "stacks={stacks} chains={chains}");
        }
    }
}

#[test]
fn test_stack_colors_drop_white() {
    let palette = Palette::default();
    let colors = stack_colors(&palette, GroupConfig::new(2, 2), PaletteOverflow::Reject).unwrap();

    assert_eq!(colors[0], hex("#5DA5DA"));
    assert_eq!(colors[1], hex("#AED2ED"));
    assert_eq!(colors[2], hex("#FAA43A"));
    assert!(!colors.contains(&HexColor::WHITE));
}

#[test]
fn test_zero_groups_is_empty() {
    let palette = Palette::default();
    let colors = stack_colors(&palette, GroupConfig::default(), PaletteOverflow::Reject).unwrap();
    assert!(colors.is_empty());
}

#[test]
fn test_palette_overflow_rejected() {
    let palette = Palette::default();
    let group = GroupConfig::new(palette.len() + 1, 2);
    let err = stack_colors(&palette, group, PaletteOverflow::Reject).unwrap_err();
    assert!(matches!(err, ChartError::Configuration(_)));
}

#[test]
fn test_palette_overflow_cycles() {
    let palette = Palette::new(vec![hex("#FF0000"), hex("#00FF00")]);
    let colors = stack_colors(&palette, GroupConfig::new(3, 1), PaletteOverflow::Cycle).unwrap();
    assert_eq!(colors, vec![hex("#FF0000"), hex("#00FF00"), hex("#FF0000")]);
}

#[test]
fn test_empty_palette_cannot_cycle() {
    let palette = Palette::new(vec![]);
    let err = stack_colors(&palette, GroupConfig::new(1, 1), PaletteOverflow::Cycle).unwrap_err();
    assert!(matches!(err, ChartError::Configuration(_)));

    // Nothing requested, nothing to fail on.
    assert!(stack_colors(&palette, GroupConfig::new(0, 3), PaletteOverflow::Reject)
        .unwrap()
        .is_empty());
}

#[test]
fn test_palette_serde() {
    let palette: Palette = serde_json::from_str(r##"["#5DA5DA", "#fff"]"##).unwrap();
    assert_eq!(palette.colors(), &[hex("#5DA5DA"), HexColor::WHITE]);
    assert_eq!(
        serde_json::to_string(&palette).unwrap(),
        r##"["#5DA5DA","#FFFFFF"]"##
    );
    assert!(serde_json::from_str::<Palette>(r##"["nope"]"##).is_err());
}
