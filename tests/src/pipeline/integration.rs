#![cfg(test)]
use std::path::PathBuf;

use macviz_common::config::Config;
use macviz_common::mac::{self, MacAddress};
use macviz_core::analysis;
use macviz_core::automaton::{Automaton, TransitionSymbol};
use macviz_core::layout::{self, CanvasSize, MIN_SPACING};
use macviz_core::render;

fn offline_config() -> Config {
    Config {
        quiet: 2,
        no_banner: true,
        no_vendor: true,
        out_dir: PathBuf::from("."),
    }
}

/// End-to-end: canonical input through analysis, automaton, layout and
/// SVG serialization.
#[test]
fn canonical_address_full_pipeline() {
    let cfg = offline_config();

    let mac = MacAddress::parse("00:1A:2B:3C:4D:5E").expect("canonical input must parse");
    assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");

    let result = analysis::analyze(mac, &cfg);
    assert!(result.is_unicast);
    assert!(result.is_universal);

    let automaton = Automaton::from_mac(&mac);
    let symbols: Vec<char> = automaton
        .symbols()
        .iter()
        .map(TransitionSymbol::as_char)
        .collect();
    assert_eq!(
        symbols,
        vec![
            '0', '0', ':', '1', 'A', ':', '2', 'B', ':', '3', 'C', ':', '4', 'D', ':', '5', 'E'
        ]
    );
    assert_eq!(automaton.state_count(), 18);

    let canvas = CanvasSize::for_automaton(&automaton);
    assert_eq!((canvas.width, canvas.height), (1900, 400));

    let geometry = layout::layout(&automaton, canvas);
    assert_eq!(geometry.states.len(), 18);
    assert_eq!(geometry.transitions.len(), 17);

    let svg = render::render_svg(&geometry, &result);
    assert!(svg.contains("q17 (final)"));
}

/// End-to-end: bare lowercase hex input normalizes and analyzes the same
/// as its canonical form.
#[test]
fn bare_lowercase_address_normalizes() {
    let cfg = offline_config();

    let mac = MacAddress::parse("0a1a2b3c4d5e").expect("bare hex must parse");
    assert_eq!(mac.to_string(), "0A:1A:2B:3C:4D:5E");

    let result = analysis::analyze(mac, &cfg);
    // 0x0A = 0b1010: bit 0 clear (unicast), bit 1 set (locally administered).
    assert!(result.is_unicast);
    assert!(!result.is_universal);

    let canonical = MacAddress::parse("0A:1A:2B:3C:4D:5E").unwrap();
    assert_eq!(mac, canonical);
    assert_eq!(
        Automaton::from_mac(&mac).symbol_count(),
        Automaton::from_mac(&canonical).symbol_count()
    );
}

/// Five groups is not a MAC address, in any accepted shape.
#[test]
fn short_address_is_rejected() {
    assert!(!mac::is_valid("00:1A:2B:3C:4D"));
    assert!(MacAddress::parse("00:1A:2B:3C:4D").is_err());
}

/// When the canvas cannot fit the chain the spacing saturates at the
/// minimum rather than collapsing.
#[test]
fn undersized_canvas_saturates_spacing() {
    let mac = MacAddress::parse("FF:FF:FF:FF:FF:FF").unwrap();
    let automaton = Automaton::from_mac(&mac);

    let geometry = layout::layout(
        &automaton,
        CanvasSize {
            width: 400,
            height: 400,
        },
    );
    assert_eq!(geometry.spacing, MIN_SPACING);

    // Still a well-formed chain, just wider than the canvas.
    let last = geometry.states.last().unwrap();
    assert!(last.x > 400.0);
    assert_eq!(geometry.states.len(), 18);
}

/// PNG encoding produces a plausible image file.
#[test]
fn render_png_produces_png_bytes() {
    let cfg = offline_config();
    let mac = MacAddress::parse("02:00:00:00:00:01").unwrap();
    let result = analysis::analyze(mac, &cfg);

    let automaton = Automaton::from_mac(&mac);
    let geometry = layout::layout(&automaton, CanvasSize::for_automaton(&automaton));

    let png = render::render_png(&geometry, &result).expect("rendering must succeed");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
