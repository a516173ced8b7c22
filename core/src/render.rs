//! # Diagram Renderer
//!
//! Turns a computed [`DiagramLayout`] into pixels: the geometry is
//! serialized to an SVG document, parsed with usvg and rasterized into a
//! tiny-skia pixmap. The layout engine stays free of any drawing concern.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, anyhow};
use resvg::tiny_skia::Pixmap;
use resvg::usvg;
use tracing::debug;

use crate::analysis::MacAnalysis;
use crate::layout::DiagramLayout;

const STATE_FILL: &str = "#3366CC";
const ARROW_STROKE: &str = "#4D4D4D";
const STATE_TEXT: &str = "#FFFFFF";
const TRANSITION_TEXT: &str = "#803333";
const TITLE: &str = "MAC Address Finite Automaton";

/// Serializes the diagram to an SVG document.
pub fn render_svg(layout: &DiagramLayout, analysis: &MacAnalysis) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="Arial, sans-serif">"#,
        layout.width, layout.height, layout.width, layout.height
    );
    let _ = writeln!(
        svg,
        r##"  <rect x="0" y="0" width="{}" height="{}" fill="#FFFFFF" />"##,
        layout.width, layout.height
    );

    push_heading(&mut svg, analysis);
    push_start_arrow(&mut svg, layout);
    push_transitions(&mut svg, layout);
    push_states(&mut svg, layout);

    svg.push_str("</svg>\n");
    svg
}

fn push_heading(svg: &mut String, analysis: &MacAnalysis) {
    let _ = writeln!(
        svg,
        r##"  <text x="50" y="40" font-size="24" font-weight="bold" fill="#000000">{}</text>"##,
        TITLE
    );

    let info = format!(
        "MAC: {} | Type: {} | Admin: {}",
        analysis.mac,
        analysis.type_label(),
        analysis.admin_label()
    );
    let _ = writeln!(
        svg,
        r##"  <text x="50" y="70" font-size="16" fill="#000000">{}</text>"##,
        escape_xml(&info)
    );

    let _ = writeln!(
        svg,
        r##"  <text x="50" y="95" font-size="16" fill="#000000">Vendor: {}</text>"##,
        escape_xml(analysis.vendor_label())
    );
}

fn push_start_arrow(svg: &mut String, layout: &DiagramLayout) {
    let s = &layout.start;
    push_arrow_line(svg, s.from_x, s.to_x, s.y, s.head_size);
    let _ = writeln!(
        svg,
        r#"  <text x="{:.1}" y="{:.1}" font-size="12" fill="{}">start</text>"#,
        s.label_x, s.label_y, ARROW_STROKE
    );
}

fn push_transitions(svg: &mut String, layout: &DiagramLayout) {
    for arrow in &layout.transitions {
        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="14" fill="{}" text-anchor="middle">{}</text>"#,
            arrow.label_x,
            arrow.label_y,
            TRANSITION_TEXT,
            escape_xml(&arrow.label.to_string())
        );
        push_arrow_line(svg, arrow.from_x, arrow.to_x, arrow.y, arrow.head_size);
    }
}

/// A horizontal shaft with a two-stroke arrowhead at the destination end.
fn push_arrow_line(svg: &mut String, from_x: f32, to_x: f32, y: f32, head: f32) {
    let _ = writeln!(
        svg,
        r#"  <path d="M {from_x:.1} {y:.1} L {to_x:.1} {y:.1} M {to_x:.1} {y:.1} L {:.1} {:.1} M {to_x:.1} {y:.1} L {:.1} {:.1}" stroke="{ARROW_STROKE}" stroke-width="2" fill="none" />"#,
        to_x - head,
        y - head / 2.0,
        to_x - head,
        y + head / 2.0,
    );
}

fn push_states(svg: &mut String, layout: &DiagramLayout) {
    for state in &layout.states {
        if state.is_final {
            // Accepting state: concentric circles with a white ring between.
            let _ = writeln!(
                svg,
                r##"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="#FFFFFF" stroke-width="2" />"##,
                state.x, state.y, state.radius, STATE_FILL
            );
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" />"#,
                state.x,
                state.y,
                state.inner_radius(),
                STATE_FILL
            );
        } else {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" />"#,
                state.x, state.y, state.radius, STATE_FILL
            );
        }

        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="14" font-weight="bold" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            state.x,
            state.y,
            STATE_TEXT,
            escape_xml(&state.label)
        );
    }
}

/// Rasterizes the diagram and encodes it as PNG bytes.
pub fn render_png(layout: &DiagramLayout, analysis: &MacAnalysis) -> anyhow::Result<Vec<u8>> {
    let svg = render_svg(layout, analysis);

    let mut options = usvg::Options::default();
    options.font_family = "Arial".to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|err| anyhow!("failed to parse diagram SVG: {err}"))?;

    let mut pixmap = Pixmap::new(layout.width, layout.height)
        .ok_or_else(|| anyhow!("failed to allocate {}x{} surface", layout.width, layout.height))?;

    resvg::render(&tree, usvg::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| anyhow!("failed to encode PNG: {err}"))
}

/// Renders the diagram and writes it to `path`.
pub fn write_png(
    path: &Path,
    layout: &DiagramLayout,
    analysis: &MacAnalysis,
) -> anyhow::Result<()> {
    let png = render_png(layout, analysis)?;
    std::fs::write(path, &png)
        .with_context(|| format!("failed to write diagram to {}", path.display()))?;
    debug!("wrote {} bytes to {}", png.len(), path.display());
    Ok(())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
