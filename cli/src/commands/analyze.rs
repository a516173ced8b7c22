use anyhow;
use colored::*;
use macviz_common::{config::Config, mac::MacAddress, success};
use macviz_core::analysis::{self, MacAnalysis};
use macviz_core::automaton::Automaton;
use macviz_core::layout::{self, CanvasSize};
use macviz_core::render;

use crate::session::Session;
use crate::terminal::{colors, print, spinner};

/// One-shot analysis of a single address.
pub fn analyze_one(mac: MacAddress, cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();
    analyze_and_render(mac, &mut session, cfg, false)?;
    Ok(())
}

/// Runs the full pipeline for one address: analysis, terminal report,
/// layout, diagram file. Returns the finished analysis so callers can
/// reuse it.
pub fn analyze_and_render(
    mac: MacAddress,
    session: &mut Session,
    cfg: &Config,
    from_system: bool,
) -> anyhow::Result<MacAnalysis> {
    let position = session.next_position();

    // First lookup parses the embedded OUI database, which takes a moment.
    let sp = spinner::start("Analyzing address...", cfg.quiet);
    let analysis = analysis::analyze(mac, cfg);
    sp.finish_and_clear();

    print_analysis(&analysis, cfg);

    let automaton = Automaton::from_mac(&mac);
    let geometry = layout::layout(&automaton, CanvasSize::for_automaton(&automaton));

    let filename = if from_system {
        format!("mac_automaton_system_{position}.png")
    } else {
        format!("mac_automaton_{position}.png")
    };
    let path = cfg.out_dir.join(filename);

    let sp = spinner::start("Rendering diagram...", cfg.quiet);
    let result = render::write_png(&path, &geometry, &analysis);
    sp.finish_and_clear();
    result?;

    // Only a rendered address earns a history slot.
    session.record(mac);

    success!(
        "Finite automaton diagram saved as {}",
        path.display().to_string().bold()
    );

    Ok(analysis)
}

fn print_analysis(analysis: &MacAnalysis, cfg: &Config) {
    print::header("MAC Address Analysis", cfg.quiet);
    print::set_key_width(&["Normalized", "Type", "Administration", "Vendor"]);

    print::aligned_line(
        "Normalized",
        analysis.mac.to_string().color(colors::MAC_ADDR).bold(),
    );
    print::aligned_line("Type", analysis.type_label());
    print::aligned_line(
        "Administration",
        if analysis.is_universal {
            "Globally unique"
        } else {
            "Locally administered"
        },
    );
    print::aligned_line("Vendor", analysis.vendor_label());
}
