use anyhow;
use colored::*;
use tracing::{debug, error, warn};

use macviz_common::{config::Config, mac::MacAddress, success};
use macviz_core::system::discover_system_mac;

use crate::commands::analyze;
use crate::mprint;
use crate::session::Session;
use crate::terminal::{colors, print, prompt};

const FORMATS_HINT: &str = "00:1A:2B:3C:4D:5E, 00-1A-2B-3C-4D-5E, 001A.2B3C.4D5E or 001A2B3C4D5E";

/// The interactive analysis loop: read an address, analyze and render it,
/// offer the system-MAC probe, repeat until `quit` or EOF.
pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let mut session = Session::new();

    print::header("mac address finite automaton", cfg.quiet);
    print::print_status(format!("Valid formats: {FORMATS_HINT}"));
    print::print_status("Enter 'quit' to exit");

    loop {
        mprint!();
        let Some(input) = prompt::read_line("MAC Address")? else {
            break;
        };

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let mac = match MacAddress::parse(&input) {
            Ok(mac) => mac,
            Err(err) => {
                error!("{err}");
                print::print_status(format!("Valid formats: {FORMATS_HINT}"));
                continue;
            }
        };

        if let Err(err) = analyze::analyze_and_render(mac, &mut session, cfg, false) {
            error!("{err:#}");
            continue;
        }

        offer_system_probe(&mut session, cfg)?;
    }

    print_history(&session, cfg);
    Ok(())
}

fn offer_system_probe(session: &mut Session, cfg: &Config) -> anyhow::Result<()> {
    mprint!();
    if !prompt::confirm("Check your system's MAC address?")? {
        return Ok(());
    }

    let mac = match discover_system_mac() {
        Ok(mac) => mac,
        Err(err) => {
            // The variants stay distinguishable for diagnostics; the user
            // sees one outcome.
            debug!("system MAC discovery failed: {err}");
            warn!("Could not determine system MAC address.");
            return Ok(());
        }
    };

    success!("System MAC: {}", mac.to_string().color(colors::MAC_ADDR).bold());

    if session.contains(&mac) {
        print::print_status("Already analyzed this MAC.");
        return Ok(());
    }

    if prompt::confirm("Analyze this MAC?")? {
        if let Err(err) = analyze::analyze_and_render(mac, session, cfg, true) {
            error!("{err:#}");
        }
    }

    Ok(())
}

fn print_history(session: &Session, cfg: &Config) {
    if session.is_empty() {
        print::end_of_program();
        return;
    }

    mprint!();
    print::header("analysis history", cfg.quiet);
    let mut count = 0;
    for (position, mac) in session.entries() {
        print::tree_entry(position, &mac.to_string().color(colors::MAC_ADDR));
        count = position;
    }

    let analyzed: ColoredString = format!("{count} address(es)").bold().green();
    let summary = format!("Session complete: {analyzed} analyzed").color(colors::TEXT_DEFAULT);
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
        }
        _ => success!("{}", summary),
    }
}
