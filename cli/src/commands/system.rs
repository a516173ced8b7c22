use anyhow;
use colored::*;
use tracing::{debug, warn};

use macviz_common::{config::Config, success};
use macviz_core::system::discover_system_mac;

use crate::commands::analyze;
use crate::session::Session;

/// One-shot probe of this machine's MAC address.
pub fn system(cfg: &Config) -> anyhow::Result<()> {
    let mac = match discover_system_mac() {
        Ok(mac) => mac,
        Err(err) => {
            debug!("system MAC discovery failed: {err}");
            warn!("Could not determine system MAC address.");
            return Ok(());
        }
    };

    success!("System MAC: {}", mac.to_string().bold());

    let mut session = Session::new();
    analyze::analyze_and_render(mac, &mut session, cfg, true)?;
    Ok(())
}
