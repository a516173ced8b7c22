use macviz_common::config::Config;
use macviz_common::mac::MacAddress;
use macviz_common::vendors;

/// Everything derived from one address: the two first-octet flags and the
/// registered vendor, when the OUI database knows it.
#[derive(Debug, Clone)]
pub struct MacAnalysis {
    pub mac: MacAddress,
    pub is_unicast: bool,
    pub is_universal: bool,
    pub vendor: Option<String>,
}

impl MacAnalysis {
    pub fn type_label(&self) -> &'static str {
        if self.is_unicast { "Unicast" } else { "Multicast" }
    }

    pub fn admin_label(&self) -> &'static str {
        if self.is_universal { "Global" } else { "Local" }
    }

    pub fn vendor_label(&self) -> &str {
        self.vendor.as_deref().unwrap_or("Unknown")
    }
}

/// Analyzes a validated address. Infallible: a failed vendor lookup is an
/// unknown vendor, not an error.
pub fn analyze(mac: MacAddress, cfg: &Config) -> MacAnalysis {
    let vendor = if cfg.no_vendor {
        None
    } else {
        vendors::get_vendor(&mac)
    };

    MacAnalysis {
        mac,
        is_unicast: mac.is_unicast(),
        is_universal: mac.is_universal(),
        vendor,
    }
}
