use std::sync::OnceLock;

use mac_oui::Oui;
use tracing::debug;

use crate::mac::MacAddress;

static OUI_DB: OnceLock<Oui> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
///
/// The embedded database is parsed on first use; lookups after that are cheap.
fn get_oui_db() -> &'static Oui {
    OUI_DB.get_or_init(|| {
        debug!("loading embedded OUI database");
        Oui::default().expect("failed to load OUI database")
    })
}

/// Identify the vendor registered for a MAC address.
///
/// Returns `None` when the OUI is not registered or the lookup rejects the
/// key; vendor resolution never fails the surrounding analysis.
pub fn get_vendor(mac: &MacAddress) -> Option<String> {
    let db = get_oui_db();
    let mac_str = mac.to_string();
    match db.lookup_by_mac(&mac_str) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}
