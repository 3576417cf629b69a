use std::sync::OnceLock;

use mac_oui::Oui;
use netkit_common::vendors::VendorRepository;
use pnet::datalink::MacAddr;
use tracing::debug;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Loads the bundled OUI database once. A database that fails to load
/// turns vendor enrichment off for the rest of the process.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                debug!("OUI database unavailable: {e:?}");
                None
            }
        })
        .as_ref()
}

pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        let mac = normalize_mac(mac)?;
        match get_oui_db()?.lookup_by_mac(&mac) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}

/// Canonical `aa:bb:cc:dd:ee:ff` form of the spellings neighbor tables use
/// (`aa-bb-...` on Windows, unpadded `0:11:...` on BSD).
fn normalize_mac(mac: &str) -> Option<String> {
    mac.trim()
        .replace('-', ":")
        .parse::<MacAddr>()
        .ok()
        .map(|mac| mac.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
