/// Resolves a hardware address to the company that registered its OUI.
pub trait VendorRepository: Send + Sync {
    /// `mac` is the address exactly as the neighbor table printed it;
    /// colon and dash separated forms must both be accepted.
    fn get_vendor(&self, mac: &str) -> Option<String>;
}
