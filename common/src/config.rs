use std::path::PathBuf;

pub struct Config {
    /// Suppresses decorative output; higher levels suppress more.
    pub quiet: u8,
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Disables the OUI vendor lookup.
    ///
    /// Analysis still runs; the vendor is reported as unknown.
    pub no_vendor: bool,
    /// Directory diagrams are written into.
    pub out_dir: PathBuf,
}
