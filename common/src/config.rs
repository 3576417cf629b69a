/// Presentation settings collected from the global command line flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `0` prints everything, `1` drops banners and headers, `2` prints
    /// results only.
    pub quiet: u8,

    /// Skips the banner at startup.
    pub no_banner: bool,

    /// Raises the default log level: `1` enables debug, `2` enables trace.
    /// Ignored when `RUST_LOG` is set.
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
