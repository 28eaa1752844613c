/// Startup options for an articles session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed the store with the three demo articles before the first prompt
    pub seed_demo_data: bool,

    /// Colorize banners and error messages
    pub color: bool,

    /// Emit debug logging on stderr
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            color: true,
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "articles=debug"
        } else {
            "warn"
        }
    }
}
