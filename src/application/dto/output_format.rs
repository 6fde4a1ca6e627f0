use clap::ValueEnum;

/// Report output format
///
/// Parsed by clap on the command line and by [`std::str::FromStr`] from the
/// config file. Both accept `md` for Markdown and ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON report
    Json,
    /// Human-readable report with summary and content tables
    #[value(alias = "md")]
    Markdown,
}

impl OutputFormat {
    /// Canonical name, as written in the config file
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| format!("Invalid format: {}. Expected 'json' or 'markdown'", s))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
