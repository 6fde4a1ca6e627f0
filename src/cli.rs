use cd_license_check::application::dto::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Review license data of software components against ClearlyDefined
#[derive(Parser, Debug)]
#[command(name = "cd-license-check")]
#[command(version)]
#[command(
    about = "Review license data of software components against ClearlyDefined",
    long_about = "Reads ClearlyDefined coordinates (type/provider/namespace/name/revision) \
                  or Maven coordinates (group:artifact:version), one per line, fetches their \
                  definitions and marks each as approved or restricted.\n\n\
                  Exit codes: 0 all approved, 1 review required, 2 invalid arguments, \
                  3 application error."
)]
pub struct Args {
    /// File with one content id per line, or '-' to read from stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output format [default: json]
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude content ids matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "npm/npmjs/@types/*" -e "*/1.0.0-SNAPSHOT"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Approve a license expression; can be repeated.
    /// Defaults to Apache-2.0, MIT, BSD-2-Clause, BSD-3-Clause, EPL-2.0, ISC
    #[arg(short = 'l', long = "approve-license", value_name = "LICENSE")]
    pub approve_licenses: Vec<String>,

    /// Minimum effective score (0-100) for approval [default: 60]
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub threshold: Option<i64>,

    /// Path to a config file (defaults to ./cd-license-check.config.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the ClearlyDefined API
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Number of coordinates per definitions request (1-1000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub batch_size: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["cd-license-check", "ids.txt"]).unwrap();
        assert_eq!(args.input, "ids.txt");
        assert!(args.format.is_none());
        assert!(args.exclude.is_empty());
        assert!(args.approve_licenses.is_empty());
        assert!(args.threshold.is_none());
    }

    #[test]
    fn test_repeatable_options() {
        let args = Args::try_parse_from([
            "cd-license-check",
            "-",
            "-e",
            "npm/*",
            "--exclude",
            "pypi/*",
            "-l",
            "MIT",
            "--approve-license",
            "Unlicense",
        ])
        .unwrap();
        assert_eq!(args.input, "-");
        assert_eq!(args.exclude, vec!["npm/*", "pypi/*"]);
        assert_eq!(args.approve_licenses, vec!["MIT", "Unlicense"]);
    }

    #[test]
    fn test_format_parsing() {
        let args = Args::try_parse_from(["cd-license-check", "ids.txt", "-f", "MD"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));

        assert!(Args::try_parse_from(["cd-license-check", "ids.txt", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_threshold_range() {
        let args = Args::try_parse_from(["cd-license-check", "ids.txt", "-t", "100"]).unwrap();
        assert_eq!(args.threshold, Some(100));

        assert!(Args::try_parse_from(["cd-license-check", "ids.txt", "-t", "101"]).is_err());
        assert!(Args::try_parse_from(["cd-license-check", "ids.txt", "-t", "-1"]).is_err());
    }

    #[test]
    fn test_batch_size_range() {
        assert!(Args::try_parse_from(["cd-license-check", "ids.txt", "--batch-size", "0"]).is_err());
        assert!(
            Args::try_parse_from(["cd-license-check", "ids.txt", "--batch-size", "1001"]).is_err()
        );
        let args =
            Args::try_parse_from(["cd-license-check", "ids.txt", "--batch-size", "1000"]).unwrap();
        assert_eq!(args.batch_size, Some(1000));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["cd-license-check"]).is_err());
    }
}
