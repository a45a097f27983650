use clap::{Parser, Subcommand, ValueEnum};
use dialcodes_core::{CodeSet, FilterCriteria, PopularPolicy};
use std::path::PathBuf;

/// CLI arguments for dialcodes-cli
#[derive(Debug, Parser)]
#[command(
    name = "dialcodes",
    version,
    about = "CLI for querying the dialcodes-core country dial-code directory"
)]
pub struct CliArgs {
    /// Custom dataset instead of the bundled one (.json, .json.gz, .bin, .bin.gz)
    #[arg(short = 'i', long = "input", env = "DIALCODES_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Language used for names and sorting (falls back to English)
    #[arg(
        short = 'l',
        long = "lang",
        env = "DIALCODES_LANG",
        default_value = "en",
        global = true
    )]
    pub lang: String,

    /// Comma-separated country codes to hide (e.g. US,CA)
    #[arg(short = 'x', long = "exclude", global = true)]
    pub exclude: Option<String>,

    /// Comma-separated country codes to show exclusively
    #[arg(short = 'o', long = "only", global = true)]
    pub only: Option<String>,

    /// Comma-separated country codes pinned in a popular section
    #[arg(short = 'p', long = "popular", global = true)]
    pub popular: Option<String>,

    /// Whether popular countries are repeated in the main list
    #[arg(long = "policy", value_enum, default_value_t = PolicyArg::ShowBoth, global = true)]
    pub policy: PolicyArg,

    /// Print JSON instead of text rows
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Show popular countries in the header and in the list
    ShowBoth,
    /// Remove popular countries from the list while the header is shown
    Dedupe,
}

impl From<PolicyArg> for PopularPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::ShowBoth => PopularPolicy::ShowBoth,
            PolicyArg::Dedupe => PopularPolicy::Dedupe,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries as a picker would show them
    List {
        /// Search text applied to names and dial codes
        #[arg(short = 's', long = "search")]
        search: Option<String>,
    },

    /// Search countries by name (accent-insensitive) or dial code
    Search {
        /// e.g. "mex", "+44"
        query: String,
    },

    /// Show one country by code or name
    Country {
        /// ISO code (e.g. FR) or name in the selected language
        code: String,
    },

    /// List every country sharing a dial code
    Dial {
        /// e.g. +1, 44
        code: String,
    },

    /// List the popular countries given with --popular
    Popular,

    /// List the languages present in the dataset
    Languages,

    /// Show a summary of the dataset
    Stats,

    /// Write a bincode snapshot of the (filtered) dataset
    Snapshot {
        /// Output path; a .gz suffix enables compression
        out: PathBuf,
    },
}

impl CliArgs {
    /// Builds the filter criteria shared by all listing commands.
    pub fn criteria(&self) -> FilterCriteria {
        let parse = |s: &Option<String>| s.as_deref().map(CodeSet::parse_list).unwrap_or_default();

        let mut criteria = FilterCriteria::new(self.lang.clone()).policy(self.policy.into());
        criteria.excluded_codes = parse(&self.exclude);
        criteria.include_only_codes = parse(&self.only);
        criteria.popular_codes = parse(&self.popular);
        criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_from_flags() {
        let args = CliArgs::parse_from([
            "dialcodes", "--lang", "de", "-x", "us,ca", "--popular", "de", "--policy", "dedupe",
            "list",
        ]);
        let c = args.criteria();
        assert_eq!(c.language, "de");
        assert!(c.excluded_codes.contains("US"));
        assert!(c.excluded_codes.contains("CA"));
        assert!(c.include_only_codes.is_empty());
        assert!(c.popular_codes.contains("de"));
        assert_eq!(c.popular_policy, PopularPolicy::Dedupe);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["dialcodes", "search", "mex", "--json"]);
        assert!(args.json);
        assert!(matches!(args.command, Commands::Search { ref query } if query == "mex"));
    }
}
