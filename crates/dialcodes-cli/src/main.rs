//! dialcodes-cli — Command-line interface for dialcodes-core
//!
//! Inspect the bundled dial-code directory from a terminal: list countries
//! the way a picker shows them, search by name or dial code, look up a single
//! country, and export snapshots.
//!
//! Usage examples
//! --------------
//!
//! - Picker listing with pinned countries, German names
//!   $ dialcodes list --popular de,at,ch --lang de
//!
//! - Search (accent-insensitive names, verbatim dial codes)
//!   $ dialcodes search mexico
//!   $ dialcodes search +44
//!
//! - Everything sharing a dial code
//!   $ dialcodes dial 1
//!
//! - Restrict the universe
//!   $ dialcodes --exclude us,ca --only us,mx,fr list
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `dialcodes-core` is used. Point
//! `--input` (or `DIALCODES_INPUT`) at a `.json`, `.json.gz`, `.bin` or
//! `.bin.gz` file to use another one.
mod args;
mod output;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use dialcodes_core::picker::{DialerPicker, PickerOptions};
use dialcodes_core::{CountryDirectory, CountryRecord};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let loaded;
    let db: &CountryDirectory = match &args.input {
        Some(path) => {
            loaded = CountryDirectory::load_from_path(path, None)
                .with_context(|| format!("failed to load dataset {}", path.display()))?;
            &loaded
        }
        None => CountryDirectory::bundled(),
    };
    tracing::debug!(countries = db.len(), "dataset ready");

    let criteria = args.criteria();
    let lang = criteria.language.clone();

    match args.command {
        Commands::List { ref search } => {
            let mut options = PickerOptions::new(criteria);
            options.criteria.search_text = search.clone();
            let picker = DialerPicker::new(db, options, |_: &CountryRecord| {});
            output::print_view(&picker.view(), args.json)?;
        }

        Commands::Search { ref query } => {
            let hits = db.visible(&criteria.search(query.as_str()));
            if hits.is_empty() && !args.json {
                println!("No countries found matching: {query}");
            } else {
                output::print_records(&hits, &lang, args.json)?;
            }
        }

        Commands::Country { ref code } => match db.lookup(code, &lang) {
            Some(r) => output::print_country(r, &lang, args.json)?,
            None => bail!("No country found for: {code}"),
        },

        Commands::Dial { ref code } => {
            let hits = db.find_by_dial_code(code);
            if hits.is_empty() {
                bail!("No country uses dial code {code}");
            }
            output::print_records(&hits, &lang, args.json)?;
        }

        Commands::Popular => {
            if criteria.popular_codes.is_empty() {
                bail!("--popular is required for this command");
            }
            output::print_records(&db.popular(&criteria), &lang, args.json)?;
        }

        Commands::Languages => {
            let languages: Vec<&str> = db.languages().into_iter().collect();
            if args.json {
                println!("{}", serde_json::to_string(&languages)?);
            } else {
                for l in languages {
                    println!("{l}");
                }
            }
        }

        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Languages: {}", stats.languages);
                println!("  Shared dial codes: {}", stats.shared_dial_codes);
            }
        }

        Commands::Snapshot { ref out } => {
            let visible: Vec<CountryRecord> =
                db.visible(&criteria).into_iter().cloned().collect();
            let snapshot = CountryDirectory::from_records(visible);
            snapshot
                .save_as(out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {} countries to {}", snapshot.len(), out.display());
        }
    }

    Ok(())
}
