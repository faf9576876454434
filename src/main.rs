use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use skincare_ingredients::analysis::{analyze, AnalysisOptions, AnalysisRequest};
use skincare_ingredients::config::{parse_threshold, AppConfig};
use skincare_ingredients::export::{write_csv_file, DEFAULT_EXPORT_FILE};
use skincare_ingredients::localization::LocalizationManager;
use skincare_ingredients::matcher::MatcherConfig;
use skincare_ingredients::reference_store::ReferenceStore;
use skincare_ingredients::report::UnresolvedPolicy;
use skincare_ingredients::ui_builder;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skincare-analyzer")]
#[command(about = "Analyze a skincare product's ingredient list", long_about = None)]
struct Cli {
    /// Comma-separated ingredient list ("-" reads it from stdin)
    text: Option<String>,

    /// Ingredient picked from the known list (repeatable)
    #[arg(short, long = "select")]
    select: Vec<String>,

    /// Reference database CSV (overrides INGREDIENT_DATABASE)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Fuzzy acceptance threshold, exclusive (overrides MATCH_THRESHOLD)
    #[arg(short, long, value_parser = parse_threshold)]
    threshold: Option<u8>,

    /// Leave unrecognized ingredients out of the report
    #[arg(long)]
    omit_unresolved: bool,

    /// Message language, e.g. `fr` or `fr_FR` (overrides ANALYZER_LANGUAGE)
    #[arg(long)]
    lang: Option<String>,

    /// Write the report as CSV (`--export` alone writes ingredient_report.csv)
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    export: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Print the known ingredient names and exit
    #[arg(long)]
    list_known: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("Starting skincare ingredient analyzer");

    let mut config = AppConfig::from_env()?;
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if cli.omit_unresolved {
        config.unresolved = UnresolvedPolicy::Omit;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }

    let store = ReferenceStore::load(&config.database_path).with_context(|| {
        format!(
            "Failed to load ingredient database {}",
            config.database_path.display()
        )
    })?;
    let messages = LocalizationManager::new()?;

    if cli.list_known {
        print!(
            "{}",
            ui_builder::format_known_names(store.known_names(), &messages, &config.language)
        );
        return Ok(());
    }

    let raw_text = match cli.text.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read ingredient list from stdin")?;
            Some(buffer)
        }
        Some(text) => Some(text.to_string()),
        None => None,
    };

    let request = AnalysisRequest {
        selections: cli.select,
        raw_text,
    };
    let options = AnalysisOptions {
        matcher: MatcherConfig {
            threshold: config.threshold,
        },
        unresolved: config.unresolved,
    };

    let output = analyze(&request, &store, &options)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => {
            let count = output.candidates.len().to_string();
            println!(
                "{}\n",
                messages.get_message_with_args(
                    "analysis-complete",
                    &config.language,
                    &[("count", count.as_str())]
                )
            );
            println!("{}", messages.t("report-title", &config.language));
            println!("{}", ui_builder::format_report_table(&output.records));
            println!(
                "{}",
                ui_builder::format_suggestions(&output.suggestions, &messages, &config.language)
            );
            print!(
                "{}",
                ui_builder::format_summary(&output.summary, &messages, &config.language)
            );
        }
    }

    if let Some(path) = cli.export {
        write_csv_file(&output.records, &path)
            .with_context(|| format!("Failed to export report to {}", path.display()))?;
        let path_display = path.display().to_string();
        eprintln!(
            "{}",
            messages.get_message_with_args(
                "export-complete",
                &config.language,
                &[("path", path_display.as_str())]
            )
        );
    }

    Ok(())
}
