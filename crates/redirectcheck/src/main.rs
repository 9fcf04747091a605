use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use redirectcheck_core::check::{
    CheckOptions, CheckOutcome, CheckReport, REDIRECT_EXAMPLE, check_removed_pages,
};
use redirectcheck_core::config::{CheckConfig, load_config};
use redirectcheck_core::document::{load_document, missing_inputs};
use redirectcheck_core::redirects::PageNormalizer;

const EXIT_UNCOVERED: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "redirectcheck",
    version,
    about = "Check that pages removed from docs.json navigation have redirects"
)]
struct Cli {
    #[arg(value_name = "BASE_DOCS", help = "docs.json from the base revision")]
    base_docs: PathBuf,
    #[arg(value_name = "HEAD_DOCS", help = "docs.json from the head revision")]
    head_docs: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, value_name = "PATH", help = "TOML file with a [pages] section")]
    config: Option<PathBuf>,
    #[arg(long, help = "Print resolved inputs and counts to stderr")]
    diagnostics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let missing = missing_inputs(&cli.base_docs, &cli.head_docs);
    if !missing.is_empty() {
        for input in &missing {
            eprintln!("{}", input.message());
        }
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let config = match cli.config.as_deref() {
        Some(path) if !path.exists() => {
            eprintln!("Error: config file not found at {}", path.display());
            return Ok(ExitCode::from(EXIT_USAGE));
        }
        Some(path) => load_config(path)?,
        None => CheckConfig::default(),
    };
    let options = CheckOptions {
        normalizer: PageNormalizer::from_config(&config),
    };

    let base = load_document(&cli.base_docs)?;
    let head = load_document(&cli.head_docs)?;
    let report = check_removed_pages(&base, &head, &options);

    if cli.diagnostics {
        eprintln!("[diagnostics]\n{}", diagnostics(&cli, &options, &report));
    }

    match cli.format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.outcome.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNCOVERED)
    })
}

fn print_text_report(report: &CheckReport) {
    match report.outcome {
        CheckOutcome::NoRemovals => {
            println!("✅ No pages removed from docs.json. Check passed.");
        }
        CheckOutcome::AllCovered => {
            println!(
                "✅ All {} removed page(s) have corresponding redirects. Check passed.",
                report.removed_pages.len()
            );
        }
        CheckOutcome::Uncovered => {
            eprintln!(
                "❌ The following pages were removed from docs.json without adding redirects:"
            );
            for page in &report.uncovered_pages {
                eprintln!("  - {page}");
            }
            eprintln!();
            eprintln!(
                "Please add a redirect for each removed page to the `redirects` array in docs.json."
            );
            eprintln!("Example: {REDIRECT_EXAMPLE}");
            eprintln!("Add these to the `redirects` array in src/docs.json.");
        }
    }
}

fn diagnostics(cli: &Cli, options: &CheckOptions, report: &CheckReport) -> String {
    format!(
        "base_docs={}\nhead_docs={}\nconfig={} ({})\nconfig_exists={}\nextension={}\nroot_page={}\nbase_pages={}\nhead_pages={}\npage_redirects={}\nremoved_pages={}\ncovered_pages={}\nuncovered_pages={}",
        normalize_path(&cli.base_docs),
        normalize_path(&cli.head_docs),
        cli.config
            .as_deref()
            .map(normalize_path)
            .unwrap_or_else(|| "<none>".to_string()),
        if cli.config.is_some() { "flag" } else { "default" },
        format_flag(cli.config.as_deref().is_some_and(Path::exists)),
        options.normalizer.extension(),
        options.normalizer.root_page(),
        report.base_pages,
        report.head_pages,
        report.page_redirects,
        report.removed_pages.len(),
        report.covered_pages.len(),
        report.uncovered_pages.len()
    )
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn format_flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
