//! Analyze a legal document from the command line.
//!
//! Usage:
//!   nyaya-assist <file> [--lang <language>] [--summarize] [--json]
//!
//! `--lang` translates the summary, so it only has an effect with `--summarize`.
//!
//! Optional environment variables:
//! - OPENAI_API_KEY (summaries and the hosted LLM translation backend)
//! - INDICTRANS_URL (specialized Indic translation server)
//! - TEMPLATE_MODE (annotated | complete)
//! - SUMMARY_DETAIL (simple | detailed)

use anyhow::{Context, Result};
use nyaya_assist::config::Config;
use nyaya_assist::document;
use nyaya_assist::i18n::Language;
use nyaya_assist::report::{AnalysisOptions, DocumentAnalyzer};
use tracing::info;

struct CliArgs {
    path: String,
    target: Option<Language>,
    summarize: bool,
    json: bool,
}

fn print_usage() {
    eprintln!("Usage: nyaya-assist <file> [--lang <language>] [--summarize] [--json]");
    eprintln!("  --lang translates the summary and needs --summarize");
    eprintln!();
    eprintln!("Languages: {}", Language::ALL.map(|l| l.name()).join(", "));
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut path = None;
    let mut target = None;
    let mut summarize = false;
    let mut json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--summarize" => summarize = true,
            "--json" => json = true,
            "--lang" => {
                let value = iter.next().context("--lang needs a language name or code")?;
                target = Some(value.parse::<Language>()?);
            }
            other if other.starts_with("--") => anyhow::bail!("Unknown option: {}", other),
            other => path = Some(other.to_string()),
        }
    }

    Ok(path.map(|path| CliArgs {
        path,
        target,
        summarize,
        json,
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nyaya_assist=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(cli) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    let config = Config::from_env()?;
    let text = document::load_text(&cli.path)?;
    info!("Loaded {} characters from {}", text.chars().count(), cli.path);

    let analyzer = DocumentAnalyzer::from_config(&config).await;
    let report = analyzer
        .analyze(
            &text,
            AnalysisOptions {
                summarize: cli.summarize,
                target: cli.target,
            },
        )
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    info!(
        "Translation metrics: {}",
        serde_json::to_string(&analyzer.orchestrator().metrics().report())?
    );
    Ok(())
}
