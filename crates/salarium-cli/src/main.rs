mod table;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use salarium_client::{HhClient, SuperjobClient};
use salarium_core::{Report, collect_report};

const DEFAULT_LANGUAGES: [&str; 8] = [
    "Javascript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
];

#[derive(Parser)]
#[command(
    name = "salarium",
    version,
    about = "Average programmer salaries by language, from HeadHunter and SuperJob"
)]
struct Cli {
    /// City to search vacancies in
    #[arg(short, long, default_value = "Москва")]
    city: String,

    /// Programming languages to report on, in output order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_LANGUAGES.map(String::from)
    )]
    languages: Vec<String>,

    /// SuperJob application key (reads from SUPERJOB_TOKEN env var if not provided)
    #[arg(long, env = "SUPERJOB_TOKEN", hide_env_values = true)]
    superjob_token: Option<String>,

    /// Print reports as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("salarium=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The two sources run in independent error scopes: a failure in one
    // aborts only that source's languages and leaves the other's table
    // intact. No table is printed for a failed source.
    let mut reports = Vec::new();
    let mut failed = Vec::new();

    match run_headhunter(&cli).await {
        Ok(report) => reports.push(report),
        Err(e) => {
            tracing::error!("HeadHunter unavailable, no table will be printed: {e:#}");
            failed.push("HeadHunter");
        }
    }

    match run_superjob(&cli).await {
        Ok(report) => reports.push(report),
        Err(e) => {
            tracing::error!("SuperJob unavailable, no table will be printed: {e:#}");
            failed.push("SuperJob");
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}\n", table::render_report(report));
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("run aborted for: {}", failed.join(", "));
    }

    Ok(())
}

async fn run_headhunter(cli: &Cli) -> Result<Report> {
    let client = HhClient::new().context("Failed to create HeadHunter client")?;
    let report = collect_report(&client, &cli.city, &cli.languages).await?;
    Ok(report)
}

async fn run_superjob(cli: &Cli) -> Result<Report> {
    let token = cli
        .superjob_token
        .as_deref()
        .context("SUPERJOB_TOKEN not set. Required for SuperJob requests.")?;
    let client = SuperjobClient::new(token).context("Failed to create SuperJob client")?;
    let report = collect_report(&client, &cli.city, &cli.languages).await?;
    Ok(report)
}
