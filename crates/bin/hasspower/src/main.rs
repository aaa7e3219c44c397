//! # hasspower — Home Assistant power skill
//!
//! Composition root that wires all adapters together and runs one voice
//! command.
//!
//! ## Responsibilities
//! - Parse CLI arguments and load configuration (file + env vars)
//! - Initialise logging on stderr (stdout carries the outcome)
//! - Read the intent document (file or stdin)
//! - Construct adapters and inject them into `PowerService`
//! - Print the resulting outcome as JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod intent;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hasspower_adapter_http_reqwest::ReqwestHttpClient;
use hasspower_adapter_locale_json::JsonLocalizer;
use hasspower_app::ports::{ConfigProvider, HttpClient, Localizer};
use hasspower_app::services::power_service::PowerService;
use hasspower_domain::outcome::Outcome;

use crate::config::Config;
use crate::intent::{Intent, SkillAction};

/// Forward a recognized voice command to Home Assistant.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (defaults to `hasspower.toml` when present).
    #[arg(short, long, env = "HASSPOWER_CONFIG")]
    config: Option<PathBuf>,

    /// Intent document; read from stdin when omitted.
    intent: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.logging.filter);

    let intent = Intent::read(cli.intent.as_deref()).context("reading intent")?;
    let action = intent.skill_action()?;
    tracing::debug!(?action, query = %intent.query, "intent received");

    let lang = intent
        .lang
        .clone()
        .unwrap_or_else(|| config.locale.default_lang.clone());
    let localizer = JsonLocalizer::bundled(&lang).context("loading translations")?;
    let http = ReqwestHttpClient::new(&config.http_client()).context("building HTTP client")?;
    let service = PowerService::new(config, localizer, http);

    let outcome = run(&service, action, &intent).await;
    write_outcome(std::io::stdout().lock(), &outcome)
}

async fn run<C, L, H>(service: &PowerService<C, L, H>, action: SkillAction, intent: &Intent) -> Outcome
where
    C: ConfigProvider,
    L: Localizer,
    H: HttpClient,
{
    match action {
        SkillAction::PowerOn => service.power_on(&intent.query, &intent.entities).await,
        SkillAction::PowerOff => service.power_off(&intent.query, &intent.entities).await,
        SkillAction::CheckConnection => service.check_connection().await,
    }
}

/// Write `outcome` as one line of JSON.
fn write_outcome(mut out: impl Write, outcome: &Outcome) -> anyhow::Result<()> {
    serde_json::to_writer(&mut out, outcome)?;
    writeln!(out)?;
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
