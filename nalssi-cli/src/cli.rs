use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use nalssi_core::{Config, WeatherReport, city, fetch_report, provider::provider_from_config};
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nalssi", version, about = "Current weather and 5-day forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and response language.
    Configure,

    /// Show weather for a city. Korean city names are translated.
    Show {
        /// City name, e.g. "Seoul" or "서울".
        city: String,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also write the report as an HTML page to this path.
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Response language for descriptions (overrides config).
        #[arg(long)]
        lang: Option<String>,
    },

    /// List popular cities and the recognized Korean names.
    Cities,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json, html, lang } => {
                let mut cfg = Config::load()?.with_env_overrides();
                if lang.is_some() {
                    cfg.lang = lang;
                }
                show(&cfg, &city, json, html).await
            }
            Command::Cities => {
                print_cities();
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    cfg.set_api_key(api_key);

    let lang = Text::new("Response language:")
        .with_default(cfg.lang())
        .prompt()
        .context("Failed to read language")?;
    cfg.lang = Some(lang.trim().to_string());

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(cfg: &Config, city: &str, json: bool, html: Option<PathBuf>) -> anyhow::Result<()> {
    let provider = provider_from_config(cfg)?;

    let report = match fetch_report(provider.as_ref(), city).await {
        Ok(report) => report,
        Err(e) if e.is_fetch_failure() => {
            debug!(city, error = %e, "Lookup failed");
            let message = e.user_message();
            println!("❌ {message}");
            if let Some(path) = html {
                write_page(&path, &render::render_html_error(city, &message)?)?;
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_report(&report, cfg.lang(), json)?;

    if let Some(path) = html {
        write_page(&path, &render::render_html(&report, cfg.lang())?)?;
    }

    Ok(())
}

fn print_report(report: &WeatherReport, lang: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        print!("{}", render::render_text(report, lang)?);
    }
    Ok(())
}

fn write_page(path: &Path, page: &str) -> anyhow::Result<()> {
    fs::write(path, page)
        .with_context(|| format!("Failed to write HTML page: {}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn print_cities() {
    println!("Popular cities:");
    for name in city::POPULAR_CITIES {
        println!("  {name}");
    }

    println!();
    println!("Recognized Korean names:");
    for (native, english) in city::known_cities() {
        println!("  {native} → {english}");
    }
}
