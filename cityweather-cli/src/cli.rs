use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use cityweather_core::{
    ClientError, Config, Fetched, HttpBackend, PageLoad, PageState, Paginator, WeatherCard,
    WeatherLookup, WeatherReport, backend_from_config, view,
};
use tracing::{debug, warn};

use crate::browse;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Browse cities and look up their weather")]
pub struct Cli {
    /// Backend API root, overriding the configured one.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Cities per page, overriding the configured size.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the city list.
    Cities {
        /// 1-based page number.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show the weather for a city.
    Weather {
        /// City name as listed by `cities`.
        city: String,
    },

    /// Page through cities and look up weather interactively.
    Browse,

    /// Set the backend URL and page size.
    Configure {
        /// Print the config file location and effective settings instead.
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.effective_config()?;
        debug!(base_url = config.base_url(), page_size = config.page_size(), "effective config");

        match self.command {
            Command::Cities { page } => {
                let backend = Arc::new(backend_from_config(&config)?);
                print_page(backend, config.page_size(), page).await
            }
            Command::Weather { city } => {
                let backend = Arc::new(backend_from_config(&config)?);
                print_weather(backend, &city).await
            }
            Command::Browse => {
                let backend = Arc::new(backend_from_config(&config)?);
                browse::run(backend, config.page_size()).await
            }
            Command::Configure { show: true } => show_config(&config),
            Command::Configure { show: false } => configure(),
        }
    }

    /// Config from disk with command-line overrides applied on top.
    fn effective_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load()?;

        if let Some(url) = &self.base_url {
            config.set_base_url(url)?;
        }
        if let Some(size) = self.page_size {
            config.set_page_size(size)?;
        }

        Ok(config)
    }
}

async fn print_page(backend: Arc<HttpBackend>, page_size: u32, page: u32) -> anyhow::Result<()> {
    eprintln!("{}", view::LOADING_CITIES);

    let paginator = Paginator::new(backend);
    let load = loaded_page(paginator.load_page(&PageState::new(page_size), page).await, page)?;

    if let Some(label) = load.state.label() {
        println!("{label}");
    }
    for city in &load.cities {
        println!("  {}", city.label());
    }

    Ok(())
}

async fn print_weather(backend: Arc<HttpBackend>, city: &str) -> anyhow::Result<()> {
    eprintln!("{}", view::FETCHING_WEATHER);

    let lookup = WeatherLookup::new(backend);
    let report = looked_up(lookup.lookup(city).await, city)?;
    println!("{}", WeatherCard(&report));

    Ok(())
}

/// A one-shot command has nothing newer to show, so a superseded page is a failure.
fn loaded_page(
    result: Result<Fetched<PageLoad>, ClientError>,
    page: u32,
) -> anyhow::Result<PageLoad> {
    match result {
        Ok(Fetched::Current(load)) => Ok(load),
        Ok(Fetched::Superseded) => {
            warn!(page, "city page response was superseded");
            bail!(view::CITIES_UNAVAILABLE)
        }
        Err(_) => bail!(view::CITIES_UNAVAILABLE),
    }
}

fn looked_up(
    result: Result<Fetched<WeatherReport>, ClientError>,
    city: &str,
) -> anyhow::Result<WeatherReport> {
    match result {
        Ok(Fetched::Current(report)) => Ok(report),
        Ok(Fetched::Superseded) => {
            warn!(city, "weather response was superseded");
            bail!(view::WEATHER_UNAVAILABLE)
        }
        Err(e) => bail!(view::weather_failure(&e)),
    }
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    println!("Config file: {}", Config::config_file_path()?.display());
    println!("Base URL:    {}", config.base_url());
    println!("Page size:   {}", config.page_size());
    Ok(())
}

/// Prompt for settings and save them. Command-line overrides are not persisted.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = inquire::Text::new("Backend API URL:")
        .with_default(config.base_url())
        .prompt()?;
    config.set_base_url(&url)?;

    let page_size = inquire::CustomType::<u32>::new("Cities per page:")
        .with_default(config.page_size())
        .with_error_message("Please enter a whole number")
        .prompt()?;
    config.set_page_size(page_size)?;

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());

    Ok(())
}
