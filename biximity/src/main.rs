use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use biximity::cache::{FileStore, WidgetCache};
use biximity::config::WidgetConfig;
use biximity::domain::Coordinates;
use biximity::gbfs::{DEFAULT_INFO_URL, DEFAULT_STATUS_URL, GbfsClient, GbfsConfig};
use biximity::location::{FixedLocation, Locator};
use biximity::pipeline::Pipeline;

/// Show live availability at the three nearest bike-share stations.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Display language; anything starting with "fr" selects French
    #[arg(long, env = "BIXIMITY_LANG", default_value = "en")]
    lang: String,

    /// Current latitude; without it the last known position is used
    #[arg(long, env = "BIXIMITY_LAT", requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Current longitude
    #[arg(long, env = "BIXIMITY_LON", requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Directory for the fallback cache
    #[arg(long, env = "BIXIMITY_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// GBFS station_information.json URL
    #[arg(long, env = "BIXIMITY_INFO_URL", default_value = DEFAULT_INFO_URL)]
    info_url: String,

    /// GBFS station_status.json URL
    #[arg(long, env = "BIXIMITY_STATUS_URL", default_value = DEFAULT_STATUS_URL)]
    status_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long, env = "BIXIMITY_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Print the panel as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<WidgetConfig> {
        let mut gbfs = GbfsConfig::new(self.info_url, self.status_url);
        if let Some(secs) = self.timeout_secs {
            gbfs = gbfs.with_timeout(secs);
        }

        let mut config = WidgetConfig::default()
            .with_language_parameter(&self.lang)
            .with_gbfs(gbfs);

        if let Some(dir) = self.cache_dir {
            config = config.with_cache_dir(dir);
        }

        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            let coordinates = Coordinates::parse_checked(lat, lon)?;
            config = config.with_coordinates(coordinates);
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let json = args.json;
    let config = args.into_config()?;

    let client = GbfsClient::new(config.gbfs.clone()).context("failed to create GBFS client")?;
    let locator = Locator::new(FixedLocation::new(config.coordinates));
    let cache = WidgetCache::new(FileStore::new(&config.cache_dir));

    let pipeline = Pipeline::new(client, locator, cache);
    let outcome = pipeline.run().await.context("could not fetch stations")?;

    let panel = outcome.into_panel(config.language, Local::now().time());
    if json {
        println!("{}", serde_json::to_string_pretty(&panel.to_dto())?);
    } else {
        print!("{}", panel.render_text());
    }

    Ok(())
}
