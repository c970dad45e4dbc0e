//! QuakeWatch CLI - recent earthquakes with "how long ago" labels and map data

mod logging;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use quakewatch_core::application::{QuakeListService, RelativeTimeFormatter};
use quakewatch_core::domain::{parse_date, MapFocus};
use quakewatch_core::port::{
    FixedTimeProvider, NoGeocoder, ReverseGeocoder, SystemTimeProvider, TimeProvider,
};
use quakewatch_infra_http::geonames::{DEFAULT_FEED_URL, DEFAULT_USERNAME};
use quakewatch_infra_http::{
    create_client, BoundingBox, GeonamesConfig, GeonamesFeed, GoogleGeocoder,
};

#[derive(Parser)]
#[command(name = "quakewatch")]
#[command(about = "Recent earthquakes, how long ago they happened, and where", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GeoNames earthquakes endpoint
    #[arg(long, env = "QUAKEWATCH_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// GeoNames account name
    #[arg(long, env = "QUAKEWATCH_GEONAMES_USER", default_value = DEFAULT_USERNAME)]
    geonames_user: String,

    /// Google Geocoding API key (addresses are skipped without one)
    #[arg(long, env = "QUAKEWATCH_GEOCODER_KEY", hide_env_values = true)]
    geocoder_key: Option<String>,

    /// Bounding box, northern edge (degrees)
    #[arg(long, default_value_t = BoundingBox::default().north, allow_negative_numbers = true)]
    north: f64,

    /// Bounding box, southern edge (degrees)
    #[arg(long, default_value_t = BoundingBox::default().south, allow_negative_numbers = true)]
    south: f64,

    /// Bounding box, eastern edge (degrees)
    #[arg(long, default_value_t = BoundingBox::default().east, allow_negative_numbers = true)]
    east: f64,

    /// Bounding box, western edge (degrees)
    #[arg(long, default_value_t = BoundingBox::default().west, allow_negative_numbers = true)]
    west: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// List recent earthquakes
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show map markers and, optionally, the focus for one list entry
    Map {
        /// List index to center the map on
        #[arg(short, long)]
        select: Option<usize>,
    },

    /// Describe how long ago a date-time was ("YYYY-MM-DD HH:MM:SS +HHMM")
    Ago {
        /// Date-time to describe
        datetime: String,

        /// Compare against this date-time instead of now
        #[arg(short, long)]
        reference: Option<String>,
    },
}

impl Cli {
    fn geonames_config(&self) -> GeonamesConfig {
        GeonamesConfig {
            feed_url: self.feed_url.clone(),
            username: self.geonames_user.clone(),
            bbox: BoundingBox {
                north: self.north,
                south: self.south,
                east: self.east,
                west: self.west,
            },
        }
    }
}

/// Wire the HTTP adapters into the list service
fn build_service(cli: &Cli) -> Result<QuakeListService> {
    let client = create_client()?;

    let feed = Arc::new(GeonamesFeed::new(client.clone(), cli.geonames_config()));

    let geocoder: Arc<dyn ReverseGeocoder> = match cli.geocoder_key.as_deref() {
        Some(key) if !key.is_empty() => Arc::new(GoogleGeocoder::new(client, key)),
        _ => {
            info!("No geocoder key configured, using coordinates as locations");
            Arc::new(NoGeocoder)
        }
    };

    Ok(QuakeListService::new(feed, geocoder))
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging()?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::List { limit } => {
            let service = build_service(&cli)?;
            let board = service.load().await.context("Failed to load earthquakes")?;

            let formatter = RelativeTimeFormatter::new(Arc::new(SystemTimeProvider));
            let mut rows = board.rows(&formatter);
            if let Some(limit) = limit {
                rows.truncate(*limit);
            }

            if board.is_empty() {
                println!("{}", "No earthquakes reported".yellow());
                return Ok(());
            }

            println!(
                "{}",
                render::summary_line(rows.len(), board.len()).green().bold()
            );
            if !rows.is_empty() {
                println!();
                println!("{}", render::quake_table(&rows));
            }
        }

        Commands::Map { select } => {
            let service = build_service(&cli)?;
            let mut board = service.load().await.context("Failed to load earthquakes")?;

            println!(
                "  {} {}",
                "Initial camera:".bold(),
                render::focus_line(&MapFocus::initial())
            );
            println!();
            println!("{}", render::marker_table(&board.markers()));

            if let Some(index) = select {
                let focus = board.select(*index)?;
                if let Some(quake) = board.selected() {
                    println!();
                    println!(
                        "  {} {} [{}] {}",
                        "Focus:".bold(),
                        render::focus_line(&focus),
                        render::severity_badge(quake.severity()),
                        quake.location_label()
                    );
                }
            }
        }

        Commands::Ago {
            datetime,
            reference,
        } => {
            let time_provider: Arc<dyn TimeProvider> = match reference {
                Some(reference) => {
                    let millis = parse_date(reference).context("Invalid --reference")?;
                    Arc::new(FixedTimeProvider(millis))
                }
                None => Arc::new(SystemTimeProvider),
            };

            let formatter = RelativeTimeFormatter::new(time_provider);
            let phrase = formatter
                .format_date_str(datetime)
                .context("Invalid date-time")?;

            println!("{}", phrase);
        }
    }

    Ok(())
}
