//! `venue-atlas` command line: inspect the content pipeline without a
//! browser.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use venue_atlas::cms::{
    studio_host_from_lookup, CmsConfig, FallbackPolicy, LoadedContent,
    SanityClient, VenueLoader,
};
use venue_atlas::layout::MarkerLayout;
use venue_atlas::options::Options;
use venue_atlas::venue::VenuePoint;
use venue_atlas::VenueAtlasError;

#[derive(Parser, Debug)]
#[command(name = "venue-atlas")]
#[command(about = "Venue map content and layout tooling")]
#[command(version)]
struct Cli {
    /// Options preset (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch venues, relax markers for a viewport and print them as JSON.
    Layout {
        /// Viewport width in pixels.
        #[arg(short, long, default_value = "1440")]
        width: f32,
        /// Show nothing instead of the bundled venues when the CMS fails.
        #[arg(long)]
        no_fallback: bool,
    },
    /// Print the `<head>` tags for the site settings.
    Head,
    /// Print the options JSON Schema.
    Schema,
    /// Print the default options as TOML.
    Defaults,
    /// Print the configured studio hostname.
    StudioHost,
}

fn load_content(
    options: &Options,
    policy: FallbackPolicy,
) -> Result<LoadedContent, VenueAtlasError> {
    let config = CmsConfig::from_env()?;
    if config.is_none() {
        log::warn!("SANITY_PROJECT_ID not set; using bundled content");
    }
    let loader = VenueLoader::new(options.map.bounds, policy);
    let pending = loader.spawn(move || config.map(SanityClient::new))?;
    pending.wait().ok_or_else(|| {
        VenueAtlasError::Http("content loader stopped without a result".to_owned())
    })
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), VenueAtlasError> {
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    match cli.command {
        Command::Layout { width, no_fallback } => {
            let policy = if no_fallback {
                FallbackPolicy::Empty
            } else {
                FallbackPolicy::Bundled
            };
            let content = load_content(&options, policy)?;
            log::info!("venues: {} ({:?})", content.venues.len(), content.status);

            let mut layout =
                MarkerLayout::new(options.layout.clone(), options.map.bounds);
            layout.set_venues(content.venues.into_iter().map(Into::into).collect());
            log::debug!("min distance {}", layout.min_distance(width));
            let markers: Vec<&VenuePoint> = layout
                .layout_for_viewport(width)
                .iter()
                .map(AsRef::as_ref)
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&markers)?)?;
        }
        Command::Head => {
            let content = load_content(&options, FallbackPolicy::Empty)?;
            let settings = content.settings.unwrap_or_default();
            writeln!(out, "{}", settings.head_tags())?;
        }
        Command::Schema => {
            let schema = Options::json_schema();
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        }
        Command::Defaults => {
            write!(out, "{}", Options::default().to_toml()?)?;
        }
        Command::StudioHost => {
            let host = studio_host_from_lookup(|key| std::env::var(key).ok())?;
            writeln!(out, "{host}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
