use anyhow::{anyhow, Context};
use bibmap_core::{Locator, DEFAULT_PLACES_LOCATOR};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// BibleMapped - browse Bible places on a map
#[derive(Parser, Debug)]
#[command(name = "bibmap")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Places dataset: an http(s) URL or a path to a GeoJSON file
    #[arg(long, env = "BIBMAP_PLACES", value_name = "LOCATOR", default_value = DEFAULT_PLACES_LOCATOR)]
    pub places: String,

    /// Log filter, e.g. "info" or "bibmap_core=debug"
    #[arg(long, env = "BIBMAP_LOG", value_name = "FILTER", default_value = "info")]
    pub log: String,
}

impl Config {
    pub fn locator(&self) -> Locator {
        Locator::parse(&self.places)
    }
}

/// Install the global log subscriber.
pub fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["bibmap"]).unwrap();
        assert_eq!(config.places, DEFAULT_PLACES_LOCATOR);
        assert_eq!(config.log, "info");
    }

    #[test]
    fn test_url_locator() {
        let config =
            Config::try_parse_from(["bibmap", "--places", "https://example.org/places.geojson"])
                .unwrap();
        assert!(matches!(config.locator(), Locator::Http(_)));
    }

    #[test]
    fn test_bad_log_filter_is_rejected() {
        assert!(init_tracing("bibmap=loud").is_err());
    }
}
