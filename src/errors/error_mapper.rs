use bibmap_core::{LoadError, Locator};

/// Map places loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &LoadError, locator: &Locator) -> (String, String, String) {
    match error {
        LoadError::Status { status: 404, .. } => (
            "Places Not Found".to_string(),
            "Map failed to load.".to_string(),
            format!("The places file was not found at:\n{}", locator),
        ),
        LoadError::Status { status, .. } => (
            "Server Error".to_string(),
            "Map failed to load.".to_string(),
            format!("The server answered with HTTP {} for:\n{}", status, locator),
        ),
        LoadError::Transport { source, .. } if source.is_timeout() => (
            "Request Timed Out".to_string(),
            "Map failed to load.".to_string(),
            format!("No answer from {} in time.\n\nCheck your connection and restart.", locator),
        ),
        LoadError::Transport { .. } => (
            "Network Error".to_string(),
            "Map failed to load.".to_string(),
            error.to_string(),
        ),
        LoadError::Io { source, path } if source.kind() == std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "Map failed to load.".to_string(),
            format!(
                "Path: {}\n\nPass --places with the location of places.geojson.",
                path.display()
            ),
        ),
        LoadError::Io { .. } => (
            "Error Reading File".to_string(),
            "Map failed to load.".to_string(),
            error.to_string(),
        ),
        LoadError::Parse(_) => (
            "Invalid Places File".to_string(),
            "Map failed to load.".to_string(),
            format!("{}\n\nThe file must be a GeoJSON FeatureCollection.", error),
        ),
        LoadError::Interrupted(_) => (
            "Error Loading Places".to_string(),
            "Map failed to load.".to_string(),
            error.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_mentions_path() {
        let locator = Locator::parse("maps/navigator/places.geojson");
        let error = LoadError::Io {
            path: PathBuf::from("maps/navigator/places.geojson"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        let (title, message, details) = map_load_error(&error, &locator);
        assert_eq!(title, "File Not Found");
        assert_eq!(message, "Map failed to load.");
        assert!(details.contains("maps/navigator/places.geojson"));
    }

    #[test]
    fn test_http_status() {
        let locator = Locator::parse("https://example.org/places.geojson");
        let not_found = LoadError::Status {
            locator: locator.to_string(),
            status: 404,
        };
        let unavailable = LoadError::Status {
            locator: locator.to_string(),
            status: 503,
        };

        assert_eq!(map_load_error(&not_found, &locator).0, "Places Not Found");
        let (title, _, details) = map_load_error(&unavailable, &locator);
        assert_eq!(title, "Server Error");
        assert!(details.contains("503"));
    }

    #[test]
    fn test_parse_error() {
        let locator = Locator::default();
        let error = LoadError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(map_load_error(&error, &locator).0, "Invalid Places File");
    }
}
