mod support;

use async_trait::async_trait;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use bibmap_core::models::LatLng;
use bibmap_core::{
    load_places, FilePlacesSource, HttpPlacesSource, LoadError, Locator, MapSession,
    PlacesSource, ViewSynchronizer,
};
use support::{Alerts, Pins, Rows};

const PLACES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [35.2007, 31.7054] },
      "properties": { "id": "bethlehem", "name": "Bethlehem", "type": "city", "book": "Luke" }
    },
    {
      "type": "Feature",
      "geometry": { "type": "LineString", "coordinates": [[35.3, 32.7], [35.2, 31.7]] },
      "properties": { "name": "Road to Bethlehem" }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [35.3035, 32.6996] },
      "properties": { "id": "nazareth", "name": "Nazareth", "type": "city", "book": "Matthew" }
    }
  ]
}"#;

/// Answer exactly one HTTP request on a local port.
///
/// Returns the URL to fetch and a handle yielding the raw request head.
fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!(
        "http://{}/maps/navigator/places.geojson",
        listener.local_addr().unwrap()
    );
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/geo+json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_lowercase()
    });

    (url, handle)
}

struct FailingSource {
    status: u16,
}

#[async_trait(?Send)]
impl PlacesSource for FailingSource {
    fn locator(&self) -> String {
        "https://example.org/maps/navigator/places.geojson".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Err(LoadError::Status {
            locator: self.locator(),
            status: self.status,
        })
    }
}

#[tokio::test]
async fn test_file_source_loads_point_features() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PLACES.as_bytes()).unwrap();

    let source = FilePlacesSource::new(file.path());
    let places = load_places(&source).await.unwrap();

    let names: Vec<_> = places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bethlehem", "Nazareth"]);
    assert_eq!(places[1].position, LatLng::new(32.6996, 35.3035));
}

#[tokio::test]
async fn test_locator_builds_a_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PLACES.as_bytes()).unwrap();

    let locator = Locator::parse(&file.path().display().to_string());
    let source = locator.source().unwrap();
    assert_eq!(load_places(source.as_ref()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_http_not_found_is_a_status_error() {
    let (url, server) = serve_once("404 Not Found", "missing");
    let source = HttpPlacesSource::new(url.clone()).unwrap();

    let result = load_places(&source).await;
    match result {
        Err(LoadError::Status { locator, status }) => {
            assert_eq!(status, 404);
            assert_eq!(locator, url);
        }
        other => panic!("expected a status error, got {other:?}"),
    }

    let request = server.join().unwrap();
    assert!(request.starts_with("get /maps/navigator/places.geojson"));
    assert!(request.contains("cache-control: no-cache"));
    assert!(request.contains("pragma: no-cache"));
}

#[tokio::test]
async fn test_http_source_parses_the_body() {
    let (url, server) = serve_once("200 OK", PLACES);
    let source = HttpPlacesSource::new(url).unwrap();

    let places = load_places(&source).await.unwrap();
    server.join().unwrap();

    let names: Vec<_> = places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bethlehem", "Nazareth"]);
}

#[tokio::test]
async fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FilePlacesSource::new(dir.path().join("absent.geojson"));

    let result = load_places(&source).await;
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[tokio::test]
async fn test_failed_fetch_leaves_map_empty_with_one_alert() {
    let source = FailingSource { status: 503 };
    let result = load_places(&source).await;
    assert_eq!(result.as_ref().err().and_then(LoadError::status), Some(503));

    let mut session = MapSession::new();
    let mut views = ViewSynchronizer::new(Rows::default(), Pins::default());
    let mut alerts = Alerts::default();
    session.apply_load_result(result, &mut views, &mut alerts);

    assert!(session.places().is_empty());
    assert!(views.list().no_matches);
    assert!(views.list().keys.is_empty());
    assert!(views.map().keys.is_empty());
    assert_eq!(alerts.0, 1);
}
