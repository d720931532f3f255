#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::Router;
use neighborhood::{
    app,
    client::{ClientError, MapAdapter, NeighborhoodApi, PinId},
    config::{ApiConfig, FoursquareConfig, OpenWeatherConfig, StaticAssets},
    gateway::ProviderGateway,
    types::{
        dto::geom::LatLng,
        model::{place::Place, weather::Weather},
    },
    AppState,
};
use reqwest::StatusCode;
use wiremock::MockServer;

pub fn place(name: &str, lat: f64, lng: f64) -> Place {
    Place {
        place: name.to_string(),
        description: format!("About {name}"),
        location: LatLng::new(lat, lng),
    }
}

pub fn catalog() -> Vec<Place> {
    vec![
        place("Copacabana Beach", -22.97, -43.18),
        place("Flamengo Park", -22.93, -43.17),
        place("Park Hotel Tower", -22.95, -43.19),
        place("Museu de Arte do Rio", -22.89, -43.18),
    ]
}

pub fn api_config() -> ApiConfig {
    ApiConfig {
        openweather: OpenWeatherConfig {
            key: "ow-key".into(),
        },
        foursquare: FoursquareConfig {
            id: "fs-id".into(),
            key: "fs-secret".into(),
        },
    }
}

/// Router wired to a provider stand-in.
pub fn app_for(providers: &MockServer) -> Router {
    let gateway = ProviderGateway::new(reqwest::Client::new(), api_config())
        .with_base_urls(&providers.uri(), &providers.uri());
    app(AppState::new(catalog(), gateway), &StaticAssets::default())
}

/// Serves `app` on an ephemeral loopback port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(async move { server.await.unwrap() });
    format!("http://{addr}")
}

pub fn weather_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -43.18, "lat": -22.97 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 26.1, "temp_min": 24.0, "temp_max": 28.3, "humidity": 65 },
        "name": "Copacabana"
    })
}

pub fn venues_payload(ids: &[&str]) -> serde_json::Value {
    let venues: Vec<_> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Venue {id}"),
                "categories": [{ "id": "c1", "name": "Beach" }, { "id": "c2", "name": "Surf Spot" }]
            })
        })
        .collect();
    serde_json::json!({ "meta": { "code": 200 }, "response": { "venues": venues } })
}

pub fn photos_payload() -> serde_json::Value {
    serde_json::json!({
        "meta": { "code": 200 },
        "response": { "photos": { "count": 2, "items": [
            { "id": "p1", "prefix": "https://img/", "suffix": "/1.jpg", "width": 100, "height": 50 },
            { "id": "p2", "prefix": "https://img/", "suffix": "/2.jpg", "width": 300, "height": 200 }
        ] } }
    })
}

pub fn sample_weather() -> Weather {
    Weather {
        temp: 26.1,
        temp_min: 24.0,
        temp_max: 28.3,
        description: "clear sky".into(),
        icon: "01d".into(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    AddPin(LatLng),
    Attach(PinId, bool),
    Bounce(PinId, bool),
    Center(LatLng),
    OpenDetails,
    CloseDetails,
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub events: Vec<MapEvent>,
    pub attached: HashMap<PinId, bool>,
}

impl RecordingMap {
    pub fn pins_created(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MapEvent::AddPin(_)))
            .count()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.values().filter(|attached| **attached).count()
    }
}

impl MapAdapter for RecordingMap {
    fn add_pin(&mut self, position: LatLng) -> PinId {
        let pin = PinId(self.attached.len());
        self.attached.insert(pin, true);
        self.events.push(MapEvent::AddPin(position));
        pin
    }

    fn set_pin_attached(&mut self, pin: PinId, attached: bool) {
        self.attached.insert(pin, attached);
        self.events.push(MapEvent::Attach(pin, attached));
    }

    fn set_bouncing(&mut self, pin: PinId, bouncing: bool) {
        self.events.push(MapEvent::Bounce(pin, bouncing));
    }

    fn set_center(&mut self, position: LatLng) {
        self.events.push(MapEvent::Center(position));
    }

    fn open_details(&mut self) {
        self.events.push(MapEvent::OpenDetails);
    }

    fn close_details(&mut self) {
        self.events.push(MapEvent::CloseDetails);
    }
}

/// Call counters and switches shared between a test and its [`FakeApi`].
#[derive(Debug, Default)]
pub struct Calls {
    pub places: AtomicUsize,
    pub weather: AtomicUsize,
    pub photos: AtomicUsize,
    pub fail_places: AtomicBool,
}

impl Calls {
    pub fn places(&self) -> usize {
        self.places.load(Ordering::SeqCst)
    }
}

/// In-memory backend with per-call delays, for driving the view-model under paused time.
pub struct FakeApi {
    pub places: Vec<Place>,
    pub weather: Option<Weather>,
    pub photos: Option<Vec<String>>,
    pub places_delay: Duration,
    pub weather_delay: Duration,
    pub photos_delay: Duration,
    pub calls: Arc<Calls>,
}

impl FakeApi {
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            weather: Some(sample_weather()),
            photos: Some(vec!["https://img/100x50/1.jpg".into()]),
            places_delay: Duration::ZERO,
            weather_delay: Duration::ZERO,
            photos_delay: Duration::ZERO,
            calls: Arc::default(),
        }
    }
}

fn unavailable() -> ClientError {
    ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

impl NeighborhoodApi for FakeApi {
    async fn fetch_places(&self) -> Result<Vec<Place>, ClientError> {
        self.calls.places.fetch_add(1, Ordering::SeqCst);
        if !self.places_delay.is_zero() {
            tokio::time::sleep(self.places_delay).await;
        }
        if self.calls.fail_places.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.places.clone())
    }

    async fn check_weather(&self, _at: LatLng) -> Result<Weather, ClientError> {
        self.calls.weather.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.weather_delay).await;
        self.weather.clone().ok_or_else(unavailable)
    }

    async fn fetch_photos(&self, _at: LatLng) -> Result<Vec<String>, ClientError> {
        self.calls.photos.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.photos_delay).await;
        self.photos.clone().ok_or_else(unavailable)
    }
}
