use std::{fmt::Display, sync::Arc, time::Duration};

use futures::future::join;
use tokio::{sync::Mutex, task::JoinHandle, time::Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::{
    api::{ClientError, NeighborhoodApi},
    map::{MapAdapter, MapError, PinId},
    marker::{Marker, MarkerState},
    notify::Notifications,
    search::SearchFilter,
};

/// How long a pin bounces before its details open.
pub const BOUNCE_DELAY: Duration = Duration::from_millis(1300);

#[derive(Debug, Clone)]
struct MapPin {
    place: String,
    pin: PinId,
}

#[derive(Debug)]
struct DetailView {
    place: String,
    token: CancellationToken,
}

#[derive(Debug, Default)]
struct ViewState {
    markers: Vec<Marker>,
    pins: Vec<MapPin>,
    search_text: String,
    current_place: Option<String>,
    detail_view: Option<DetailView>,
    notifications: Notifications,
}

impl ViewState {
    fn marker(&self, place: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.place == place)
    }

    fn marker_mut(&mut self, place: &str) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.place == place)
    }

    fn raise(&mut self, message: &str, cause: &dyn Display) {
        warn!(%cause, "{message}");
        self.notifications.error(message);
    }
}

/// Weather and photo fetches started by opening a marker's details.
#[derive(Debug)]
pub struct Activation {
    weather: JoinHandle<()>,
    photos: JoinHandle<()>,
}

impl Activation {
    /// Waits for both fetches. Each one has already updated its marker field on its own.
    pub async fn settled(self) {
        let (weather, photos) = join(self.weather, self.photos).await;
        for result in [weather, photos] {
            if let Err(err) = result {
                warn!("marker fetch task failed: {err}");
            }
        }
    }
}

/// State behind the neighborhood map: markers, their pins, the search box and the open detail
/// view. Passed around explicitly; there is one per page session.
pub struct MapViewModel<A, M> {
    api: Arc<A>,
    map: Arc<Mutex<M>>,
    state: Arc<Mutex<ViewState>>,
    bounce_delay: Duration,
}

impl<A, M> MapViewModel<A, M>
where
    A: NeighborhoodApi,
    M: MapAdapter,
{
    pub fn new(api: A, map: M) -> Self {
        Self {
            api: Arc::new(api),
            map: Arc::new(Mutex::new(map)),
            state: Arc::new(Mutex::new(ViewState::default())),
            bounce_delay: BOUNCE_DELAY,
        }
    }

    /// Builds the view-model and plots the catalog, as a page load does.
    pub async fn load(api: A, map: M) -> Self {
        let view_model = Self::new(api, map);
        view_model.fetch_marker_list().await;
        view_model
    }

    pub fn with_bounce_delay(mut self, bounce_delay: Duration) -> Self {
        self.bounce_delay = bounce_delay;
        self
    }

    pub fn map(&self) -> &Arc<Mutex<M>> {
        &self.map
    }

    pub async fn markers(&self) -> Vec<Marker> {
        self.state.lock().await.markers.clone()
    }

    pub async fn marker(&self, place: &str) -> Option<Marker> {
        self.state.lock().await.marker(place).cloned()
    }

    pub async fn current_place(&self) -> Option<Marker> {
        let state = self.state.lock().await;
        state
            .current_place
            .as_deref()
            .and_then(|place| state.marker(place))
            .cloned()
    }

    pub async fn search_text(&self) -> String {
        self.state.lock().await.search_text.clone()
    }

    /// Error messages currently on screen.
    pub async fn notifications(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state
            .notifications
            .active(Instant::now())
            .map(|n| n.message.clone())
            .collect()
    }

    /// Fetches the catalog; markers are only created the first time, one per place name.
    #[instrument(skip(self))]
    pub async fn fetch_marker_list(&self) {
        let places = self.api.fetch_places().await;
        let mut state = self.state.lock().await;
        match places {
            Ok(places) => {
                if state.markers.is_empty() {
                    for place in places {
                        if state.marker(&place.place).is_none() {
                            state.markers.push(Marker::from(place));
                        }
                    }
                    info!("Created {} markers", state.markers.len());
                }
                self.plot(&mut state).await;
            }
            Err(err) => state.raise("Error retrieving places data.", &err),
        }
    }

    pub async fn plot_map_markers(&self) {
        let mut state = self.state.lock().await;
        self.plot(&mut state).await;
    }

    // First call creates the pins, later calls only attach or detach them.
    async fn plot(&self, state: &mut ViewState) {
        let mut map = self.map.lock().await;
        if state.pins.is_empty() {
            let ViewState { markers, pins, .. } = state;
            for marker in markers.iter() {
                let pin = map.add_pin(marker.location);
                pins.push(MapPin {
                    place: marker.place.clone(),
                    pin,
                });
            }
        } else {
            for pin in &state.pins {
                let visible = state.marker(&pin.place).is_some_and(|m| m.is_visible);
                map.set_pin_attached(pin.pin, visible);
            }
        }
    }

    pub async fn reset_markers(&self) {
        let mut state = self.state.lock().await;
        for marker in state.markers.iter_mut() {
            marker.is_visible = true;
        }
        self.plot(&mut state).await;
    }

    pub async fn set_search_text(&self, text: &str) {
        self.state.lock().await.search_text = text.to_string();
        self.filter_markers().await;
    }

    /// Recomputes marker visibility from the search text. An empty search refetches the catalog
    /// first.
    #[instrument(skip(self))]
    pub async fn filter_markers(&self) {
        if self.state.lock().await.search_text.is_empty() {
            self.fetch_marker_list().await;
        }

        // The text may have changed while the catalog was refetched.
        let mut state = self.state.lock().await;
        let filter = SearchFilter::new(&state.search_text);
        for marker in state.markers.iter_mut() {
            marker.is_visible = filter.matches(&marker.place);
        }
        self.plot(&mut state).await;
    }

    /// List entry clicked: centre on the place and open it. Needs exactly one pin for the name.
    pub async fn show_marker(&self, place: &str) -> Option<Activation> {
        let pin = {
            let mut state = self.state.lock().await;
            let mut matching = state.pins.iter().filter(|p| p.place == place);
            let pin = match (matching.next(), matching.next()) {
                (Some(pin), None) => pin.pin,
                _ => return None,
            };
            let location = state.marker(place)?.location;
            state.current_place = Some(place.to_string());
            self.map.lock().await.set_center(location);
            pin
        };
        self.animate_marker(pin, place).await
    }

    /// Map pin clicked.
    pub async fn select_pin(&self, pin: PinId) -> Option<Activation> {
        let place = {
            let mut state = self.state.lock().await;
            let place = state.pins.iter().find(|p| p.pin == pin)?.place.clone();
            state.current_place = Some(place.clone());
            place
        };
        self.animate_marker(pin, &place).await
    }

    /// Map widget failed to load or rejected its credentials.
    pub async fn report_map_error(&self, error: MapError) {
        let mut state = self.state.lock().await;
        warn!(%error, "map unavailable");
        state.notifications.error(error.message());
    }

    /// Closes the detail view. Fetches still in flight for it are dropped.
    pub async fn dismiss_details(&self) {
        let mut state = self.state.lock().await;
        if let Some(view) = state.detail_view.take() {
            view.token.cancel();
            if let Some(marker) = state.marker_mut(&view.place) {
                if marker.state == MarkerState::Loading {
                    marker.state = MarkerState::Unselected;
                }
            }
        }
        state.current_place = None;
        self.map.lock().await.close_details();
    }

    #[instrument(skip(self))]
    async fn animate_marker(&self, pin: PinId, place: &str) -> Option<Activation> {
        let (location, token) = {
            let mut state = self.state.lock().await;
            let location = state.marker(place)?.location;
            let token = CancellationToken::new();
            let previous = state.detail_view.replace(DetailView {
                place: place.to_string(),
                token: token.clone(),
            });
            if let Some(previous) = previous {
                previous.token.cancel();
                if let Some(marker) = state.marker_mut(&previous.place) {
                    if marker.state == MarkerState::Loading {
                        marker.state = MarkerState::Unselected;
                    }
                }
            }
            if let Some(marker) = state.marker_mut(place) {
                marker.state = MarkerState::Loading;
            }
            (location, token)
        };

        self.map.lock().await.set_bouncing(pin, true);
        tokio::time::sleep(self.bounce_delay).await;
        {
            let mut map = self.map.lock().await;
            map.set_bouncing(pin, false);
            if token.is_cancelled() {
                debug!("detail view replaced during bounce");
                return None;
            }
            map.open_details();
        }

        let weather = {
            let (api, state, place, token) = (
                self.api.clone(),
                self.state.clone(),
                place.to_string(),
                token.clone(),
            );
            tokio::spawn(async move {
                let result = tokio::select! {
                    _ = token.cancelled() => return,
                    result = api.check_weather(location) => result,
                };
                settle(&state, &place, &token, result, "Error retrieving weather data.", |m, w| {
                    m.weather = Some(w)
                })
                .await;
            })
        };
        let photos = {
            let (api, state, place) = (self.api.clone(), self.state.clone(), place.to_string());
            tokio::spawn(async move {
                let result = tokio::select! {
                    _ = token.cancelled() => return,
                    result = api.fetch_photos(location) => result,
                };
                settle(&state, &place, &token, result, "Error retrieving photo data.", |m, p| {
                    m.photos = p
                })
                .await;
            })
        };

        Some(Activation { weather, photos })
    }
}

// Applies one fetch result to its marker unless the detail view it belongs to is gone.
async fn settle<T>(
    state: &Mutex<ViewState>,
    place: &str,
    token: &CancellationToken,
    result: Result<T, ClientError>,
    failure: &str,
    apply: impl FnOnce(&mut Marker, T),
) {
    let mut state = state.lock().await;
    if token.is_cancelled() {
        debug!(place, "detail view dismissed, dropping result");
        return;
    }
    match result {
        Ok(value) => {
            if let Some(marker) = state.marker_mut(place) {
                apply(marker, value);
                marker.state = MarkerState::Loaded;
            }
        }
        Err(err) => state.raise(failure, &err),
    }
}
