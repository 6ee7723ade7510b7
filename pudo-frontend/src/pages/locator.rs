use std::{cell::RefCell, rc::Rc};

use leptos::*;

use pudo_core::{
    begin_refresh, complete_refresh, MapSession, PudoDirectory, RefreshOutcome, RefreshTrigger,
    SessionConfig,
};
use pudo_entities::geo::MapPoint;
use pudo_frontend_api::PudoApi;

use crate::{
    components::PostalCodeSearch,
    map::{self, LeafletMap, MapHooks},
};

// Mexico City
const DEFAULT_CENTER: MapPoint = MapPoint::new(19.4327402, -99.1331565);
const DEFAULT_ZOOM: f64 = 15.0;

const NO_PUDOS_MESSAGE: &str = "No se encontraron PUDOs para la búsqueda realizada.";

/// The Leaflet event handlers are plain JS closures, so the session and the
/// adapter live behind `Rc<RefCell<_>>`. The two-phase refresh keeps any
/// borrow from spanning the lookup await, so overlapping refresh cycles
/// never collide on the cells.
type SharedMap = Rc<RefCell<Option<LeafletMap>>>;
type SharedSession = Rc<RefCell<MapSession>>;

#[component]
pub fn Locator(api: PudoApi) -> impl IntoView {
    let session: SharedSession = Rc::new(RefCell::new(MapSession::new(SessionConfig::default())));
    let map_cell: SharedMap = Rc::default();
    let container = create_node_ref::<html::Div>();

    // -- actions -- //

    let refresh = create_action({
        let session = Rc::clone(&session);
        let map_cell = Rc::clone(&map_cell);
        move |trigger: &RefreshTrigger| {
            let trigger = trigger.clone();
            let session = Rc::clone(&session);
            let map_cell = Rc::clone(&map_cell);
            let api = api.clone();
            async move {
                let cycle = {
                    let mut map = map_cell.borrow_mut();
                    let Some(map) = map.as_mut() else { return };
                    begin_refresh(&mut session.borrow_mut(), map, trigger)
                };
                let found = match api.search(cycle.query()).await {
                    Ok(found) => found,
                    Err(err) => {
                        log::error!("Unable to refresh pickup points: {err}");
                        return;
                    }
                };
                let mut map = map_cell.borrow_mut();
                let Some(map) = map.as_mut() else { return };
                let outcome = complete_refresh(&mut session.borrow_mut(), map, cycle, found);
                if outcome == RefreshOutcome::NothingFound {
                    let _ = window().alert_with_message(NO_PUDOS_MESSAGE);
                }
            }
        }
    });

    // -- callbacks -- //

    let on_search = move |code: String| {
        refresh.dispatch(RefreshTrigger::PostalCode(code));
    };

    let on_geolocate = {
        let session = Rc::clone(&session);
        let map_cell = Rc::clone(&map_cell);
        move |_| {
            let session = Rc::clone(&session);
            let map_cell = Rc::clone(&map_cell);
            map::request_device_position(move |position| {
                if let Some(map) = map_cell.borrow_mut().as_mut() {
                    session.borrow().device_located(map, position);
                }
                refresh.dispatch(RefreshTrigger::ViewportChanged);
            });
        }
    };

    // -- effects -- //

    create_effect({
        let session = Rc::clone(&session);
        let map_cell = Rc::clone(&map_cell);
        move |_| {
            if map_cell.borrow().is_some() {
                return;
            }
            let Some(node) = container.get() else {
                return;
            };
            let hooks = MapHooks {
                on_viewport_changed: Rc::new(move || {
                    refresh.dispatch(RefreshTrigger::ViewportChanged);
                }),
                on_marker_opened: {
                    let session = Rc::clone(&session);
                    let map_cell = Rc::clone(&map_cell);
                    Rc::new(move |at| {
                        if let Some(map) = map_cell.borrow_mut().as_mut() {
                            session.borrow().marker_opened(map, at);
                        }
                    })
                },
                on_marker_closed: {
                    let session = Rc::clone(&session);
                    let map_cell = Rc::clone(&map_cell);
                    Rc::new(move |at| {
                        if let Some(map) = map_cell.borrow_mut().as_mut() {
                            session.borrow().marker_closed(map, at);
                        }
                    })
                },
            };
            let map = LeafletMap::new(&node, DEFAULT_CENTER, DEFAULT_ZOOM, &hooks);
            *map_cell.borrow_mut() = Some(map);
            log::debug!("Leaflet map initialized");
            refresh.dispatch(RefreshTrigger::ViewportChanged);
        }
    });

    view! {
      <section class="locator">
        <div class="locator-controls">
          <PostalCodeSearch on_search />
          <button class="geolocate" on:click=on_geolocate>
            "Usar mi ubicación"
          </button>
        </div>
        <div class="map-container" node_ref=container></div>
      </section>
    }
}
