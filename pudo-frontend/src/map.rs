//! Leaflet glue: the [`MapAdapter`] implementation driving the actual map
//! widget, plus the browser geolocation entry point.

use std::rc::Rc;

use leaflet::{
    Circle, CircleOptions, Icon, IconOptions, LatLng, Map, MapOptions, Marker, MarkerOptions,
    Point, PopupEvent, TileLayer, TileLayerOptions,
};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};

use pudo_core::{MapAdapter, Viewport};
use pudo_entities::{
    geo::{MapBbox, MapPoint},
    pudo::PickupPoint,
};

const TILE_LAYER_URL: &str =
    "https://cartodb-basemaps-{s}.global.ssl.fastly.net/light_all/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

const PIN_ICON_URL: &str = "/img/pin.svg";
const PIN_ICON_SELECTED_URL: &str = "/img/pin-selected.svg";

const CURRENT_POSITION_RADIUS_M: f64 = 70.0;

/// The pan offset is this fraction of the rendered popup height.
const POPUP_HEIGHT_PAN_DIVISOR: f64 = 1.5;
/// Fallback offset when the popup element cannot be measured.
const POPUP_VERTICAL_OFFSET_PX: f64 = 160.0;

#[wasm_bindgen]
extern "C" {
    /// The `leaflet` crate only binds the two-argument `flyTo`; the
    /// three-argument overload carries the pan options.
    #[wasm_bindgen(extends = Map)]
    type AnimatedMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to_with_options(this: &AnimatedMap, center: &LatLng, zoom: f64, options: &JsValue);
}

/// Callbacks out of the Leaflet event handlers into the page.
pub struct MapHooks {
    pub on_viewport_changed: Rc<dyn Fn()>,
    pub on_marker_opened: Rc<dyn Fn(MapPoint)>,
    pub on_marker_closed: Rc<dyn Fn(MapPoint)>,
}

/// Imperative Leaflet map owning the marker layer objects.
///
/// The reconciliation core decides which markers exist; this type only
/// executes those decisions against the widget.
pub struct LeafletMap {
    map: Map,
    markers: Vec<(MapPoint, Marker)>,
    current_position: Option<Circle>,
    pin_icon: Icon,
    pin_icon_selected: Icon,
}

impl LeafletMap {
    pub fn new(
        container: &web_sys::HtmlDivElement,
        center: MapPoint,
        zoom: f64,
        hooks: &MapHooks,
    ) -> Self {
        let options = MapOptions::default();
        let map = Map::new_with_element(container.as_ref(), &options);
        map.set_view(&LatLng::new(center.lat, center.lng), zoom);

        let tile_options = TileLayerOptions::default();
        tile_options.set_max_zoom(19.0);
        tile_options.set_min_zoom(9.0);
        tile_options.set_attribution(MAP_ATTRIBUTION.to_string());
        TileLayer::new_options(TILE_LAYER_URL, &tile_options).add_to(&map);

        for kind in ["zoomend", "dragend"] {
            let on_viewport_changed = Rc::clone(&hooks.on_viewport_changed);
            let closure = Closure::<dyn FnMut()>::new(move || on_viewport_changed());
            map.on(kind, closure.as_ref().unchecked_ref());
            // handler lives as long as the page
            closure.forget();
        }

        {
            let map = map.clone();
            let on_marker_opened = Rc::clone(&hooks.on_marker_opened);
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let event: PopupEvent = event.unchecked_into();
                let latlng = event.popup().get_lat_lng();
                keep_popup_visible(&map, &latlng);
                on_marker_opened(MapPoint::new(latlng.lat(), latlng.lng()));
            });
            map.on("popupopen", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let on_marker_closed = Rc::clone(&hooks.on_marker_closed);
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let event: PopupEvent = event.unchecked_into();
                let latlng = event.popup().get_lat_lng();
                on_marker_closed(MapPoint::new(latlng.lat(), latlng.lng()));
            });
            map.on("popupclose", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Self {
            map,
            markers: Vec::new(),
            current_position: None,
            pin_icon: pin_icon(PIN_ICON_URL, 49.0, 54.0),
            pin_icon_selected: pin_icon(PIN_ICON_SELECTED_URL, 63.0, 70.0),
        }
    }
}

impl MapAdapter for LeafletMap {
    fn viewport(&self) -> Viewport {
        let center = self.map.get_center();
        let bounds = self.map.get_bounds();
        let sw = bounds.get_south_west();
        let ne = bounds.get_north_east();
        Viewport {
            center: MapPoint::new(center.lat(), center.lng()),
            bounds: MapBbox::new(
                MapPoint::new(sw.lat(), sw.lng()),
                MapPoint::new(ne.lat(), ne.lng()),
            ),
        }
    }

    fn add_marker(&mut self, pudo: &PickupPoint) {
        let options = MarkerOptions::default();
        options.set_icon(self.pin_icon.clone());
        let marker = Marker::new_with_options(&LatLng::new(pudo.pos.lat, pudo.pos.lng), &options);
        marker.bind_popup(&JsValue::from_str(&popup_html(pudo)));
        marker.add_to(&self.map);
        self.markers.push((pudo.pos, marker));
    }

    fn remove_marker(&mut self, at: MapPoint) {
        if let Some(index) = self.markers.iter().position(|(pos, _)| *pos == at) {
            let (_, marker) = self.markers.remove(index);
            marker.remove();
        }
    }

    fn set_marker_selected(&mut self, at: MapPoint, selected: bool) {
        if let Some((_, marker)) = self.markers.iter().find(|(pos, _)| *pos == at) {
            let icon = if selected {
                &self.pin_icon_selected
            } else {
                &self.pin_icon
            };
            marker.set_icon(icon);
        }
    }

    fn fly_to(&mut self, center: MapPoint, zoom: f64, duration_secs: f64) {
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("duration"),
            &JsValue::from_f64(duration_secs),
        );
        self.map
            .unchecked_ref::<AnimatedMap>()
            .fly_to_with_options(&LatLng::new(center.lat, center.lng), zoom, &options);
    }

    fn set_current_position(&mut self, at: MapPoint) {
        if let Some(previous) = self.current_position.take() {
            previous.remove();
        }
        let options = CircleOptions::default();
        options.set_radius(CURRENT_POSITION_RADIUS_M);
        options.set_color("blue".to_string());
        options.set_fill_color("blue".to_string());
        options.set_fill_opacity(0.4);
        options.set_weight(1.0);
        let circle = Circle::new_with_options(&LatLng::new(at.lat, at.lng), &options);
        circle.add_to(&self.map);
        self.current_position = Some(circle);
    }
}

/// Pans just enough that a freshly opened popup stays fully visible. The
/// offset grows with the rendered popup height.
fn keep_popup_visible(map: &Map, at: &LatLng) {
    let px = map.project(at);
    let target = Point::new(px.x(), px.y() - popup_pan_offset(rendered_popup_height()));
    map.pan_to(&map.unproject(&target));
}

/// Height of the popup element once Leaflet has placed it in the DOM. The
/// handler runs after `popupopen`, so the element exists by then.
fn rendered_popup_height() -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let popup = document.query_selector(".leaflet-popup").ok()??;
    let height = f64::from(popup.client_height());
    (height > 0.0).then_some(height)
}

fn popup_pan_offset(popup_height: Option<f64>) -> f64 {
    popup_height.map_or(POPUP_VERTICAL_OFFSET_PX, |height| {
        height / POPUP_HEIGHT_PAN_DIVISOR
    })
}

fn pin_icon(url: &str, width: f64, height: f64) -> Icon {
    let options = IconOptions::default();
    options.set_icon_url(url.to_string());
    options.set_icon_size(Point::new(width, height));
    Icon::new(&options)
}

fn popup_html(pudo: &PickupPoint) -> String {
    format!(
        "<div class=\"pudo-popup\">\
           <b>{name}</b>\
           <div class=\"pudo-popup-address\">{address}</div>\
           <div class=\"pudo-popup-schedule\">{schedule}</div>\
           <a href=\"{directions}\" target=\"_blank\">Cómo llegar</a>\
         </div>",
        name = pudo.name,
        address = pudo.address,
        schedule = pudo.schedule,
        directions = directions_url(&pudo.address),
    )
}

/// Native maps link for the popup's directions button.
fn directions_url(address: &str) -> String {
    let destination = String::from(js_sys::encode_uri_component(address));
    if is_ios() {
        format!("https://maps.apple.com/?daddr={destination}&dirflg=d")
    } else {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={destination}&dir_action=navigate"
        )
    }
}

fn is_ios() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let platform = navigator.platform().unwrap_or_default();
    if matches!(
        platform.as_str(),
        "iPad Simulator" | "iPhone Simulator" | "iPod Simulator" | "iPad" | "iPhone" | "iPod"
    ) {
        return true;
    }
    // iPadOS masquerades as a Mac with a touch screen
    let is_mac = navigator
        .user_agent()
        .map(|agent| agent.contains("Mac"))
        .unwrap_or(false);
    let has_touch = window.document().is_some_and(|document| {
        js_sys::Reflect::has(document.as_ref(), &JsValue::from_str("ontouchend"))
            .unwrap_or(false)
    });
    is_mac && has_touch
}

/// Asks the browser for the device position, invoking `on_found` on
/// success. Denied or unavailable geolocation is silently ignored.
pub fn request_device_position(on_found: impl Fn(MapPoint) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        return;
    };
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |position: JsValue| {
        let position: web_sys::GeolocationPosition = position.unchecked_into();
        let coords = position.coords();
        on_found(MapPoint::new(coords.latitude(), coords.longitude()));
    });
    if geolocation
        .get_current_position(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_offset_follows_popup_height() {
        assert_eq!(popup_pan_offset(Some(240.0)), 160.0);
        assert_eq!(popup_pan_offset(Some(120.0)), 80.0);
        // unmeasurable popup falls back to the fixed offset
        assert_eq!(popup_pan_offset(None), POPUP_VERTICAL_OFFSET_PX);
    }
}
