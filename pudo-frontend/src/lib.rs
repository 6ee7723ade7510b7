use leptos::*;
use leptos_router::*;

use pudo_frontend_api::PudoApi;

mod components;
mod map;
mod pages;

use self::{components::*, pages::*};

const DEFAULT_API_URL: &str = "/api/web/v1";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let api = PudoApi::new(DEFAULT_API_URL.to_string());

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Locator.path()
              view={
                let api = api.clone();
                move || view! { <Locator api=api.clone() /> }
              }
            />
            <Route
              path=Page::Tracking.path()
              view=move || view! { <Tracking api=api.clone() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
