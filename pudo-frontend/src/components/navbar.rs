use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="navbar">
        <div class="brand">
          <A href=Page::Locator.path()>"PUDO"</A>
        </div>
        <menu class="nav-links">
          <A href=Page::Locator.path()>"Encuentra tu PUDO"</A>
          <A href=Page::Tracking.path()>"Rastrea tu paquete"</A>
        </menu>
      </nav>
    }
}
