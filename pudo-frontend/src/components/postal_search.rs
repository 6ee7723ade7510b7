use leptos::*;

/// Postal-code input. Submits on Enter or on the button, clears on Escape
/// and never submits an empty code.
#[component]
pub fn PostalCodeSearch(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let submit = move || {
        let Some(input) = input_ref.get() else {
            return;
        };
        let code = input.value();
        let code = code.trim();
        if code.is_empty() {
            return;
        }
        on_search.call(code.to_string());
    };

    view! {
      <div class="postal-search">
        <input
          type="search"
          placeholder="Código postal"
          node_ref=input_ref
          on:keyup=move |ev| {
            ev.stop_propagation();
            match &*ev.key() {
              "Enter" => submit(),
              "Escape" => {
                let target = event_target::<web_sys::HtmlInputElement>(&ev);
                target.set_value("");
              }
              _ => { /* nothing to do */ }
            }
          }
        />
        <button on:click=move |_| submit()>"Buscar"</button>
      </div>
    }
}
