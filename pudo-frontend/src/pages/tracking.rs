use leptos::*;
use leptos_router::use_query_map;
use time::{format_description::FormatItem, macros::format_description};

use pudo_entities::parcel::{Parcel, StatusRecord, TrackingId};
use pudo_frontend_api::PudoApi;

const TRACKING_ID_PARAM: &str = "trackingid";

const LOOKUP_FAILED_MESSAGE: &str =
    "No pudimos encontrar información para el número de rastreo proporcionado.";

#[component]
pub fn Tracking(api: PudoApi) -> impl IntoView {
    // -- signals -- //

    let parcel = create_rw_signal(None::<Parcel>);
    let error = create_rw_signal(false);

    // -- actions -- //

    let fetch_parcel = create_action(move |tracking: &TrackingId| {
        let tracking = tracking.clone();
        let api = api.clone();
        async move {
            match api.parcel(tracking.as_str()).await {
                Ok(response) => match Parcel::try_from(response.detail) {
                    Ok(found) => {
                        error.set(false);
                        parcel.set(Some(found));
                    }
                    Err(err) => {
                        log::warn!("Discarding malformed tracking response: {err}");
                        parcel.set(None);
                        error.set(true);
                    }
                },
                Err(err) => {
                    log::warn!("Unable to fetch parcel: {err}");
                    parcel.set(None);
                    error.set(true);
                }
            }
        }
    });

    // -- effects -- //

    let query = use_query_map();
    create_effect(move |_| {
        let raw = query.with(|q| q.get(TRACKING_ID_PARAM).cloned());
        match raw.map(TrackingId::new) {
            Some(Ok(tracking)) => {
                fetch_parcel.dispatch(tracking);
            }
            Some(Err(err)) => {
                log::warn!("Rejecting tracking query: {err}");
                error.set(true);
            }
            None => {
                error.set(true);
            }
        }
    });

    view! {
      <section class="tracking">
        <Show when=move || error.get()>
          <div class="tracking-error">
            <p>{LOOKUP_FAILED_MESSAGE}</p>
          </div>
        </Show>
        {move || parcel.get().map(|parcel| view! { <TrackingSummary parcel /> })}
      </section>
    }
}

#[component]
fn TrackingSummary(parcel: Parcel) -> impl IntoView {
    // Most recent event first, matching the courier's status page. The
    // latest entry is shown as the current state, older ones as history.
    let mut history = parcel.history;
    history.reverse();
    let current = history.first().cloned();
    let older: Vec<StatusRecord> = history.into_iter().skip(1).collect();

    let destination = parcel.destination;

    view! {
      <div class="tracking-summary">
        <header class="tracking-header">
          <h2>"Número de rastreo: " {parcel.tracking.as_str().to_string()}</h2>
          <p class="current-status">
            {parcel.status.label()}
            {current.map(|record| view! { <span class="status-when">{format_when(&record)}</span> })}
          </p>
          <p class="destination-name">{destination.name}</p>
          <p class="destination-address">{destination.address}</p>
          <p class="destination-schedule">{destination.schedule}</p>
        </header>
        <h3>"Historial"</h3>
        <ol class="status-history">
          <For
            each=move || older.clone()
            key=|record| (record.status, record.when)
            let:record
          >
            <li class="status-entry">
              <span class="status-label">{record.status.label()}</span>
              <span class="status-when">{format_when(&record)}</span>
            </li>
          </For>
        </ol>
      </div>
    }
}

const WHEN_FORMAT: &[FormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

fn format_when(record: &StatusRecord) -> String {
    record
        .when
        .format(WHEN_FORMAT)
        .unwrap_or_else(|_| record.when.to_string())
}
