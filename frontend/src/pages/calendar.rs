use yew::prelude::*;
use shared::models::Event;

use crate::components::event_list::EventList;
use crate::services::api::ApiClient;

/// What the screen currently knows about its fetch.
#[derive(Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded(Vec<Event>),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub user_id: String,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context not provided");
    let state = use_state(|| FetchState::Loading);
    let generation = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let generation = generation.clone();

        use_effect_with(props.user_id.clone(), move |user_id| {
            let user_id = user_id.clone();

            // Each run gets its own generation; a fetch whose generation is
            // stale by resolution time lost to a newer one and is discarded.
            *generation.borrow_mut() += 1;
            let current = *generation.borrow();

            state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.user_events(&user_id).await;
                if *generation.borrow() != current {
                    return;
                }

                match result {
                    Ok(events) => state.set(FetchState::Loaded(events)),
                    Err(e) => {
                        tracing::error!("Failed to fetch events: {}", e);
                        state.set(FetchState::Failed(e.message));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="container">
            <h2>{ "Events" }</h2>
            {
                match &*state {
                    FetchState::Loading => html! {
                        <div class="loading">
                            <div class="spinner"></div>
                        </div>
                    },
                    FetchState::Loaded(events) => html! {
                        <EventList events={events.clone()} />
                    },
                    FetchState::Failed(message) => html! {
                        <div class="error-state">
                            <p>{ message }</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
