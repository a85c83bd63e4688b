mod components;
mod pages;
mod services;
mod router;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};
use crate::services::api::ApiClient;

/// Development default; the client itself only ever sees the injected value.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| ApiClient::new(DEFAULT_BASE_URL));

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <BrowserRouter>
                <div id="app">
                    <components::header::Header />
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
