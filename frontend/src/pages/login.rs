use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::services::api::ApiClient;

#[function_component(Login)]
pub fn login() -> Html {
    let client = use_context::<ApiClient>().expect("ApiClient context not provided");
    let navigator = use_navigator().expect("navigator not available");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let client = client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let email = (*email).clone();
            let password = (*password).clone();

            wasm_bindgen_futures::spawn_local(async move {
                match client.login(&email, &password).await {
                    Ok(response) => {
                        tracing::info!("Logged in as user {}", response.user_id);
                        navigator.push(&Route::Calendar {
                            user_id: response.user_id.to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::error!("Login failed: {}", e);
                        error.set(Some(e.message));
                    }
                }
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "Sign In" }</h2>
            <form class="login-form" {onsubmit}>
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit" class="btn btn-primary">{ "Log In" }</button>
            </form>
            if let Some(message) = &*error {
                <div class="error-state">
                    <p>{ message }</p>
                </div>
            }
        </div>
    }
}
