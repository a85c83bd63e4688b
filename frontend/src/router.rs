use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{calendar::Calendar, login::Login, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/users/:user_id/calendar")]
    Calendar { user_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <Login /> },
        Route::Calendar { user_id } => html! { <Calendar {user_id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
