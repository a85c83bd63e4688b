use yew::prelude::*;
use shared::models::Event;

use crate::components::event_item::EventItem;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<Event>,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    if props.events.is_empty() {
        return html! {
            <div class="empty-state">
                <h2>{ "No events yet!" }</h2>
                <p>{ "Events on this calendar will appear here." }</p>
            </div>
        };
    }

    html! {
        <div class="event-list">
            { for props.events.iter().map(|event| {
                html! {
                    <EventItem key={event.key()} event={event.clone()} />
                }
            })}
        </div>
    }
}
