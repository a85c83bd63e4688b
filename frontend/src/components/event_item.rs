use yew::prelude::*;
use shared::models::Event;

#[derive(Properties, PartialEq)]
pub struct EventItemProps {
    pub event: Event,
}

#[function_component(EventItem)]
pub fn event_item(props: &EventItemProps) -> Html {
    let event = &props.event;

    // start_time is shown exactly as the API sent it, no parsing.
    html! {
        <div class="event-item">
            <div class="event-title">{ &event.title }</div>
            <div class="event-time">{ &event.start_time }</div>
        </div>
    }
}
