pub mod event_item;
pub mod event_list;
pub mod header;
