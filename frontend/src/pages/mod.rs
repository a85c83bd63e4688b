pub mod calendar;
pub mod login;
pub mod not_found;
