//! Application pages

pub mod home;
pub mod login;
pub mod what_to_watch;
