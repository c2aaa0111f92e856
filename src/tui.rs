//! Interactive review of a rename plan.

pub mod app;
pub mod events;
pub mod models;
pub mod processing;
pub mod rendering;
pub mod utils;

pub use events::review;
