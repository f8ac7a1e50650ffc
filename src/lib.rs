// Client core for the portfolio site: session lifecycle, route guarding,
// async resource loading, and admin mutation orchestration.

pub mod api;
pub mod app_data;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod navigation;
pub mod providers;
pub mod resource;
pub mod session;
pub mod types;

#[cfg(test)]
mod test;

pub use app_data::AppData;
