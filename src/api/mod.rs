// API layer - HTTP implementations of the provider seams
//
// One module per backend surface, all sharing the cookie-carrying ApiClient.

pub mod auth;
pub mod client;
pub mod contact;
pub mod profile;
pub mod projects;

pub use auth::HttpIdentityProvider;
pub use client::ApiClient;
pub use contact::HttpMessageProvider;
pub use profile::HttpProfileProvider;
pub use projects::HttpProjectProvider;
