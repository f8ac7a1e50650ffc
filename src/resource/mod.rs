// Resource layer - generic async data reads for every data-backed view

pub mod loader;


pub use loader::{Producer, ResourceLoader, ResourceSnapshot};
