// Errors layer - taxonomy shared by the session, resource, and mutation flows
//
// Nothing here is fatal to the process; every variant surfaces at the UI
// boundary that owns the operation and stops there.

pub mod api;
pub mod mutation;
pub mod validation;


pub use api::ApiError;
pub use mutation::MutationError;
pub use validation::{FieldError, ValidationError};
