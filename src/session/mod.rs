// Session layer - authentication lifecycle and the route guard derived from it

pub mod guard;
pub mod manager;


pub use guard::{RouteDecision, RouteGuard};
pub use manager::{SessionManager, SessionStatus};
