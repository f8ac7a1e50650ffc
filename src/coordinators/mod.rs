// Coordinators layer - workflow orchestration
//
// Coordinators compose provider operations for a flow; the rules they enforce
// (validation, single-flight, confirm-before-delete) live in types and state,
// not in the UI.

pub mod login_coordinator;
pub mod mutation_coordinator;


pub use login_coordinator::LoginCoordinator;
pub use mutation_coordinator::MutationCoordinator;
