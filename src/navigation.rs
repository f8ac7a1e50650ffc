//! Navigation capability used by the session layer.
//!
//! Session and guard logic never touch a routing table directly; the UI shell
//! supplies a `Navigator` and applies `RouteDecision`s itself.

use parking_lot::Mutex;

/// Minimal navigation surface the session layer can emit effects through.
pub trait Navigator: Send + Sync {
    /// Path the user is currently on.
    fn current_path(&self) -> String;

    /// Replace the current location without growing history.
    fn replace(&self, path: &str);
}

#[derive(Debug)]
struct NavState {
    current: String,
    trail: Vec<String>,
}

/// In-memory navigator for headless shells and tests.
#[derive(Debug)]
pub struct InMemoryNavigator {
    state: Mutex<NavState>,
}

impl InMemoryNavigator {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(NavState {
                current: initial_path.into(),
                trail: Vec::new(),
            }),
        }
    }

    /// Every path passed to `replace`, oldest first.
    pub fn trail(&self) -> Vec<String> {
        self.state.lock().trail.clone()
    }
}

impl Navigator for InMemoryNavigator {
    fn current_path(&self) -> String {
        self.state.lock().current.clone()
    }

    fn replace(&self, path: &str) {
        let mut state = self.state.lock();
        state.current = path.to_string();
        state.trail.push(path.to_string());
    }
}
