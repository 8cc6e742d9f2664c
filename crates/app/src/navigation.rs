//! Seam between components and the router.
//!
//! Components never call the router directly: they ask the [`Navigation`]
//! handle in context, which defaults to the Dioxus router.

use dioxus::prelude::*;
use std::rc::Rc;

use crate::routes::Route;

/// A request handed to the navigation facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Add a history entry.
    Push(String),
    /// Swap the current history entry.
    Replace(String),
}

/// Something that can carry out navigation requests.
///
/// Requests are fire-and-forget: failures belong to the implementation.
pub trait Navigate {
    fn submit(&self, request: NavigationRequest);
}

/// Navigation through the Dioxus router. Must be used under `Router`.
pub struct RouterNavigation;

impl Navigate for RouterNavigation {
    fn submit(&self, request: NavigationRequest) {
        let nav = navigator();
        match request {
            NavigationRequest::Push(path) => {
                let _ = nav.push(Route::resolve(&path));
            }
            NavigationRequest::Replace(path) => {
                let _ = nav.replace(Route::resolve(&path));
            }
        }
    }
}

/// Cloneable handle to the active navigation facility.
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigate>);

impl Navigation {
    pub fn new(inner: impl Navigate + 'static) -> Self {
        Self(Rc::new(inner))
    }

    pub fn router() -> Self {
        Self::new(RouterNavigation)
    }

    pub fn push(&self, path: &str) {
        self.0.submit(NavigationRequest::Push(path.to_string()));
    }

    pub fn replace(&self, path: &str) {
        self.0.submit(NavigationRequest::Replace(path.to_string()));
    }
}

impl<N: Navigate + 'static> From<Rc<N>> for Navigation {
    fn from(inner: Rc<N>) -> Self {
        Self(inner)
    }
}

impl PartialEq for Navigation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Navigation provided in context, or the router when none is.
pub fn use_navigation() -> Navigation {
    try_use_context::<Navigation>().unwrap_or_else(Navigation::router)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records requests instead of navigating.
    #[derive(Default)]
    pub struct RecordingNavigation {
        requests: RefCell<Vec<NavigationRequest>>,
    }

    impl RecordingNavigation {
        pub fn requests(&self) -> Vec<NavigationRequest> {
            self.requests.borrow().clone()
        }
    }

    impl Navigate for RecordingNavigation {
        fn submit(&self, request: NavigationRequest) {
            self.requests.borrow_mut().push(request);
        }
    }

    pub fn recording() -> (Navigation, Rc<RecordingNavigation>) {
        let recorder = Rc::new(RecordingNavigation::default());
        (Navigation::from(recorder.clone()), recorder)
    }
}
