pub mod dashboards;
pub mod ecolearn;
pub mod landing;
pub mod not_found;

use dioxus::prelude::*;

use dashboards::{AdminPortal, CitizenDashboard, DriverDashboard};
use ecolearn::{EcoLearn, EcoLearnAdmin, EcoLearnCitizen, EcoLearnDriver};
use landing::Landing;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/citizen")]
    CitizenDashboard {},
    #[route("/driver")]
    DriverDashboard {},
    #[route("/admin")]
    AdminPortal {},
    // ── EcoLearn ──
    #[route("/ecolearn")]
    EcoLearn {},
    #[route("/ecolearn/citizen")]
    EcoLearnCitizen {},
    #[route("/ecolearn/driver")]
    EcoLearnDriver {},
    #[route("/ecolearn/admin")]
    EcoLearnAdmin {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Resolve a path string against the route table.
    ///
    /// Paths that match nothing land on [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Route::NotFound {
            route: path
                .trim_start_matches('/')
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ecolearn_path_for, ALL_ROLES, ROOT_PATH};

    #[test]
    fn ecolearn_paths_resolve_to_gated_routes() {
        assert_eq!(Route::resolve("/ecolearn/citizen"), Route::EcoLearnCitizen {});
        assert_eq!(Route::resolve("/ecolearn/driver"), Route::EcoLearnDriver {});
        assert_eq!(Route::resolve("/ecolearn/admin"), Route::EcoLearnAdmin {});
        assert_eq!(Route::resolve(ecolearn_path_for("unknown")), Route::EcoLearn {});
    }

    #[test]
    fn home_paths_resolve_to_portals() {
        assert_eq!(Route::resolve("/citizen"), Route::CitizenDashboard {});
        assert_eq!(Route::resolve("/driver"), Route::DriverDashboard {});
        assert_eq!(Route::resolve("/admin"), Route::AdminPortal {});
        assert_eq!(Route::resolve(ROOT_PATH), Route::Landing {});
    }

    #[test]
    fn role_paths_round_trip_through_route_table() {
        for role in ALL_ROLES {
            assert_eq!(Route::resolve(role.ecolearn_path()).to_string(), role.ecolearn_path());
            assert_eq!(Route::resolve(role.home_path()).to_string(), role.home_path());
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            Route::resolve("/recycling/centers"),
            Route::NotFound {
                route: vec!["recycling".to_string(), "centers".to_string()]
            }
        );
    }
}
