//! Route paths shared between the role mapping and the app's route table.

/// Landing page, also the default target for gated routes.
pub const ROOT_PATH: &str = "/";

/// EcoLearn landing page. Fallback for role strings outside [`crate::Role`].
pub const ECOLEARN_PATH: &str = "/ecolearn";

pub const ECOLEARN_ADMIN_PATH: &str = "/ecolearn/admin";
pub const ECOLEARN_DRIVER_PATH: &str = "/ecolearn/driver";
pub const ECOLEARN_CITIZEN_PATH: &str = "/ecolearn/citizen";

pub const ADMIN_PORTAL_PATH: &str = "/admin";
pub const DRIVER_DASHBOARD_PATH: &str = "/driver";
pub const CITIZEN_DASHBOARD_PATH: &str = "/citizen";
