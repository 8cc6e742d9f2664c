pub mod auth_gate;
pub mod dashboard_redirect_button;
pub mod redirect;

pub use auth_gate::AuthGate;
pub use dashboard_redirect_button::DashboardRedirectButton;
pub use redirect::Redirect;
