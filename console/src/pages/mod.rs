//! Page modules for route-level screens.
//!
//! Each page owns one route's view; cross-cutting chrome (navigation, meta
//! tags) lives in the application root.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
