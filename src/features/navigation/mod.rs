//! Navigation bar: menu state, active route and the login/logout control.

pub mod handlers;
pub mod model;
pub mod routes;

pub use model::{NavBar, NavigationView};
