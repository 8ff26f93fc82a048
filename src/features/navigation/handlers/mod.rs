pub mod navigation_handler;

pub use navigation_handler::{__path_get_navigation, get_navigation, NavigationQuery};
