pub mod auth_handler;

pub use auth_handler::{
    __path_logout, __path_sign_in, __path_sign_up, logout, sign_in, sign_up,
};
