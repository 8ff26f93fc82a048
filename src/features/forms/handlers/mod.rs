pub mod form_handler;

pub use form_handler::{
    __path_submit_contact, __path_submit_join, submit_contact, submit_join, submit_json,
};
