pub mod form_page_handler;
pub mod page_handler;

pub use form_page_handler::{logout, sign_in, sign_up, submit_contact, submit_join};
pub use page_handler::{about, activities, auth, contact, events, fallback, gallery, home, join};
