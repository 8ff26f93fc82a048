pub mod site_handler;

pub use site_handler::{
    __path_get_about, __path_get_activity, __path_get_album, __path_get_contact,
    __path_get_events, __path_get_home, __path_get_join, __path_list_activities,
    __path_list_albums, get_about, get_activity, get_album, get_contact, get_events, get_home,
    get_join, list_activities, list_albums,
};
