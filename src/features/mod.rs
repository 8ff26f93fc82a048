pub mod auth;
pub mod forms;
pub mod navigation;
pub mod notifications;
pub mod pages;
pub mod site;
