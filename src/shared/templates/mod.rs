pub mod engine;

pub use engine::{TemplateError, TemplateRenderer};
