//! Contact and membership forms.
//!
//! Payloads are validated against per-form rule tables and handed to a
//! [`SubmissionBackend`] only once accepted.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/forms/contact` | No | Send a message to the club |
//! | POST | `/api/forms/join` | No | Apply for membership |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validator;

pub use models::{FormKind, FormPayload, FormSession};
pub use services::{LoggingBackend, SubmissionBackend, SubmissionReport, SubmissionService};
pub use validator::{ValidationError, Verdict};
