pub mod submission_service;

pub use submission_service::{
    BackendOutcome, LoggingBackend, SubmissionBackend, SubmissionReport, SubmissionService,
};
