pub mod form_dto;

pub use form_dto::{accepted, ContactFormDto, JoinFormDto, SubmissionResponseDto};
