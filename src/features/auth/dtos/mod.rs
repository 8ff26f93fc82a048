pub mod auth_dto;

pub use auth_dto::{LogoutResponseDto, SignInRequestDto, SignUpRequestDto};
