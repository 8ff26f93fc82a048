//! Authentication surface.
//!
//! Sessions are issued by an external service. This feature reads the session
//! token, offers logout, and validates the sign-in/sign-up forms before
//! handing them to a backend that does not exist yet.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/signin` | No | Validate sign-in (login not implemented) |
//! | POST | `/api/auth/signup` | No | Validate sign-up (account creation not implemented) |
//! | POST | `/api/auth/logout` | Session | Clear the session cookie |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod session;

pub use session::{RequestSession, SessionProvider};
