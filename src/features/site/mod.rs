//! Club content catalog.
//!
//! All copy is compiled into the binary; the JSON endpoints expose the same
//! data the HTML pages render.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/site/home` | Hero and stats |
//! | GET | `/api/site/about` | Mission, values, president |
//! | GET | `/api/site/activities` | All activities |
//! | GET | `/api/site/activities/{id}` | One activity |
//! | GET | `/api/site/events` | Upcoming and past events |
//! | GET | `/api/site/gallery` | Albums |
//! | GET | `/api/site/gallery/{index}` | One album |
//! | GET | `/api/site/contact` | Contact channels |
//! | GET | `/api/site/join` | Membership benefits |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
