//! Server-rendered HTML pages.
//!
//! Every page shares the navigation bar and footer from `base.jinja`. Form
//! pages accept urlencoded posts and render the outcome in place.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Home |
//! | GET | `/about` | About the club |
//! | GET | `/activities` | Activities |
//! | GET | `/events` | Events |
//! | GET | `/gallery` | Albums, `?album=N` for one album |
//! | GET, POST | `/contact` | Contact form |
//! | GET, POST | `/join` | Membership application |
//! | GET | `/auth` | Sign-in / sign-up tabs |
//! | POST | `/auth/signin`, `/auth/signup` | Account forms |
//! | POST | `/logout` | Clear the session, redirect home |
//!
//! All pages accept `?menu=open`.

pub mod handlers;
pub mod routes;
pub mod view;

pub use view::PagesState;
