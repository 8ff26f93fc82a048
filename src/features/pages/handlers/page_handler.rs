//! GET handlers for the server-rendered pages

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Response,
};

use crate::core::error::Result;
use crate::features::auth::session::RequestSession;
use crate::features::forms::FormKind;
use crate::features::pages::view::{FormView, Page, PageQuery, PagesState};
use crate::features::site::dtos::{
    AboutResponseDto, AlbumDto, ContactResponseDto, EventsResponseDto, HomeResponseDto,
    JoinResponseDto,
};
use crate::features::site::models::{self, ACTIVITIES};

pub async fn home(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "home.jinja", "/")
        .menu(query.menu_open())
        .with("home", HomeResponseDto::load())
        .render(&session)
}

pub async fn about(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "about.jinja", "/about")
        .menu(query.menu_open())
        .with("about", AboutResponseDto::load())
        .render(&session)
}

pub async fn activities(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "activities.jinja", "/activities")
        .menu(query.menu_open())
        .with("activities", ACTIVITIES)
        .render(&session)
}

pub async fn events(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "events.jinja", "/events")
        .menu(query.menu_open())
        .with("events", EventsResponseDto::load())
        .render(&session)
}

/// Album grid, or a single album with `?album=N`
pub async fn gallery(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let page = Page::new(&state, "gallery.jinja", "/gallery").menu(query.menu_open());

    let page = match query.album {
        Some(index) => match models::album(index) {
            Some(album) => page.with("album", AlbumDto::new(index, *album)),
            None => {
                return not_found_page(&state, "/gallery", query.menu_open(), &session);
            }
        },
        None => page.with("albums", AlbumDto::all()),
    };

    page.render(&session)
}

pub async fn contact(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "contact.jinja", "/contact")
        .menu(query.menu_open())
        .with("contact", ContactResponseDto::load())
        .with("form", FormView::default())
        .render(&session)
}

pub async fn join(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    Page::new(&state, "join.jinja", "/join")
        .menu(query.menu_open())
        .with("join", JoinResponseDto::load())
        .with("form", FormView::default())
        .render(&session)
}

/// Tabbed sign-in / sign-up page, `?tab=signup` selects the second tab
pub async fn auth(
    State(state): State<PagesState>,
    session: RequestSession,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    let tab = match query.tab.as_deref() {
        Some("signup") => FormKind::SignUp,
        _ => FormKind::SignIn,
    };

    Page::new(&state, "auth.jinja", "/auth")
        .menu(query.menu_open())
        .with("tab", tab)
        .with("signin", FormView::default())
        .with("signup", FormView::default())
        .render(&session)
}

pub async fn fallback(
    State(state): State<PagesState>,
    session: RequestSession,
    uri: Uri,
) -> Result<Response> {
    not_found_page(&state, uri.path(), false, &session)
}

fn not_found_page(
    state: &PagesState,
    path: &str,
    menu_open: bool,
    session: &RequestSession,
) -> Result<Response> {
    tracing::debug!(path, "Page not found");
    Page::new(state, "not_found.jinja", path)
        .menu(menu_open)
        .status(StatusCode::NOT_FOUND)
        .render(session)
}
