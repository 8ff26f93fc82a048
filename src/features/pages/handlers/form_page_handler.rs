//! POST handlers re-rendering a form page with the submission outcome

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::auth::session::{RequestSession, SessionProvider};
use crate::features::forms::{FormKind, FormPayload, FormSession};
use crate::features::notifications::Notification;
use crate::features::pages::view::{FormView, Page, PagesState};
use crate::features::site::dtos::{ContactResponseDto, JoinResponseDto};

/// Run one urlencoded submission through the service
async fn submit_form(
    state: &PagesState,
    kind: FormKind,
    pairs: &[(String, String)],
) -> Result<(FormView, Notification)> {
    let payload = FormPayload::from_pairs(kind.schema(), pairs);
    let mut session = FormSession::with_payload(kind, payload);

    let report = state.service.submit(&mut session).await?;
    let view = FormView::after_submit(kind, session.payload(), &report);
    Ok((view, report.notification().clone()))
}

fn status_for(view: &FormView) -> StatusCode {
    if view.is_rejected() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    }
}

pub async fn submit_contact(
    State(state): State<PagesState>,
    session: RequestSession,
    AppForm(pairs): AppForm<Vec<(String, String)>>,
) -> Result<Response> {
    let (form, notification) = submit_form(&state, FormKind::Contact, &pairs).await?;

    Page::new(&state, "contact.jinja", "/contact")
        .status(status_for(&form))
        .notification(notification)
        .with("contact", ContactResponseDto::load())
        .with("form", form)
        .render(&session)
}

pub async fn submit_join(
    State(state): State<PagesState>,
    session: RequestSession,
    AppForm(pairs): AppForm<Vec<(String, String)>>,
) -> Result<Response> {
    let (form, notification) = submit_form(&state, FormKind::Join, &pairs).await?;

    Page::new(&state, "join.jinja", "/join")
        .status(status_for(&form))
        .notification(notification)
        .with("join", JoinResponseDto::load())
        .with("form", form)
        .render(&session)
}

pub async fn sign_in(
    State(state): State<PagesState>,
    session: RequestSession,
    AppForm(pairs): AppForm<Vec<(String, String)>>,
) -> Result<Response> {
    auth_page(&state, &session, FormKind::SignIn, &pairs).await
}

pub async fn sign_up(
    State(state): State<PagesState>,
    session: RequestSession,
    AppForm(pairs): AppForm<Vec<(String, String)>>,
) -> Result<Response> {
    auth_page(&state, &session, FormKind::SignUp, &pairs).await
}

async fn auth_page(
    state: &PagesState,
    session: &RequestSession,
    kind: FormKind,
    pairs: &[(String, String)],
) -> Result<Response> {
    let (form, notification) = submit_form(state, kind, pairs).await?;

    let (signin, signup) = match kind {
        FormKind::SignUp => (FormView::default(), form.clone()),
        _ => (form.clone(), FormView::default()),
    };

    Page::new(state, "auth.jinja", "/auth")
        .status(status_for(&form))
        .notification(notification)
        .with("tab", kind)
        .with("signin", signin)
        .with("signup", signup)
        .render(session)
}

/// Drop the session and return to the home page
pub async fn logout(mut session: RequestSession) -> Response {
    session.logout();

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, RequestSession::clear_cookie());
    (headers, Redirect::to("/")).into_response()
}
