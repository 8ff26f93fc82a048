use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use minijinja::Value;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::features::auth::session::SessionProvider;
use crate::features::forms::{FormKind, FormPayload, SubmissionReport, SubmissionService};
use crate::features::navigation::model::NAV_LINKS;
use crate::features::navigation::NavBar;
use crate::features::notifications::Notification;
use crate::features::site::models::{CLUB_TAGLINE, CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::shared::templates::TemplateRenderer;

/// Shared state of the HTML pages
#[derive(Clone)]
pub struct PagesState {
    pub renderer: Arc<TemplateRenderer>,
    pub service: Arc<SubmissionService>,
    pub site_name: String,
}

impl PagesState {
    pub fn new(
        renderer: Arc<TemplateRenderer>,
        service: Arc<SubmissionService>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            service,
            site_name: site_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub menu: Option<String>,
    pub album: Option<usize>,
    pub tab: Option<String>,
}

impl PageQuery {
    pub fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

/// Field error shown next to its input
#[derive(Debug, Clone, Serialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

/// Values and outcome of one form, as rendered back to the visitor
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormView {
    pub values: FormPayload,
    pub error: Option<FieldMessage>,
}

impl FormView {
    /// View of the payload left in the session after a submission attempt
    pub fn after_submit(kind: FormKind, payload: &FormPayload, report: &SubmissionReport) -> Self {
        let error = match report {
            SubmissionReport::Rejected { error, .. } => Some(FieldMessage {
                field: error.field.clone(),
                message: error.message.clone(),
            }),
            SubmissionReport::Accepted { .. } => None,
        };
        Self {
            values: payload.without_secrets(kind.schema()),
            error,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// One rendered page request
pub struct Page<'a> {
    state: &'a PagesState,
    template: &'static str,
    path: String,
    nav: NavBar,
    status: StatusCode,
    notification: Option<Notification>,
    entries: Vec<(&'static str, Value)>,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a PagesState, template: &'static str, path: impl Into<String>) -> Self {
        Self {
            state,
            template,
            path: path.into(),
            nav: NavBar::default(),
            status: StatusCode::OK,
            notification: None,
            entries: Vec::new(),
        }
    }

    pub fn menu(mut self, open: bool) -> Self {
        self.nav = NavBar::new(open);
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with<T: Serialize>(mut self, key: &'static str, value: T) -> Self {
        self.entries.push((key, Value::from_serialize(&value)));
        self
    }

    pub fn render(self, session: &dyn SessionProvider) -> Result<Response> {
        let nav = self.nav.view(&self.path, session);
        let footer_links: Vec<Value> = NAV_LINKS
            .iter()
            .map(|link| {
                Value::from_iter([
                    ("path", Value::from(link.path)),
                    ("label", Value::from(link.label)),
                ])
            })
            .collect();

        let mut ctx: Vec<(&str, Value)> = vec![
            ("site_name", Value::from(self.state.site_name.as_str())),
            ("path", Value::from(self.path.as_str())),
            ("nav", Value::from_serialize(&nav)),
            ("year", Value::from(Utc::now().year())),
            ("tagline", Value::from(CLUB_TAGLINE)),
            ("footer_links", Value::from(footer_links)),
            ("channels", Value::from_serialize(CONTACT_CHANNELS)),
            ("socials", Value::from_serialize(SOCIAL_LINKS)),
            ("notification", Value::from_serialize(&self.notification)),
        ];
        ctx.extend(self.entries);

        let html = self
            .state
            .renderer
            .render(self.template, Value::from_iter(ctx))?;
        Ok((self.status, Html(html)).into_response())
    }
}
