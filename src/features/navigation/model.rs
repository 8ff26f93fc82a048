use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::auth::session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// Main menu entries, in display order
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        path: "/",
        label: "Accueil",
    },
    NavLink {
        path: "/about",
        label: "À propos",
    },
    NavLink {
        path: "/activities",
        label: "Activités",
    },
    NavLink {
        path: "/gallery",
        label: "Galerie",
    },
    NavLink {
        path: "/events",
        label: "Événements",
    },
    NavLink {
        path: "/contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavLinkView {
    pub path: String,
    pub label: String,
    pub active: bool,
}

/// Session control shown at the end of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
    Login,
    Logout,
}

impl AuthAction {
    pub fn label(&self) -> &'static str {
        match self {
            AuthAction::Login => "Connexion",
            AuthAction::Logout => "Déconnexion",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AuthAction::Login => "/auth",
            AuthAction::Logout => "/logout",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub open: bool,
    pub links: Vec<NavLinkView>,
    pub auth_action: AuthAction,
    pub auth_label: String,
    pub auth_path: String,
    /// Link that flips the menu state on the current page
    pub toggle_href: String,
}

/// Navigation bar state: only whether the (mobile) menu is expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavBar {
    open: bool,
}

impl NavBar {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Exact path match; `/about/team` does not activate `/about`
    pub fn is_active(current_path: &str, link_path: &str) -> bool {
        current_path == link_path
    }

    /// Follow a link: the menu closes and the target becomes current
    pub fn follow(&mut self, link: &NavLink) -> &'static str {
        self.close();
        link.path
    }

    pub fn view(&self, current_path: &str, session: &dyn SessionProvider) -> NavigationView {
        // Link targets are rendered as they are followed, with the menu closed
        let mut followed = *self;
        let links = NAV_LINKS
            .iter()
            .map(|link| NavLinkView {
                path: followed.follow(link).to_string(),
                label: link.label.to_string(),
                active: Self::is_active(current_path, link.path),
            })
            .collect();

        let auth_action = if session.has_session() {
            AuthAction::Logout
        } else {
            AuthAction::Login
        };

        let mut toggled = *self;
        toggled.toggle();
        let toggle_href = if toggled.is_open() {
            format!("{}?menu=open", current_path)
        } else {
            current_path.to_string()
        };

        NavigationView {
            open: self.open,
            links,
            auth_action,
            auth_label: auth_action.label().to_string(),
            auth_path: auth_action.path().to_string(),
            toggle_href,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::RequestSession;

    #[test]
    fn test_login_shown_without_session() {
        let view = NavBar::default().view("/", &RequestSession::anonymous());
        assert_eq!(view.auth_action, AuthAction::Login);
        assert_eq!(view.auth_path, "/auth");
    }

    #[test]
    fn test_logout_shown_with_session() {
        let session = RequestSession::new(Some("tok".to_string()));
        let view = NavBar::default().view("/", &session);
        assert_eq!(view.auth_action, AuthAction::Logout);
        assert_eq!(view.auth_label, "Déconnexion");
    }

    #[test]
    fn test_active_link_is_exact_match() {
        let view = NavBar::default().view("/about", &RequestSession::anonymous());
        let active: Vec<&str> = view
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.path.as_str())
            .collect();
        assert_eq!(active, vec!["/about"]);

        let nested = NavBar::default().view("/about/team", &RequestSession::anonymous());
        assert!(nested.links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_toggle_and_follow_close_menu() {
        let mut nav = NavBar::default();
        nav.toggle();
        assert!(nav.is_open());

        let target = nav.follow(&NAV_LINKS[2]);
        assert_eq!(target, "/activities");
        assert!(!nav.is_open());

        nav.toggle();
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_view_reflects_logout() {
        let mut session = RequestSession::new(Some("tok".to_string()));
        session.logout();
        let view = NavBar::new(true).view("/contact", &session);
        assert_eq!(view.auth_action, AuthAction::Login);
        assert!(view.open);
    }

    #[test]
    fn test_toggle_href_flips_menu() {
        let anonymous = RequestSession::anonymous();
        let closed = NavBar::default().view("/events", &anonymous);
        assert_eq!(closed.toggle_href, "/events?menu=open");

        let open = NavBar::new(true).view("/events", &anonymous);
        assert_eq!(open.toggle_href, "/events");
        assert!(open.links.iter().all(|l| !l.path.contains("menu")));
    }

    #[test]
    fn test_links_in_display_order() {
        let view = NavBar::default().view("/", &RequestSession::anonymous());
        let labels: Vec<&str> = view.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Accueil", "À propos", "Activités", "Galerie", "Événements", "Contact"]
        );
    }
}
