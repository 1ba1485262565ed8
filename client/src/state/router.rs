//! App shell view-routing state.
//!
//! DESIGN
//! ======
//! The top-level screen is derived from the [`Session`] plus [`RouterState`]
//! rather than stored, so the three-way loading/unauthenticated/authenticated
//! branch can never disagree with the session. Lab and tool overlays share a
//! single optional modal slot layered over the active tab.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use super::session::Session;

/// Dashboard tabs, in navigation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Labs,
    Tools,
    Learn,
    Progress,
    Assistant,
}

impl Tab {
    pub const ALL: [Self; 5] = [Self::Labs, Self::Tools, Self::Learn, Self::Progress, Self::Assistant];

    /// Stable identifier used in markup and callbacks.
    pub fn id(self) -> &'static str {
        match self {
            Self::Labs => "labs",
            Self::Tools => "tools",
            Self::Learn => "learn",
            Self::Progress => "progress",
            Self::Assistant => "assistant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Labs => "Vulnerability Labs",
            Self::Tools => "Security Tools",
            Self::Learn => "Learning Path",
            Self::Progress => "Progress",
            Self::Assistant => "AI Assistant",
        }
    }
}

/// Modal layered over the active tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Vulnerable store for the selected lab type.
    Lab(String),
    /// Tool page for the selected tool.
    Tool(String),
}

/// Which form the unauthenticated screen shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

/// Top-level screen selected by the app shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Login,
    Signup,
    Dashboard,
}

/// Transient UI selection owned by the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterState {
    pub active_tab: Tab,
    pub overlay: Option<Overlay>,
    pub guide_visible: bool,
    pub auth_view: AuthView,
}

impl Default for RouterState {
    fn default() -> Self {
        Self { active_tab: Tab::Labs, overlay: None, guide_visible: true, auth_view: AuthView::Login }
    }
}

impl RouterState {
    /// Screen to render for `session`.
    pub fn screen(&self, session: &Session) -> Screen {
        if session.loading {
            return Screen::Loading;
        }
        if session.user.is_some() {
            return Screen::Dashboard;
        }
        match self.auth_view {
            AuthView::Login => Screen::Login,
            AuthView::Signup => Screen::Signup,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn select_lab(&mut self, lab_id: impl Into<String>) {
        self.overlay = Some(Overlay::Lab(lab_id.into()));
    }

    pub fn select_tool(&mut self, tool_id: impl Into<String>) {
        self.overlay = Some(Overlay::Tool(tool_id.into()));
    }

    /// Close the lab overlay; a tool overlay is left alone.
    pub fn close_lab(&mut self) {
        if matches!(self.overlay, Some(Overlay::Lab(_))) {
            self.overlay = None;
        }
    }

    /// Close the tool overlay; a lab overlay is left alone.
    pub fn close_tool(&mut self) {
        if matches!(self.overlay, Some(Overlay::Tool(_))) {
            self.overlay = None;
        }
    }

    pub fn selected_lab(&self) -> Option<&str> {
        match &self.overlay {
            Some(Overlay::Lab(id)) => Some(id),
            _ => None,
        }
    }

    pub fn selected_tool(&self) -> Option<&str> {
        match &self.overlay {
            Some(Overlay::Tool(id)) => Some(id),
            _ => None,
        }
    }

    /// Dismiss the voice guide for the rest of the app's lifetime.
    pub fn close_guide(&mut self) {
        self.guide_visible = false;
    }

    pub fn show_signup(&mut self) {
        self.auth_view = AuthView::Signup;
    }

    pub fn show_login(&mut self) {
        self.auth_view = AuthView::Login;
    }

    /// Reset dashboard selection after sign-out. The guide stays dismissed.
    pub fn signed_out(&mut self) {
        self.active_tab = Tab::Labs;
        self.overlay = None;
        self.auth_view = AuthView::Login;
    }
}
