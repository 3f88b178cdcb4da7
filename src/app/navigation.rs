use leptos::{ev::MouseEvent, prelude::*};
use web_sys::ScrollToOptions;

use crate::catalog::{BlogPost, Project};
use crate::nav::{Anchor, ScrollBehavior, ScrollHost, ScrollRequest, Screen, ViewState};

/// Scrolls the browser window.
pub struct WindowScroll;

impl ScrollHost for WindowScroll {
    fn section_top(&self, id: &str) -> Option<f64> {
        let el = document().get_element_by_id(id)?;
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        Some(el.get_bounding_client_rect().y() + scroll_y)
    }

    fn scroll(&self, request: ScrollRequest) {
        let (top, behavior) = match request {
            ScrollRequest::Top(behavior) => (0.0, behavior),
            ScrollRequest::To { top, behavior } => (top, behavior),
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Handle to the page's [`ViewState`], shared through context.
#[derive(Clone, Copy)]
pub struct Navigator {
    state: RwSignal<ViewState>,
}

impl Navigator {
    pub fn provide() -> Self {
        let nav = Self {
            state: RwSignal::new(ViewState::default()),
        };
        provide_context(nav);
        nav
    }

    pub fn screen(self) -> Memo<Screen> {
        let state = self.state;
        Memo::new(move |_| state.with(ViewState::screen))
    }

    pub fn open_project(self, project: &'static Project) {
        self.state.update(|s| s.open_project(project, &WindowScroll));
    }

    pub fn open_post(self, post: &'static BlogPost) {
        self.state.update(|s| s.open_post(post, &WindowScroll));
    }

    pub fn go_back(self) {
        self.state.update(ViewState::go_back);
    }

    pub fn navigate(self, anchor: Anchor) {
        self.state
            .update(|s| s.navigate_to_section(anchor, &WindowScroll));
    }

    /// Click handler for `<a>` elements. In-page anchors are taken over, any
    /// other link keeps its default behavior. Returns whether the click was
    /// handled here.
    pub fn follow_link(self, ev: &MouseEvent, href: &str) -> bool {
        let Some(anchor) = Anchor::from_href(href) else {
            return false;
        };
        ev.prevent_default();
        self.navigate(anchor);
        true
    }

    /// Called once the main view is in the document.
    pub fn main_mounted(self) {
        self.state
            .update_untracked(|s| s.view_mounted(Screen::Main, &WindowScroll));
    }
}
