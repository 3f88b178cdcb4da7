use crate::catalog::{BlogPost, Project};

/// Height of the fixed navbar; section jumps land this far above the target.
pub const HEADER_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    Top(ScrollBehavior),
    To { top: f64, behavior: ScrollBehavior },
}

/// Document scrolling as seen by the navigation layer.
pub trait ScrollHost {
    /// Document-relative top of the element with the given id, if it is mounted.
    fn section_top(&self, id: &str) -> Option<f64>;
    fn scroll(&self, request: ScrollRequest);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Main,
    ProjectDetail,
    BlogDetail,
}

/// Identity of the screen currently mounted. Changes whenever the main view
/// or a detail view has to be swapped out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Main,
    Project(u32),
    Post(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    Main,
    ProjectDetail(&'static Project),
    BlogDetail(&'static BlogPost),
}

/// In-page link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Section(String),
}

impl Anchor {
    /// Parses an `href`. Only fragment links are in-page anchors; anything else
    /// returns `None` so the browser handles it.
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        Some(Self::from_id(id))
    }

    pub fn from_id(id: &str) -> Self {
        let id = id.trim_start_matches('#');
        if id.is_empty() {
            Self::Top
        } else {
            Self::Section(id.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    view: View,
    pending_anchor: Option<Anchor>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view: View::Main,
            pending_anchor: None,
        }
    }
}

impl ViewState {
    pub fn mode(&self) -> Mode {
        match self.view {
            View::Main => Mode::Main,
            View::ProjectDetail(_) => Mode::ProjectDetail,
            View::BlogDetail(_) => Mode::BlogDetail,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.view {
            View::Main => Screen::Main,
            View::ProjectDetail(p) => Screen::Project(p.id),
            View::BlogDetail(p) => Screen::Post(p.id),
        }
    }

    pub fn is_detail(&self) -> bool {
        self.mode() != Mode::Main
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        match self.view {
            View::ProjectDetail(p) => Some(p),
            _ => None,
        }
    }

    pub fn selected_post(&self) -> Option<&'static BlogPost> {
        match self.view {
            View::BlogDetail(p) => Some(p),
            _ => None,
        }
    }

    pub fn pending_anchor(&self) -> Option<&Anchor> {
        self.pending_anchor.as_ref()
    }

    pub fn open_project(&mut self, project: &'static Project, host: &impl ScrollHost) {
        log::debug!("opening project {}", project.id);
        self.view = View::ProjectDetail(project);
        self.pending_anchor = None;
        host.scroll(ScrollRequest::Top(ScrollBehavior::Instant));
    }

    pub fn open_post(&mut self, post: &'static BlogPost, host: &impl ScrollHost) {
        log::debug!("opening post {}", post.slug);
        self.view = View::BlogDetail(post);
        self.pending_anchor = None;
        host.scroll(ScrollRequest::Top(ScrollBehavior::Instant));
    }

    pub fn go_back(&mut self) {
        if self.view != View::Main {
            log::debug!("returning to main view");
            self.view = View::Main;
        }
    }

    /// Jumps to an in-page section. From a detail view this goes back first and
    /// defers the scroll until [`ViewState::view_mounted`] reports the main view.
    pub fn navigate_to_section(&mut self, anchor: Anchor, host: &impl ScrollHost) {
        if self.is_detail() {
            self.go_back();
            self.pending_anchor = Some(anchor);
            return;
        }
        scroll_to_anchor(&anchor, host);
    }

    /// Completion signal from the view layer: the screen for `screen` now exists
    /// in the document.
    pub fn view_mounted(&mut self, screen: Screen, host: &impl ScrollHost) {
        if screen != Screen::Main || self.screen() != Screen::Main {
            return;
        }
        if let Some(anchor) = self.pending_anchor.take() {
            scroll_to_anchor(&anchor, host);
        }
    }
}

fn scroll_to_anchor(anchor: &Anchor, host: &impl ScrollHost) {
    match anchor {
        Anchor::Top => host.scroll(ScrollRequest::Top(ScrollBehavior::Smooth)),
        Anchor::Section(id) => match host.section_top(id) {
            Some(top) => host.scroll(ScrollRequest::To {
                top: top - HEADER_OFFSET,
                behavior: ScrollBehavior::Smooth,
            }),
            None => log::debug!("no section with id {id}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeHost {
        sections: HashMap<String, f64>,
        requests: RefCell<Vec<ScrollRequest>>,
    }

    impl FakeHost {
        fn with_sections(sections: &[(&str, f64)]) -> Self {
            Self {
                sections: sections
                    .iter()
                    .map(|(id, top)| (id.to_string(), *top))
                    .collect(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ScrollRequest> {
            self.requests.borrow().clone()
        }
    }

    impl ScrollHost for FakeHost {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn scroll(&self, request: ScrollRequest) {
            self.requests.borrow_mut().push(request);
        }
    }

    fn assert_exclusive(state: &ViewState) {
        match state.mode() {
            Mode::Main => {
                assert!(state.selected_project().is_none());
                assert!(state.selected_post().is_none());
            }
            Mode::ProjectDetail => {
                assert!(state.selected_project().is_some());
                assert!(state.selected_post().is_none());
            }
            Mode::BlogDetail => {
                assert!(state.selected_project().is_none());
                assert!(state.selected_post().is_some());
            }
        }
    }

    #[test]
    fn test_initial_state_is_main() {
        let state = ViewState::default();
        assert_eq!(state.mode(), Mode::Main);
        assert_eq!(state.screen(), Screen::Main);
        assert_exclusive(&state);
    }

    #[test]
    fn test_open_project_selects_only_project() {
        let host = FakeHost::default();
        let project = &catalog().projects[0];
        let mut state = ViewState::default();

        state.open_project(project, &host);

        assert_eq!(state.mode(), Mode::ProjectDetail);
        assert_eq!(state.selected_project().map(|p| p.id), Some(project.id));
        assert!(state.selected_post().is_none());
        assert_eq!(
            host.requests(),
            vec![ScrollRequest::Top(ScrollBehavior::Instant)]
        );
    }

    #[test]
    fn test_switching_detail_views_keeps_exclusivity() {
        let host = FakeHost::default();
        let mut state = ViewState::default();

        state.open_post(&catalog().posts[0], &host);
        assert_exclusive(&state);
        state.open_project(&catalog().projects[1], &host);
        assert_exclusive(&state);
        assert_eq!(state.screen(), Screen::Project(catalog().projects[1].id));
        state.open_post(&catalog().posts[1], &host);
        assert_exclusive(&state);
        assert_eq!(state.mode(), Mode::BlogDetail);
    }

    #[test]
    fn test_go_back_resets_from_any_detail() {
        let host = FakeHost::default();
        let mut state = ViewState::default();

        state.open_project(&catalog().projects[2], &host);
        state.go_back();
        assert_eq!(state, ViewState::default());

        state.open_post(&catalog().posts[2], &host);
        state.go_back();
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_go_back_in_main_is_noop() {
        let mut state = ViewState::default();
        state.go_back();
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_navigate_in_main_scrolls_with_header_offset() {
        let host = FakeHost::with_sections(&[("projects", 1800.0)]);
        let mut state = ViewState::default();

        state.navigate_to_section(Anchor::from_id("projects"), &host);

        assert_eq!(
            host.requests(),
            vec![ScrollRequest::To {
                top: 1700.0,
                behavior: ScrollBehavior::Smooth
            }]
        );
        assert_eq!(state.mode(), Mode::Main);
    }

    #[test]
    fn test_navigate_to_top_scrolls_to_origin() {
        let host = FakeHost::default();
        let mut state = ViewState::default();

        state.navigate_to_section(Anchor::from_id(""), &host);
        state.navigate_to_section(Anchor::from_id("#"), &host);

        assert_eq!(
            host.requests(),
            vec![
                ScrollRequest::Top(ScrollBehavior::Smooth),
                ScrollRequest::Top(ScrollBehavior::Smooth)
            ]
        );
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let host = FakeHost::with_sections(&[("projects", 1800.0)]);
        let mut state = ViewState::default();

        state.navigate_to_section(Anchor::from_id("nonexistent"), &host);

        assert!(host.requests().is_empty());
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_navigate_from_detail_waits_for_main_view() {
        let host = FakeHost::with_sections(&[("projects", 1800.0)]);
        let mut state = ViewState::default();
        state.open_post(&catalog().posts[0], &host);
        let before = host.requests().len();

        state.navigate_to_section(Anchor::from_id("projects"), &host);

        // back happened, scroll has not
        assert_eq!(state.mode(), Mode::Main);
        assert!(state.selected_post().is_none());
        assert_eq!(host.requests().len(), before);

        state.view_mounted(Screen::Main, &host);
        assert_eq!(
            host.requests().last(),
            Some(&ScrollRequest::To {
                top: 1700.0,
                behavior: ScrollBehavior::Smooth
            })
        );
        assert!(state.pending_anchor().is_none());

        // a second mount signal does not scroll again
        state.view_mounted(Screen::Main, &host);
        assert_eq!(host.requests().len(), before + 1);
    }

    #[test]
    fn test_pending_anchor_last_write_wins() {
        let host = FakeHost::with_sections(&[("blog", 4000.0), ("contact", 5000.0)]);
        let mut state = ViewState::default();
        state.open_project(&catalog().projects[0], &host);

        state.navigate_to_section(Anchor::from_id("blog"), &host);
        state.navigate_to_section(Anchor::from_id("contact"), &host);
        state.view_mounted(Screen::Main, &host);

        assert_eq!(
            host.requests().last(),
            Some(&ScrollRequest::To {
                top: 4900.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_opening_detail_discards_pending_anchor() {
        let host = FakeHost::with_sections(&[("blog", 4000.0)]);
        let mut state = ViewState::default();
        state.open_project(&catalog().projects[0], &host);
        state.navigate_to_section(Anchor::from_id("blog"), &host);

        state.open_post(&catalog().posts[0], &host);
        assert!(state.pending_anchor().is_none());

        // stale mount signal for a screen that is no longer current
        state.view_mounted(Screen::Main, &host);
        assert_eq!(host.requests().last(), Some(&ScrollRequest::Top(ScrollBehavior::Instant)));
    }

    #[test]
    fn test_anchor_from_href() {
        assert_eq!(Anchor::from_href("#"), Some(Anchor::Top));
        assert_eq!(
            Anchor::from_href("#about"),
            Some(Anchor::Section("about".to_string()))
        );
        assert_eq!(Anchor::from_href("https://github.com"), None);
        assert_eq!(Anchor::from_href(""), None);
    }
}
