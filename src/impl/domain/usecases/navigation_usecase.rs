use std::sync::Arc;

use crate::{
    data::datasources::api_client::{LOGIN_INDEX_PATH, LOGIN_PATH},
    domain::logic::{
        context_store::ContextStore,
        route_table::{guard, resolve},
        session_store::SessionStore,
        tab_store::TabStore,
    },
    entities::{Navigation, Navigator, PageContext, TabItem},
};

/// Redirect chains are short (alias, then login); anything longer is a loop.
const MAX_REDIRECTS: usize = 4;

/// The shell's navigation state: guarded route changes, the open tabs and
/// the page context of the current route.
pub struct Workbench {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    tabs: TabStore,
    context: ContextStore,
}

impl Workbench {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            tabs: TabStore::new(),
            context: ContextStore::new(),
        }
    }

    pub fn tabs(&self) -> &TabStore {
        &self.tabs
    }

    pub fn context(&self) -> PageContext {
        self.context.current()
    }

    pub fn context_store(&self) -> &ContextStore {
        &self.context
    }

    /// Navigates to `path` through the guard and returns the location
    /// actually reached.
    pub async fn navigate(&mut self, path: &str) -> String {
        let authenticated = self.session.is_authenticated().await;
        let mut location = path.to_string();
        for _ in 0..MAX_REDIRECTS {
            match guard(&location, authenticated) {
                Navigation::Proceed => break,
                redirect => {
                    tracing::debug!("Guard redirected {location}.");
                    location = redirect.location(&location);
                }
            }
        }

        self.navigator.navigate_to(&location).await;
        self.enter(&location);
        location
    }

    /// Catches up with route changes made outside the workbench, such as the
    /// login redirect after a rejected session. Landing on the login page
    /// drops every open tab.
    pub async fn sync(&mut self) -> String {
        let location = self.navigator.current_path().await;
        let bare = location.split(['?', '#']).next().unwrap_or(&location);
        if bare == LOGIN_PATH || bare == LOGIN_INDEX_PATH {
            self.tabs.close_all();
        }
        self.enter(&location);
        location
    }

    /// Closes a tab and follows the tab that becomes active.
    pub async fn close_tab(&mut self, id: &str) -> Option<String> {
        let was_active = self.tabs.active_id() == Some(id);
        self.tabs.remove_tab(id);
        if !was_active {
            return None;
        }
        let next = self.tabs.active_tab()?.path.clone();
        Some(self.navigate(&next).await)
    }

    pub async fn activate_tab(&mut self, id: &str) -> Option<String> {
        let path = self.tabs.tabs().iter().find(|t| t.id == id)?.path.clone();
        Some(self.navigate(&path).await)
    }

    pub fn close_other_tabs(&mut self, id: &str) {
        self.tabs.close_others(id);
    }

    pub fn close_all_tabs(&mut self) {
        self.tabs.close_all();
    }

    fn enter(&mut self, location: &str) {
        let bare = location.split(['?', '#']).next().unwrap_or(location);
        self.context.set_context_from_route(bare);
        if let Some(route) = resolve(bare) {
            if !route.def.hidden {
                self.tabs.add_tab(TabItem::new(bare, route.def.title, bare));
            }
        }
    }
}
