#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    /// May contain `:param` segments.
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    /// Rendered outside the main layout and never opened as a tab.
    pub hidden: bool,
}

/// Outcome of the navigation guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect {
        path: String,
        /// Where to return after login.
        redirect: Option<String>,
    },
}

impl Navigation {
    pub(crate) fn redirect(path: impl Into<String>) -> Self {
        Navigation::Redirect {
            path: path.into(),
            redirect: None,
        }
    }

    /// Full location including the `redirect` query, if any.
    pub fn location(&self, requested: &str) -> String {
        match self {
            Navigation::Proceed => requested.to_string(),
            Navigation::Redirect {
                path,
                redirect: None,
            } => path.clone(),
            Navigation::Redirect {
                path,
                redirect: Some(back),
            } => {
                let back: String = url::form_urlencoded::byte_serialize(back.as_bytes()).collect();
                format!("{path}?redirect={back}")
            }
        }
    }
}
