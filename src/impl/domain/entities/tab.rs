#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub title: String,
    pub path: String,
    pub component: Option<String>,
    pub closable: bool,
    pub active: bool,
}

impl TabItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            component: None,
            closable: true,
            active: false,
        }
    }
}
