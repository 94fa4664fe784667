use serde_derive::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    pub total: u64,
    pub size: u64,
    pub current: u64,
    #[serde(default)]
    pub pages: u64,
}

impl<T> PageResult<T> {
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}
