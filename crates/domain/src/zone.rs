use std::sync::Arc;

/// A zone apex as stored in the `domains` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: i64,
    /// Apex name without the trailing dot.
    pub name: Arc<str>,
}

impl Zone {
    pub fn new(id: i64, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
