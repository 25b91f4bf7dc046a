use crate::api::ApiError;

/// Fetch-and-render state for read-only views.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> Loadable<T> {
    /// `context` prefixes the error, e.g. "Failed to fetch films".
    pub fn from_result(result: Result<T, ApiError>, context: &str) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(format!("{}: {}", context, e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Store `next` only when it answers the request currently on screen.
    /// A late response to an older request is dropped.
    pub fn settle<K: PartialEq + ?Sized>(&mut self, requested: &K, current: &K, next: Self) -> bool {
        if requested != current {
            return false;
        }
        *self = next;
        true
    }
}
