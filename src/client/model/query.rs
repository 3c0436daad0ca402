use crate::client::model::error::ProviderError;

/// Read side of an asynchronous query as seen by a single render.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryState<T> {
    /// The query was switched off and never issued
    #[default]
    Disabled,
    Loading,
    Fetched(T),
    Error(ProviderError),
}

impl<T> QueryState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Fetched(data) => Some(data),
            _ => None,
        }
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

impl<T> From<Option<Result<T, ProviderError>>> for QueryState<T> {
    /// Pending results (`None`) read as loading
    fn from(result: Option<Result<T, ProviderError>>) -> Self {
        match result {
            None => QueryState::Loading,
            Some(Ok(data)) => QueryState::Fetched(data),
            Some(Err(error)) => QueryState::Error(error),
        }
    }
}
