use bb_api::Required;
use bb_core::Page;

/// What a page shows: exactly one of spinner, error banner, empty state or data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Error(String),
    Empty,
    Populated(T),
}

impl<T> ViewState<T> {
    /// Map a fetch result; `is_empty` decides between `Empty` and `Populated`.
    pub fn from_result(result: Required<T>, is_empty: impl FnOnce(&T) -> bool) -> Self {
        match result {
            Ok(data) if is_empty(&data) => ViewState::Empty,
            Ok(data) => ViewState::Populated(data),
            Err(e) => ViewState::Error(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Populated(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> ViewState<Page<T>> {
    pub fn from_page(result: Required<Page<T>>) -> Self {
        Self::from_result(result, Page::is_empty)
    }

    /// Rows currently on screen; none unless populated
    pub fn rows(&self) -> &[T] {
        self.data().map(|page| page.data.as_slice()).unwrap_or(&[])
    }
}

impl<T> ViewState<Vec<T>> {
    pub fn from_rows(result: Required<Vec<T>>) -> Self {
        Self::from_result(result, Vec::is_empty)
    }

    pub fn rows(&self) -> &[T] {
        self.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
