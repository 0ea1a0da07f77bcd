//! Observer-facing outcome of an asynchronous read.

/// Sum type over the lifecycle of an asynchronous request.
///
/// Expected failures travel as `Error` values across the core boundary;
/// panics are reserved for programmer errors. Port traits return
/// `Result<T, E>` with typed errors; the controller folds those into
/// `RequestState` where state is published to observers.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestState::Error(_))
    }

    /// Data of a successful request, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Message of a failed request, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}
