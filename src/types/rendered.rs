use serde::{Deserialize, Serialize};

/// The only error shape a user ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPlaceholder {
    pub message: String,
}

impl ErrorPlaceholder {
    pub fn new(message: &str) -> Self {
        ErrorPlaceholder {
            message: message.to_string(),
        }
    }
}

/// Outcome of a transit operation, either tables or a placeholder message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Rendered<T> {
    Tables(T),
    Error(ErrorPlaceholder),
}

impl<T> Rendered<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Rendered::Error(_))
    }

    pub fn tables(&self) -> Option<&T> {
        match self {
            Rendered::Tables(t) => Some(t),
            Rendered::Error(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&ErrorPlaceholder> {
        match self {
            Rendered::Tables(_) => None,
            Rendered::Error(p) => Some(p),
        }
    }
}

impl<T> From<Result<T, ErrorPlaceholder>> for Rendered<T> {
    fn from(result: Result<T, ErrorPlaceholder>) -> Self {
        match result {
            Ok(tables) => Rendered::Tables(tables),
            Err(placeholder) => Rendered::Error(placeholder),
        }
    }
}
