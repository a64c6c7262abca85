use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("element #{id} not found")]
    MissingElement { id: String },

    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("js: {0}")]
    Js(String),
}

impl Error {
    pub fn missing(id: impl Into<String>) -> Self {
        Error::MissingElement { id: id.into() }
    }

    pub fn unexpected(id: impl Into<String>, expected: &'static str) -> Self {
        Error::UnexpectedElement {
            id: id.into(),
            expected,
        }
    }

    /// Whether the error comes from the page layout rather than a bad config.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            Error::MissingElement { .. } | Error::UnexpectedElement { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            Error::missing("confirm-modal").to_string(),
            "element #confirm-modal not found"
        );
        assert_eq!(
            Error::unexpected("form-file", "HtmlInputElement").to_string(),
            "element #form-file is not a HtmlInputElement"
        );
    }

    #[test]
    fn layout_errors_are_distinguished_from_config_errors() {
        assert!(Error::missing("progress").is_layout());
        assert!(!Error::InvalidConfig("empty id".into()).is_layout());
        assert!(!Error::Js("boom".into()).is_layout());
    }
}
