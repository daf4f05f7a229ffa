//! Error types for the showcase core

use thiserror::Error;

/// Main error type for showcase navigation and widget operations
///
/// Navigation never surfaces these to the user: an unknown fragment is
/// recovered by falling back to a default. They are returned when code asks
/// for something that is not declared, such as a sidebar click carrying an
/// id the page does not own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// Section id is not declared by the page
    #[error("Unknown section '{section}' on page '{page}'")]
    UnknownSection {
        /// Page segment the section was requested on
        page: String,
        /// The requested section id
        section: String,
    },

    /// Page segment does not match any declared page
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Value outside the accepted range of a widget (hours, minutes, pages)
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias using ShowcaseError
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShowcaseError::UnknownSection {
            page: "icons".to_string(),
            section: "weather".to_string(),
        };
        assert_eq!(format!("{}", err), "Unknown section 'weather' on page 'icons'");
    }

    #[test]
    fn test_unknown_page_display() {
        let err = ShowcaseError::UnknownPage("settings".to_string());
        assert_eq!(err.to_string(), "Unknown page: settings");
    }
}
