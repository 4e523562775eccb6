use serde::Deserialize;

use crate::locale::Strings;

/// The text/author pair shown on the card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Body of a successful response from the quotes endpoint.
///
/// Both fields are required; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    pub content: String,
    pub author: String,
}

impl From<QuoteResponse> for Quote {
    fn from(response: QuoteResponse) -> Self {
        Self {
            text: response.content,
            author: response.author,
        }
    }
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Fallback shown when a fetch fails.
    pub fn sentinel(strings: &Strings) -> Self {
        Self::new(strings.failure_text, strings.failure_author)
    }

    /// Applies the locale's placeholder to an empty author.
    pub fn localized(mut self, strings: &Strings) -> Self {
        if let Some(placeholder) = strings.unknown_author {
            if self.author.is_empty() {
                self.author = placeholder.to_string();
            }
        }
        self
    }
}
