use std::sync::Arc;

use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;
pub mod http;
pub mod mock;

pub use dictionary::{MeaningGroup, Phonetic, Word, WordDefinition, WordMeaning};
pub use http::{FetchError, HttpClient, ReqwestClient};
pub use reqwest::Url;

/// Groups of definitions for the queried word, or the reason there are none.
pub type LookupResult = Result<Vec<MeaningGroup>, LookupError>;

/// A failed lookup. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The request failed or the API does not know the word.
    #[error("Unable to find a definition for the given word. Please try a different word")]
    NotFound,
    /// The API answered but with nothing usable for the queried word.
    #[error("An error occurred trying to find a definition for the given word. Please try again later.")]
    Unavailable,
}

#[derive(Debug, thiserror::Error)]
#[error("{0} cannot be used as a dictionary API base url")]
pub struct InvalidBaseUrl(pub Url);

#[derive(Clone)]
pub struct Dictionary {
    client: Arc<dyn HttpClient>,
    base_url: Url,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: Arc::new(ReqwestClient::default()),
            base_url: Self::default_base_url(),
        }
    }

    /// Builds a dictionary on top of any [`HttpClient`], querying `base_url`.
    pub fn with_client(client: Arc<dyn HttpClient>, base_url: Url) -> Result<Self, InvalidBaseUrl> {
        if base_url.cannot_be_a_base() {
            return Err(InvalidBaseUrl(base_url));
        }
        Ok(Self { client, base_url })
    }

    pub fn default_base_url() -> Url {
        Url::parse(DICTIONARY_API_URL).expect("built-in dictionary API url is valid")
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Looks up `word`, which must already be trimmed and non-empty.
    ///
    /// Issues exactly one GET. Only the first entry the API returns is
    /// considered, even if a later one would have matched.
    pub async fn lookup(&self, word: &str) -> LookupResult {
        get_definition(self.client.as_ref(), &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
