// https://dictionaryapi.dev/ - free, english only, answers unknown words with a 404

use reqwest::Url;

use crate::dictionary::{MeaningGroup, Word};
use crate::http::HttpClient;
use crate::{LookupError, LookupResult};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) async fn get_definition(client: &dyn HttpClient, base: &Url, word: &str) -> LookupResult {
    let Some(url) = entry_url(base, word) else {
        tracing::warn!(word, "word cannot be used as a path segment");
        return Err(LookupError::NotFound);
    };
    tracing::debug!(%url, "requesting definition");

    let body = client.get(&url).await.map_err(|error| {
        tracing::warn!(word, %error, "dictionary request failed");
        LookupError::NotFound
    })?;

    // Only the head of the array is consulted, later candidates are dropped.
    let entry = first_entry(&body).map_err(|error| {
        tracing::warn!(word, %error, "could not decode dictionary response");
        LookupError::Unavailable
    })?;
    let Some(entry) = entry else {
        tracing::warn!(word, "dictionary response contained no entries");
        return Err(LookupError::Unavailable);
    };

    if !entry.matches(word) {
        tracing::warn!(word, headword = %entry.word, "headword does not match query");
        return Err(LookupError::Unavailable);
    }
    if entry.meanings.is_empty() {
        tracing::warn!(word, "entry has no meanings");
        return Err(LookupError::Unavailable);
    }

    let groups: Vec<MeaningGroup> = entry.meanings.into_iter().map(MeaningGroup::from).collect();
    tracing::debug!(word, groups = groups.len(), "definition found");
    Ok(groups)
}

/// Appends `word` to `base` as a single percent-encoded path segment.
///
/// `.` and `..` are dot segments that a url parser drops (even when
/// percent-encoded), so they have no url of their own.
pub(crate) fn entry_url(base: &Url, word: &str) -> Option<Url> {
    if word == "." || word == ".." {
        return None;
    }
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().push(word);
    Some(url)
}

fn first_entry(body: &str) -> Result<Option<Word>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body)?;
    entries
        .into_iter()
        .next()
        .map(serde_json::from_value)
        .transpose()
}
