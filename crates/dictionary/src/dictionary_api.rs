use reqwest::{StatusCode, Url};

use crate::{DictionaryEntry, DictionaryError};

/// Appends the word as a single percent-encoded path segment.
pub(crate) fn lookup_url(api_url: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = api_url.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl(api_url.to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definitions(
    client: &reqwest::Client,
    api_url: &Url,
    word: &str,
) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    let url = lookup_url(api_url, word)?;
    log::debug!("GET {url}");

    let res: reqwest::Response = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    log::debug!("dictionary responded with {status}");
    if status != StatusCode::OK {
        return Err(DictionaryError::Status {
            status: status.as_u16(),
        });
    }

    let body = res.bytes().await.map_err(DictionaryError::BodyRead)?;
    serde_json::from_slice(&body).map_err(DictionaryError::Deserialize)
}
