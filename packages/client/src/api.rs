//! HTTP client for the word API.

use learn_words_core::{Word, WordDraft};
use reqwest::{Response, Url};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/words[/{segment}]`, with `segment` percent-encoded.
    fn words_url(&self, segment: Option<&str>) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(["api", "words"]);
            if let Some(segment) = segment {
                path.push(segment);
            }
        }
        Ok(url)
    }

    pub async fn get_all_words(&self) -> ClientResult<Vec<Word>> {
        let response = self.http.get(self.words_url(None)?).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn get_words_by_tag(&self, tag: &str) -> ClientResult<Vec<Word>> {
        let response = self.http.get(self.words_url(Some(tag))?).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn add_word(&self, draft: &WordDraft) -> ClientResult<String> {
        let response = self
            .http
            .post(self.words_url(None)?)
            .json(draft)
            .send()
            .await?;
        message(response).await
    }

    pub async fn update_word(&self, id: i64, draft: &WordDraft) -> ClientResult<String> {
        let response = self
            .http
            .put(self.words_url(Some(&id.to_string()))?)
            .json(draft)
            .send()
            .await?;
        message(response).await
    }

    pub async fn delete_word(&self, id: i64) -> ClientResult<String> {
        let response = self
            .http
            .delete(self.words_url(Some(&id.to_string()))?)
            .send()
            .await?;
        message(response).await
    }
}

async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn message(response: Response) -> ClientResult<String> {
    let body: MessageBody = check(response).await?.json().await?;
    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_url() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.words_url(None).unwrap().as_str(),
            "http://localhost:3000/api/words"
        );
        assert_eq!(
            client.words_url(Some("animals, farm")).unwrap().as_str(),
            "http://localhost:3000/api/words/animals,%20farm"
        );
    }

    #[test]
    fn test_words_url_keeps_base_path() {
        let client = ApiClient::new("http://example.com/learn/").unwrap();
        assert_eq!(
            client.words_url(Some("7")).unwrap().as_str(),
            "http://example.com/learn/api/words/7"
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
