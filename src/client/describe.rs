//! Free-text university descriptions from a generative-text API.
//!
//! The service is best effort: callers go through [`describe_or_fallback`],
//! which swaps any failure for a fixed message so the drawer always has
//! something to show.

use crate::client::http::client_with_timeout;
use crate::core::config::DescriptionConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use lru::LruCache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

#[async_trait]
pub trait DescriptionService: Send + Sync {
    async fn describe(&self, name: &str, country: &str) -> Result<String>;
}

/// Resolves a description, substituting `fallback` on any error.
pub async fn describe_or_fallback(
    service: &dyn DescriptionService,
    name: &str,
    country: &str,
    fallback: &str,
) -> String {
    match service.describe(name, country).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("description for {:?} failed: {}", name, e);
            fallback.to_string()
        }
    }
}

pub fn description_prompt(name: &str, country: &str) -> String {
    format!(
        "Give a short, professional 2–3 sentence description of the university named \"{}\" in {}. \
         Keep it factual and concise. with lots of emojis related to the context",
        name, country
    )
}

/// Gemini `generateContent` over REST.
#[derive(Debug, Clone)]
pub struct GeminiDescriber {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiDescriber {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// `None` when descriptions are disabled or no API key is set.
    pub fn from_config(config: &DescriptionConfig, timeout: Duration) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        let Some(api_key) = config.api_key() else {
            log::info!(
                "{} is not set, university descriptions are disabled",
                config.api_key_env
            );
            return Ok(None);
        };
        Self::new(&config.endpoint, &config.model, api_key, timeout).map(Some)
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl DescriptionService for GeminiDescriber {
    async fn describe(&self, name: &str, country: &str) -> Result<String> {
        let prompt = description_prompt(name, country);
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let url = self.url();
        log::debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&resp.text().await?)?;
        first_text(parsed)
    }
}

fn first_text(resp: GenerateResponse) -> Result<String> {
    resp.candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .find(|text| !text.trim().is_empty())
        .ok_or_else(|| Error::Description("response contained no text".into()))
}

/// Stands in when descriptions are turned off; every call fails, so callers
/// end up with the fallback text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDescriber;

#[async_trait]
impl DescriptionService for DisabledDescriber {
    async fn describe(&self, _name: &str, _country: &str) -> Result<String> {
        Err(Error::Description("description service disabled".into()))
    }
}

/// Remembers successful answers per `(name, country)` using LRU eviction.
/// Failures are not cached.
pub struct CachedDescriber<S> {
    inner: S,
    cache: Mutex<LruCache<(String, String), String>>,
}

impl<S: DescriptionService> CachedDescriber<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: DescriptionService> DescriptionService for CachedDescriber<S> {
    async fn describe(&self, name: &str, country: &str) -> Result<String> {
        let key = (name.to_string(), country.to_string());
        if let Some(hit) = self.cache.lock().ok().and_then(|mut c| c.get(&key).cloned()) {
            return Ok(hit);
        }

        let text = self.inner.describe(name, country).await?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, text.clone());
        }
        Ok(text)
    }
}
