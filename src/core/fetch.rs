//! Profile retrieval over HTTP.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::{Error as _, Unexpected};
use serde_json::{json, Value};

use crate::core::config::{Config, QueryParameters};
use crate::core::profile::Profile;
use crate::core::query::QueryBuilder;
use crate::error::{GprofError, Result};

/// Anything that can hand the dashboard a fresh profile snapshot.
pub trait ProfileSource {
    fn fetch(&mut self) -> Result<Profile>;
}

/// Build the blocking HTTP client used for every fetch.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("gprof-client/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GprofError::network(format!("Failed to build HTTP client: {}", e)))
}

/// POST `query` to `url` wrapped as `{"query": ...}` and decode the reply.
pub fn fetch(client: &Client, url: &str, query: &str) -> Result<Profile> {
    let response = client
        .post(url)
        .json(&json!({ "query": query }))
        .send()
        .map_err(|e| GprofError::network(format!("POST {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GprofError::network(format!(
            "{} returned status {}",
            url, status
        )));
    }

    let body = response
        .bytes()
        .map_err(|e| GprofError::network(format!("Failed to read response body: {}", e)))?;

    decode_profile(&body)
}

/// Decode a response body.
///
/// An empty body or a bare `null` is a valid, empty profile. Anything else
/// must be a JSON object.
pub fn decode_profile(body: &[u8]) -> Result<Profile> {
    if body.iter().all(u8::is_ascii_whitespace) {
        log::debug!("empty response body, using empty profile");
        return Ok(Profile::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Null => {
            log::debug!("null response body, using empty profile");
            Ok(Profile::default())
        }
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(GprofError::Decode(serde_json::Error::invalid_type(
            unexpected(&other),
            &"a profile object",
        ))),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Builds the query from the template and fetches it on every call.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: Client,
    url: String,
    builder: QueryBuilder,
    params: QueryParameters,
}

impl HttpProfileSource {
    pub fn new(config: &Config, template_path: PathBuf) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(config.timeout_secs))?,
            url: config.url.clone(),
            builder: QueryBuilder::new(template_path),
            params: config.query_parameters.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProfileSource for HttpProfileSource {
    fn fetch(&mut self) -> Result<Profile> {
        let query = self.builder.build(&self.params)?;
        log::debug!("fetching profile from {} ({} byte query)", self.url, query.len());

        let profile = fetch(&self.client, &self.url, &query)?;
        if profile.is_empty() {
            log::warn!("{} returned an empty profile", self.url);
        }
        log::debug!(
            "profile: {} cpu samples, {} files, {} disks",
            profile.cpu.len(),
            profile.file.len(),
            profile.disk.len()
        );

        Ok(profile)
    }
}
