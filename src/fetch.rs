use isahc::{config::Configurable, HttpClient};
use log::{debug, warn};
use std::io::Read;
use std::time::Duration;
use url::Url;

use crate::errors::{humanize_error, Result};
use crate::Configuration;

// Anything capable of producing the raw bytes of a named word list.
pub trait Fetcher {
  fn fetch(&self, resource: &str) -> Result<Vec<u8>>;
}

// Everything after the first `.` is dropped; the asset host serves lists without extensions.
pub fn resource_stem(resource: &str) -> &str {
  resource.split('.').next().unwrap_or(resource)
}

// Holds only settings; the url is parsed and the http client built when a fetch actually
// happens, so a fully cached run never touches either.
pub struct AssetFetcher {
  base: String,
  timeout: Duration,
}

impl AssetFetcher {
  pub fn new(config: &Configuration) -> Self {
    let mut base = config.assets_url.clone();

    if !base.ends_with('/') {
      base.push('/');
    }

    AssetFetcher {
      base,
      timeout: config.timeout(),
    }
  }

  pub fn url_for(&self, resource: &str) -> Result<Url> {
    Url::parse(&self.base)
      .and_then(|base| base.join(resource_stem(resource)))
      .map_err(humanize_error)
  }
}

impl Fetcher for AssetFetcher {
  fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
    let url = self.url_for(resource)?;
    debug!("fetching '{}' from {}", resource, url);

    let client = HttpClient::builder()
      .timeout(self.timeout)
      .build()
      .map_err(humanize_error)?;
    let mut response = client.get(url.as_str()).map_err(humanize_error)?;

    // The body is used regardless of status; an error page becomes the word list.
    if !response.status().is_success() {
      warn!("bad response status for '{}': {}", url, response.status());
    }

    let mut bytes = Vec::new();
    response
      .body_mut()
      .read_to_end(&mut bytes)
      .map_err(humanize_error)?;

    debug!("received {} bytes for '{}'", bytes.len(), resource);
    Ok(bytes)
  }
}

impl std::fmt::Debug for AssetFetcher {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "AssetFetcher<{}>", self.base)
  }
}
