//! HTTP client for the Câmara dos Deputados open data API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{DeputadoQuery, DespesaQuery, Query},
    retry::RetryPolicy,
    types::{Deputado, DeputadoDetalhe, Despesa, Pagina, Resposta},
    Error,
};

/// Hard cap on `next` links followed per collection. The API terminates
/// pagination by omitting the link; the cap only guards against a
/// misbehaving upstream looping forever.
const MAX_PAGES: usize = 100;

/// Per-request timeout. A timed-out request counts as a retryable failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Câmara dos Deputados open data API.
///
/// Each request runs under a 30-second timeout and the client's
/// [`RetryPolicy`]: HTTP 429, HTTP 503, and transport-level timeout or
/// connect failures are retried with exponential backoff; any other
/// non-success status fails immediately carrying the status code and the
/// first 200 characters of the response body.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://dadosabertos.camara.leg.br/api/v2`.
    base_api_url: String,
    retry: RetryPolicy,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production open data API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://dadosabertos.camara.leg.br/api/v2".to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Creates a new client with a custom base URL and retry policy.
    pub fn with_config(base_url: &str, retry: RetryPolicy) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            retry,
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str())?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Issues one GET request against `url`, without retries.
    async fn attempt<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }

    /// Fetches `url` under the retry policy, backing off exponentially on
    /// retryable failures and returning the last error once the budget is
    /// exhausted.
    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let mut attempt: u32 = 0;
        loop {
            match self.attempt::<T>(url.clone()).await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= self.retry.retries || !err.is_retryable() {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        url = %url,
                        error = %err,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Fetches one page of the deputy roster matching the given query.
    pub async fn get_deputados(
        &self,
        query: &DeputadoQuery,
    ) -> Result<Pagina<Deputado>, Error> {
        let url = self.get_url("/deputados", Some(query))?;
        self.get(url).await
    }

    /// Fetches a single deputy's full profile by id.
    pub async fn get_deputado(&self, id: i64) -> Result<Resposta<DeputadoDetalhe>, Error> {
        let url = self.get_url(
            format!("/deputados/{id}").as_str(),
            None::<&DeputadoQuery>,
        )?;
        self.get(url).await
    }

    /// Fetches one page of a deputy's CEAP expense records.
    pub async fn get_despesas(
        &self,
        id: i64,
        query: &DespesaQuery,
    ) -> Result<Pagina<Despesa>, Error> {
        let url = self.get_url(format!("/deputados/{id}/despesas").as_str(), Some(query))?;
        self.get(url).await
    }

    /// Fetches an arbitrary page by its absolute URL, as advertised by a
    /// `rel == "next"` link.
    pub async fn get_page<T>(&self, href: &str) -> Result<Pagina<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(href)?;
        self.get(url).await
    }

    /// Materializes the full deputy roster by following `next` links until
    /// the API stops advertising one. Page order and within-page order are
    /// preserved.
    pub async fn fetch_all_deputados(
        &self,
        query: &DeputadoQuery,
    ) -> Result<Vec<Deputado>, Error> {
        let first = self.get_deputados(query).await?;
        self.drain_pages(first).await
    }

    /// Materializes all of a deputy's expense records matching the query by
    /// following `next` links.
    pub async fn fetch_all_despesas(
        &self,
        id: i64,
        query: &DespesaQuery,
    ) -> Result<Vec<Despesa>, Error> {
        let first = self.get_despesas(id, query).await?;
        self.drain_pages(first).await
    }

    /// Follows `next` links from an already-fetched first page, accumulating
    /// `dados` in order, up to [`MAX_PAGES`].
    async fn drain_pages<T>(&self, first: Pagina<T>) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let mut collected = first.dados;
        let mut next = first.links;
        let mut pages = 1usize;

        while let Some(href) = next_href(&next) {
            if pages >= MAX_PAGES {
                return Err(Error::TooManyPages { limit: MAX_PAGES });
            }
            let page: Pagina<T> = self.get_page(&href).await?;
            collected.extend(page.dados);
            next = page.links;
            pages += 1;
        }

        Ok(collected)
    }
}

fn next_href(links: &[crate::types::Link]) -> Option<String> {
    links
        .iter()
        .find(|link| link.rel == "next")
        .map(|link| link.href.clone())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
