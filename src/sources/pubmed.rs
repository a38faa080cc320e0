use std::time::Duration;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use tracing::debug;

use crate::types::error::Error;

/// Sentinel returned when an identifier resolves to no usable record.
/// A missing paper is an expected, common outcome, not an error.
pub const NOT_FOUND_MESSAGE: &str = "Paper could not be found";

const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Fetch-by-identifier collaborator: resolves a numeric identifier to a
/// single plain-text abstract.
#[async_trait]
pub trait AbstractSource: Send + Sync {
    /// Fetch the abstract for `pmid`. Returns [`NOT_FOUND_MESSAGE`] when
    /// the identifier resolves to no record or a malformed record;
    /// transport failures are [`Error::FetchFailed`].
    async fn fetch_abstract(&self, pmid: u64) -> Result<String, Error>;
}

/// PubMed efetch client.
pub struct PubMedClient {
    client: Client,
    base_url: String,
}

impl PubMedClient {
    /// Create a client against the public NCBI efetch endpoint.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(EFETCH_URL.to_string())
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::FetchFailed(e.to_string()))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AbstractSource for PubMedClient {
    async fn fetch_abstract(&self, pmid: u64) -> Result<String, Error> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("db", "pubmed"), ("retmode", "xml"), ("id", &pmid.to_string())])
            .send()
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::FetchFailed(format!("status {}", response.status())));
        }

        let body = response.text().await.map_err(|e| Error::FetchFailed(e.to_string()))?;
        match extract_abstract(&body) {
            Some(abstract_text) => Ok(abstract_text),
            None => {
                debug!(pmid, "no abstract in efetch response");
                Ok(NOT_FOUND_MESSAGE.to_string())
            }
        }
    }
}

/// Pull the first AbstractText element out of an efetch response.
/// A missing or malformed record yields `None` rather than an error.
fn extract_abstract(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside_abstract = false;
    let mut abstract_text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"AbstractText" => inside_abstract = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"AbstractText" => break,
            Ok(Event::Text(e)) if inside_abstract => {
                abstract_text.push_str(&e.unescape().ok()?);
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
    }
    if abstract_text.is_empty() {
        None
    } else {
        Some(abstract_text)
    }
}
