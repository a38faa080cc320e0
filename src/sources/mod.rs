//! External text sources.

/// PubMed fetch-by-identifier collaborator.
pub mod pubmed;

pub use pubmed::{AbstractSource, PubMedClient, NOT_FOUND_MESSAGE};
