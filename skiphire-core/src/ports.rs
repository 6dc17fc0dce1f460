//! Traits describing where catalogs come from and who hears about confirmations.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;

use crate::model::{SkipId, SkipOption};
use crate::workflow::Confirmation;

#[derive(thiserror::Error, Debug)]
/// Errors that reject a catalog load.
pub enum CatalogError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Reading the catalog from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The payload is not a list of well-formed skip records.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] JsonError),
    /// A record violates a field constraint.
    #[error("Invalid skip option {id}: {reason}")]
    Invalid {
        /// Offending option.
        id: SkipId,
        /// What is wrong with it.
        reason: String,
    },
    /// Two records share an id.
    #[error("Duplicate skip option id {0}")]
    DuplicateId(SkipId),
    /// Internal source error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Backend that provides the skip options once at start-up.
pub trait CatalogSource: Send + Sync {
    /// Short description for logs and the header, e.g. a path or URL.
    fn describe(&self) -> String;

    /// Load every option in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the source cannot be read or decoded.
    async fn load(&self) -> Result<Vec<SkipOption>, CatalogError>;
}

/// Receiver of the confirm notification.
pub trait ConfirmHook: Send + Sync {
    /// Called once per successful confirm.
    fn confirmed(&self, confirmation: &Confirmation);
}

impl<F> ConfirmHook for F
where
    F: Fn(&Confirmation) + Send + Sync,
{
    fn confirmed(&self, confirmation: &Confirmation) {
        self(confirmation);
    }
}
