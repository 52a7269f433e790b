//! Typed error for metadata-document interpretation.

use thiserror::Error;

/// The metadata document could not be interpreted as icon entries.
///
/// Shape errors name the offending icon key so a multi-thousand-entry
/// document can be debugged without bisecting it.
#[derive(Debug, Error)]
pub enum MalformedDocumentError {
    /// The document is not syntactically valid YAML.
    #[error("metadata document is not valid YAML: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The top level of the document is not a mapping of icon entries.
    #[error("metadata document top level is not a mapping")]
    NotAMapping,

    /// An icon key is not a plain string.
    #[error("icon key is not a string: {key}")]
    NonStringKey {
        /// Debug rendering of the offending key value.
        key: String,
    },

    /// An icon entry is missing `styles`/`unicode` or has the wrong shape.
    #[error("icon entry '{key}' has unexpected shape: {source}")]
    Entry {
        /// The icon key whose value could not be interpreted.
        key: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// An icon's `unicode` field is not a hex Unicode scalar.
    #[error("icon entry '{key}' has invalid unicode field '{unicode}'")]
    BadCodepoint {
        /// The icon key with the bad field.
        key: String,
        /// The raw field value.
        unicode: String,
    },
}
