use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed {tag} payload: {source}")]
    Malformed {
        tag: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
