use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The remote API rejected the request with an HTTP status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never reached the remote API.
    #[error("network error: {0}")]
    Network(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// The string the view layer renders in place of its content.
    ///
    /// Known status classes map to the fixed labels the UI tests assert on;
    /// anything else passes the underlying message through.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Api { status: 404, .. } => "Erreur 404".to_string(),
            StoreError::Api { status: 500, .. } => "Erreur 500".to_string(),
            StoreError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
