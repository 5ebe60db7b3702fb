use async_trait::async_trait;
use streamsign_core::time::DateTime;
use streamsign_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider hands out one fixed AWS key pair.
///
/// Used when the caller already holds the key material, for example from its
/// own configuration system. The credential carries no expiration, so the
/// signer never refreshes it.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider around the given access key ID and secret access key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            credential: Credential {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.to_string(),
                session_token: None,
                expires_in: None,
            },
        }
    }

    /// Attach a session token to the handed out credential.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.credential.session_token = Some(token.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context, _: DateTime) -> Result<Self::Credential> {
        Ok(self.credential.clone())
    }
}
