use async_trait::async_trait;
use streamsign_core::time::DateTime;
use streamsign_core::{Context, Error, ProvideCredential, Result};

use crate::constants::*;
use crate::Credential;

/// EnvCredentialProvider loads AWS credentials from environment variables.
///
/// Two names are recognized for each half of the key pair, checked in order:
/// - `AWS_ACCESS_KEY`, then `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_KEY`, then `AWS_SECRET_ACCESS_KEY`
///
/// `AWS_SECURITY_TOKEN` is picked up as the session token when set. A variable
/// set to the empty string counts as unset.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

fn non_empty_var(ctx: &Context, name: &str) -> Option<String> {
    ctx.env_var(name).filter(|v| !v.is_empty())
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context, _: DateTime) -> Result<Self::Credential> {
        let access_key_id = non_empty_var(ctx, AWS_ACCESS_KEY)
            .or_else(|| non_empty_var(ctx, AWS_ACCESS_KEY_ID))
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "access key not found in env, checked {AWS_ACCESS_KEY} and {AWS_ACCESS_KEY_ID}"
                ))
            })?;

        let secret_access_key = non_empty_var(ctx, AWS_SECRET_KEY)
            .or_else(|| non_empty_var(ctx, AWS_SECRET_ACCESS_KEY))
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "secret key not found in env, checked {AWS_SECRET_KEY} and {AWS_SECRET_ACCESS_KEY}"
                ))
            })?;

        Ok(Credential {
            access_key_id,
            secret_access_key,
            session_token: non_empty_var(ctx, AWS_SECURITY_TOKEN),
            expires_in: None,
        })
    }
}
