use crate::time::{self, DateTime};
use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Signer is the main struct used to sign the request.
///
/// It pairs a credential source with a request signer and keeps the last
/// fetched credential, refreshing it only once it stops being valid. Clones
/// share the same cache slot.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer with an empty credential cache.
    ///
    /// The first credential is fetched lazily on the first `sign` or
    /// `credential` call. Use [`Signer::warmed_up`] to surface source
    /// misconfiguration at construction time instead.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a new signer and eagerly fetch the first credential.
    ///
    /// Construction fails if the source cannot produce a credential, so an
    /// unusable source is reported before any request needs signing.
    pub async fn warmed_up(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Result<Self> {
        let signer = Self::new(ctx, loader, builder);
        signer.credential(time::now()).await?;
        Ok(signer)
    }

    /// Return a credential valid at `now`, fetching a fresh one if the
    /// cached credential is missing or no longer valid.
    ///
    /// The cache lock is held across the fetch, so concurrent callers that
    /// miss collapse into a single upstream request. A failed fetch leaves
    /// the previous cache content in place and propagates the error.
    pub async fn credential(&self, now: DateTime) -> Result<K> {
        let mut slot = self.credential.lock().await;
        if let Some(cred) = slot.as_ref() {
            if cred.is_valid_at(now) {
                return Ok(cred.clone());
            }
        }

        let cred = self.loader.provide_credential(&self.ctx, now).await?;
        *slot = Some(cred.clone());
        Ok(cred)
    }

    /// Sign the request with a credential valid at the current time.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        let cred = self.credential(time::now()).await?;
        self.builder.sign_request(&self.ctx, req, body, &cred).await
    }
}
