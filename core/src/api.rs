use crate::time::DateTime;
use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by the signer as the signing key.
///
/// Service may require different material to sign the request, for example,
/// AWS requires an access key and secret key, while other services require a
/// bearer token.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// The instant this credential stops being usable, if it expires at all.
    fn expires_at(&self) -> Option<DateTime>;

    /// Check if the credential is still usable at the given instant.
    ///
    /// A credential whose expiration equals `now` is already expired.
    fn is_valid_at(&self, now: DateTime) -> bool {
        match self.expires_at() {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }
}

/// ProvideCredential is the trait used by the signer to fetch signing
/// material from its source.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Fetch a credential usable for signing at `now`.
    ///
    /// A source either produces usable material or fails with an error
    /// describing why; there is no silent fallthrough to another source.
    async fn provide_credential(&self, ctx: &Context, now: DateTime) -> Result<Self::Credential>;
}

/// SignRequest is the trait used by the signer to apply a signature to a
/// request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Sign the request parts in place.
    ///
    /// The body is passed alongside the parts because its hash is one of
    /// the signature inputs.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()>;
}
