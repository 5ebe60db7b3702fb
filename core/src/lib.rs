//! Core building blocks for credential lifecycle and request signing.
//!
//! Everything in this crate is service-agnostic. A service crate supplies a
//! credential type implementing [`SigningCredential`], a source implementing
//! [`ProvideCredential`] and a signer implementing [`SignRequest`]. The
//! [`Signer`] here wires them together and owns the caching and refresh of
//! the credential in between.
//!
//! Process facilities such as the HTTP client and the environment are not
//! reached for directly. They enter through a [`Context`], which keeps the
//! whole stack testable and lets callers decide what a signer may touch.
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use streamsign_core::time::DateTime;
//! use streamsign_core::{
//!     Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct ApiToken {
//!     value: String,
//!     expires_at: Option<DateTime>,
//! }
//!
//! impl SigningCredential for ApiToken {
//!     fn expires_at(&self) -> Option<DateTime> {
//!         self.expires_at
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct TokenFromEnv;
//!
//! #[async_trait]
//! impl ProvideCredential for TokenFromEnv {
//!     type Credential = ApiToken;
//!
//!     async fn provide_credential(&self, ctx: &Context, _: DateTime) -> Result<Self::Credential> {
//!         Ok(ApiToken {
//!             value: ctx.env_var("API_TOKEN").unwrap_or_default(),
//!             expires_at: None,
//!         })
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct BearerAuth;
//!
//! #[async_trait]
//! impl SignRequest for BearerAuth {
//!     type Credential = ApiToken;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut http::request::Parts,
//!         _body: &[u8],
//!         credential: &Self::Credential,
//!     ) -> Result<()> {
//!         let value = format!("Bearer {}", credential.value);
//!         req.headers.insert(http::header::AUTHORIZATION, value.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new();
//! let signer = Signer::new(ctx, TokenFromEnv, BearerAuth);
//!
//! let mut parts = http::Request::builder()
//!     .method("POST")
//!     .uri("https://kinesis.us-east-1.amazonaws.com")
//!     .body(())
//!     .expect("request must build")
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, b"{}").await?;
//! # Ok(())
//! # }
//! ```
//!
//! The [`hash`] and [`time`] modules hold the digest and timestamp
//! primitives the service crates share. [`utils`] carries secret redaction
//! for Debug output.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
