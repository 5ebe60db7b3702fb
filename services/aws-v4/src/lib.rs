//! AWS V4 request signing for streaming APIs.

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    AssumeRoleCredentialProvider, EnvCredentialProvider, InstanceMetadataCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;
