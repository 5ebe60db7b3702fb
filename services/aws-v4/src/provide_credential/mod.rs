mod assume_role;
pub use assume_role::AssumeRoleCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod imds;
pub use imds::InstanceMetadataCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;
