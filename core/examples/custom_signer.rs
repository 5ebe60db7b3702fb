use async_trait::async_trait;
use http::header::HeaderValue;
use http::request::Parts;
use streamsign_core::hash::{hex_hmac_sha256, hex_sha256};
use streamsign_core::time::DateTime;
use streamsign_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
};

/// Key pair for a fictional stream gateway that authenticates requests with
/// an HMAC tag over the method, path and body.
#[derive(Clone, Debug)]
struct GatewayKey {
    key_id: String,
    secret: String,
}

impl SigningCredential for GatewayKey {
    fn expires_at(&self) -> Option<DateTime> {
        None
    }
}

#[derive(Debug)]
struct GatewayKeyFromEnv;

#[async_trait]
impl ProvideCredential for GatewayKeyFromEnv {
    type Credential = GatewayKey;

    async fn provide_credential(&self, ctx: &Context, _: DateTime) -> Result<Self::Credential> {
        let key_id = ctx.env_var("GATEWAY_KEY_ID");
        let secret = ctx.env_var("GATEWAY_SECRET");

        match (key_id, secret) {
            (Some(key_id), Some(secret)) => Ok(GatewayKey { key_id, secret }),
            _ => {
                println!("GATEWAY_KEY_ID/GATEWAY_SECRET not set, using demo key");
                Ok(GatewayKey {
                    key_id: "demo-key".to_string(),
                    secret: "demo-secret".to_string(),
                })
            }
        }
    }
}

#[derive(Debug)]
struct GatewaySigner;

#[async_trait]
impl SignRequest for GatewaySigner {
    type Credential = GatewayKey;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        let payload = format!("{}\n{}\n{}", req.method, req.uri.path(), hex_sha256(body));
        let tag = hex_hmac_sha256(credential.secret.as_bytes(), payload.as_bytes());

        req.headers.insert(
            "x-gateway-key",
            HeaderValue::from_str(&credential.key_id)
                .map_err(|e| Error::request_invalid("key id is not a valid header value").with_source(e))?,
        );
        req.headers.insert("x-gateway-tag", HeaderValue::from_str(&tag)?);

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, GatewayKeyFromEnv, GatewaySigner);

    let body = br#"{"stream":"events","records":1}"#;
    let mut parts = http::Request::builder()
        .method("POST")
        .uri("https://gateway.internal.example/v1/streams/events")
        .body(())
        .expect("request must build")
        .into_parts()
        .0;

    signer.sign(&mut parts, body).await?;

    println!("signed request:");
    for name in ["x-gateway-key", "x-gateway-tag"] {
        if let Some(value) = parts.headers.get(name) {
            println!("  {name}: {value:?}");
        }
    }

    Ok(())
}
