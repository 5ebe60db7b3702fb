use std::env;

use anyhow::Result;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use log::{debug, warn};
use reqwest::Client;
use streamsign_aws_v4::{EnvCredentialProvider, RequestSigner};
use streamsign_core::time::now;
use streamsign_core::{Context, OsEnv, ProvideCredential, SignRequest};
use streamsign_http_send_reqwest::ReqwestHttpSend;

fn init_live_test() -> Option<(Context, RequestSigner, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("STREAMSIGN_TEST_LIVE").unwrap_or_default() != "on" {
        return None;
    }

    let region = env::var("STREAMSIGN_TEST_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let url = format!("https://kinesis.{region}.amazonaws.com");

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let signer = RequestSigner::new("kinesis", &region);

    Some((ctx, signer, url))
}

#[tokio::test]
async fn test_list_streams_live() -> Result<()> {
    let Some((ctx, signer, url)) = init_live_test() else {
        warn!("STREAMSIGN_TEST_LIVE is not set, skipped");
        return Ok(());
    };

    let cred = EnvCredentialProvider::new()
        .provide_credential(&ctx, now())
        .await
        .expect("credentials must load from env");

    let req = Request::builder()
        .method(Method::POST)
        .uri(&url)
        .header(CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-target", "Kinesis_20131202.ListStreams")
        .body("{}".to_string())?;

    let (mut parts, body) = req.into_parts();
    signer
        .sign_request(&ctx, &mut parts, body.as_bytes(), &cred)
        .await
        .expect("sign request must succeed");
    let req = Request::from_parts(parts, body);

    debug!("signed request: {req:?}");

    let client = Client::new();
    let resp = client
        .execute(req.try_into()?)
        .await
        .expect("request must succeed");

    let status = resp.status();
    debug!("got response: {:?}", resp.text().await?);
    assert_eq!(StatusCode::OK, status);
    Ok(())
}
