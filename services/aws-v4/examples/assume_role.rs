use anyhow::Result;
use streamsign_aws_v4::{AssumeRoleCredentialProvider, EnvCredentialProvider, RequestSigner};
use streamsign_core::{Context, OsEnv, Signer};
use streamsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let role_arn = std::env::var("STREAMSIGN_EXAMPLE_ROLE_ARN")
        .unwrap_or_else(|_| "arn:aws:iam::123456789012:role/demo".to_string());
    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // The bootstrap signer authenticates the STS exchange with whatever the
    // environment provides.
    let sts_signer = Signer::new(
        ctx.clone(),
        EnvCredentialProvider::new(),
        RequestSigner::new("sts", &region),
    );

    let provider = AssumeRoleCredentialProvider::new(&role_arn, &region, sts_signer)
        .with_role_session_name("streamsign-example");

    // The assumed credential feeds a second signer for the streaming service.
    let signer = Signer::new(
        ctx,
        provider,
        RequestSigner::new("kinesis", &region),
    );

    let req = http::Request::post(format!("https://kinesis.{region}.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "Kinesis_20131202.ListStreams")
        .body("{}")?;

    let (mut parts, body) = req.into_parts();
    match signer.sign(&mut parts, body.as_bytes()).await {
        Ok(_) => {
            println!("Request signed with assumed role credentials!");
            println!(
                "Authorization header: {:?}",
                parts.headers.get("authorization")
            );
            println!(
                "Security token attached: {}",
                parts.headers.contains_key("x-amz-security-token")
            );
        }
        Err(e) => eprintln!("Failed to assume role: {e}"),
    }

    Ok(())
}
