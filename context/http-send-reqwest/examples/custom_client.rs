use anyhow::Result;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use streamsign_core::Context;
use streamsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("streamsign-example/1.0")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Max 10 idle connections per host");
    println!("  - Custom user agent");

    // Create context with the custom client
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // Test the HTTP client with a simple request
    let test_url = "http://169.254.169.254/latest/meta-data/iam/security-credentials/";
    println!("\nTesting HTTP client with GET {test_url}");

    let req = http::Request::builder()
        .method("GET")
        .uri(test_url)
        .body(Bytes::new())?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Attached roles:");
            for line in resp.body().lines() {
                println!("  {line}");
            }
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    // Demonstrate using the default client with its 10 second bound
    println!("\n--- Using default client ---");
    let default_ctx = Context::new().with_http_send(ReqwestHttpSend::default());

    let req2 = http::Request::builder()
        .method("GET")
        .uri("http://169.254.169.254/latest/meta-data/iam/security-credentials/")
        .body(Bytes::new())?;

    match default_ctx.http_send(req2).await {
        Ok(resp) => {
            println!("Request successful!");
            println!("Response status: {}", resp.status());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
