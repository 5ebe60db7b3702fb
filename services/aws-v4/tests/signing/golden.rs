//! Signature fixtures pinned against the AWS SigV4 reference vectors for the
//! Kinesis wire format. Any change to canonicalization, key derivation, or
//! the signed header set shows up here as a changed Authorization value.

use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE, USER_AGENT};
use http::request::Parts;
use http::{Method, Request};
use pretty_assertions::assert_eq;
use streamsign_aws_v4::{Credential, RequestSigner, StaticCredentialProvider};
use streamsign_core::{Context, SignRequest, Signer};
use test_case::test_case;

const LIST_STREAMS_BODY: &[u8] = b"{}";

fn credential(access_key_id: &str, secret_access_key: &str) -> Credential {
    Credential {
        access_key_id: access_key_id.to_string(),
        secret_access_key: secret_access_key.to_string(),
        ..Default::default()
    }
}

fn kinesis_parts(target: Option<&str>, date: Option<(&str, &str)>) -> Parts {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri("https://kinesis.us-east-1.amazonaws.com/")
        .header(CONTENT_TYPE, "application/x-amz-json-1.1")
        .header(USER_AGENT, "streamsign");
    if let Some(target) = target {
        req = req.header("x-amz-target", target);
    }
    if let Some((name, value)) = date {
        req = req.header(name, value);
    }
    let (parts, _) = req.body(()).expect("request must build").into_parts();
    parts
}

async fn sign(parts: &mut Parts, cred: &Credential, body: &[u8]) {
    let signer = RequestSigner::new("kinesis", "us-east-1");
    signer
        .sign_request(&Context::new(), parts, body, cred)
        .await
        .expect("sign must succeed");
}

#[test_case(
    "ASWKEY", "AWSSECRET",
    "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
     SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
     Signature=e911c622cc18918342fc9163becb6a8e51c920be1a633ae6a0c875ddb81bd1cf";
    "base key pair"
)]
#[test_case(
    "ASWKEY2", "AWSSECRET2",
    "AWS4-HMAC-SHA256 Credential=ASWKEY2/20131128/us-east-1/kinesis/aws4_request, \
     SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
     Signature=ddea6ba903aef698c951908f8e05c3326427e6b164ad6428f3c2954ed4f3a80f";
    "second key pair"
)]
#[test_case(
    "ASWNEWKEY", "AWSSECRET",
    "AWS4-HMAC-SHA256 Credential=ASWNEWKEY/20131128/us-east-1/kinesis/aws4_request, \
     SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
     Signature=e911c622cc18918342fc9163becb6a8e51c920be1a633ae6a0c875ddb81bd1cf";
    "access key id only moves the credential clause"
)]
#[tokio::test]
async fn test_list_streams_authorization(access_key: &str, secret_key: &str, expected: &str) {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")),
    );
    sign(&mut parts, &credential(access_key, secret_key), LIST_STREAMS_BODY).await;

    assert_eq!(parts.headers[AUTHORIZATION].to_str().expect("ascii"), expected);
    assert_eq!(parts.headers[DATE], "20131128T150405Z");
}

#[tokio::test]
async fn test_signing_date_enters_the_scope() {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "Mon, 25 Nov 2013 15:04:05 GMT")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131125/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
         Signature=d2dab9c6d06b54968d5365f76aab5c63211c3ef9877a46e0158a1bae2bad49b8"
    );
    assert_eq!(parts.headers[DATE], "20131125T150405Z");
}

#[tokio::test]
async fn test_absent_target_header_shrinks_the_signed_set() {
    let mut parts = kinesis_parts(None, Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")));
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;date;host;user-agent, \
         Signature=30358db8d4bd4c18ebb89f789043bf83c6b0b4582a817b5f4c9ae8b93c16bff5"
    );
}

#[tokio::test]
async fn test_amz_date_header_is_signed_in_place() {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("x-amz-date", "20131128T150405Z")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;host;user-agent;x-amz-date;x-amz-target, \
         Signature=bcc6e7e0b448360d80c1af89ef3c5a8a80e506b2f0306f77feb54ed28b184111"
    );
    assert!(!parts.headers.contains_key(DATE));
}

#[tokio::test]
async fn test_iso_date_header_is_accepted_as_is() {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "20131128T150405Z")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
         Signature=e911c622cc18918342fc9163becb6a8e51c920be1a633ae6a0c875ddb81bd1cf"
    );
}

#[tokio::test]
async fn test_re_signing_reproduces_the_signature() {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    let first = parts.headers[AUTHORIZATION].clone();
    parts.headers.remove(AUTHORIZATION);

    // The date header now carries the rewritten ISO form.
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;
    assert_eq!(parts.headers[AUTHORIZATION], first);
}

#[tokio::test]
async fn test_put_record_body_is_covered() {
    let body = br#"{"StreamName":"events","PartitionKey":"a","Data":"aGVsbG8="}"#;
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.PutRecord"),
        Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), body).await;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
         Signature=a72cc5cf1bd4b9bdcdee401dce602df96300c0794f2de89fbbe3f6a7e3c3623e"
    );
}

#[tokio::test]
async fn test_query_parameters_are_canonicalized() {
    let req = Request::builder()
        .method(Method::POST)
        .uri(
            "https://sts.us-west-2.amazonaws.com/?Version=2011-06-15&Action=AssumeRole\
             &RoleSessionName=worker&RoleArn=arn:aws:iam::123456789012:role/demo",
        )
        .header("date", "Thu, 28 Nov 2013 15:04:05 GMT")
        .body(())
        .expect("request must build");
    let (mut parts, _) = req.into_parts();

    let signer = RequestSigner::new("sts", "us-west-2");
    signer
        .sign_request(&Context::new(), &mut parts, b"", &credential("BOOTKEY", "BOOTSECRET"))
        .await
        .expect("sign must succeed");

    // Query pairs come back sorted and encoded, matching the signed bytes.
    assert_eq!(
        parts.uri.query(),
        Some(
            "Action=AssumeRole&RoleArn=arn%3Aaws%3Aiam%3A%3A123456789012%3Arole%2Fdemo\
             &RoleSessionName=worker&Version=2011-06-15"
        )
    );
    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=BOOTKEY/20131128/us-west-2/sts/aws4_request, \
         SignedHeaders=date;host, \
         Signature=d1fc25fca7cef4b6805d4fe839b835fe069999d3fabe50c45284bb417e060429"
    );
}

#[tokio::test]
async fn test_signer_resolves_and_signs() {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ASWKEY", "AWSSECRET"),
        RequestSigner::new("kinesis", "us-east-1"),
    );

    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")),
    );
    signer
        .sign(&mut parts, LIST_STREAMS_BODY)
        .await
        .expect("sign must succeed");

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str().expect("ascii"),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, \
         SignedHeaders=content-type;date;host;user-agent;x-amz-target, \
         Signature=e911c622cc18918342fc9163becb6a8e51c920be1a633ae6a0c875ddb81bd1cf"
    );
}

#[tokio::test]
async fn test_host_header_survives_signing() {
    let mut parts = kinesis_parts(
        Some("Kinesis_20131202.ListStreams"),
        Some(("date", "Thu, 28 Nov 2013 15:04:05 GMT")),
    );
    sign(&mut parts, &credential("ASWKEY", "AWSSECRET"), LIST_STREAMS_BODY).await;

    assert_eq!(parts.headers["host"], "kinesis.us-east-1.amazonaws.com");
}
