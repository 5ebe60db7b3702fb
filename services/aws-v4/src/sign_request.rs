use std::fmt::Write;

use async_trait::async_trait;
use http::header;
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use percent_encoding::utf8_percent_encode;
use streamsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use streamsign_core::time::{self, format_date, format_iso8601, now, DateTime};
use streamsign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::{
    AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN, X_AMZ_TARGET,
};
use crate::Credential;

/// Headers eligible for signing, in canonical order. Only members present on
/// the request end up in the signature.
const SIGNABLE_HEADERS: [&str; 6] = [
    "content-type",
    "date",
    "host",
    "user-agent",
    X_AMZ_DATE,
    X_AMZ_TARGET,
];

/// RequestSigner that implements AWS SigV4 over a fixed header set.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signature always covers the request body hash. Session tokens are
/// attached after signing and never influence the signature, so a token
/// rotation does not change the signed bytes.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new AWS V4 signer for the given service and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.to_string(),
            region: region.to_string(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        let mut signed_req = SigningRequest::build(req)?;

        canonicalize_header(&mut signed_req)?;
        let now = resolve_timestamp(&mut signed_req, self.time)?;
        canonicalize_query(&mut signed_req);

        let signed_headers = signable_headers_present(&signed_req);
        let creq = canonical_request_string(&signed_req, body, &signed_headers)?;

        let scope = format!(
            "{}/{}/{}/aws4_request",
            format_date(now),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20131128T150405Z
        // 20131128/us-east-1/kinesis/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "AWS4-HMAC-SHA256")
                .map_err(|e| Error::unexpected("failed to write signing algorithm").with_source(e))?;
            writeln!(f, "{}", format_iso8601(now))
                .map_err(|e| Error::unexpected("failed to write signing time").with_source(e))?;
            writeln!(f, "{}", &scope)
                .map_err(|e| Error::unexpected("failed to write scope").with_source(e))?;
            write!(f, "{}", hex_sha256(creq.as_bytes())).map_err(|e| {
                Error::unexpected("failed to write canonical request hash").with_source(e)
            })?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&credential.secret_access_key, now, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            credential.access_key_id,
            scope,
            signed_headers.join(";"),
            signature
        ))?;
        authorization.set_sensitive(true);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // The session token travels with the request but stays outside the
        // signed header set.
        if let Some(token) = &credential.session_token {
            if !token.is_empty() {
                let mut value = HeaderValue::from_str(token)?;
                value.set_sensitive(true);
                signed_req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
            }
        }

        signed_req.apply(req)
    }
}

/// Resolve the signing timestamp from the request headers.
///
/// `x-amz-date` wins when present, then `date`, then the clock. The `date`
/// header is rewritten in basic ISO 8601 so the canonical form matches the
/// bytes sent on the wire, and re-signing an already stamped request yields
/// the same timestamp.
fn resolve_timestamp(ctx: &mut SigningRequest, clock: Option<DateTime>) -> Result<DateTime> {
    if let Some(value) = ctx.headers.get(X_AMZ_DATE) {
        let raw = value.to_str()?.to_string();
        let t = time::parse_iso8601(&raw).map_err(|err| {
            Error::request_invalid("x-amz-date header is not a valid timestamp")
                .with_context(format!("value: {raw}"))
                .with_source(err)
        })?;
        if ctx.headers.contains_key(header::DATE) {
            ctx.headers
                .insert(header::DATE, format_iso8601(t).parse()?);
        }
        return Ok(t);
    }

    if let Some(value) = ctx.headers.get(header::DATE) {
        let raw = value.to_str()?.to_string();
        let t = time::parse_rfc2822(&raw)
            .or_else(|_| time::parse_iso8601(&raw))
            .map_err(|err| {
                Error::request_invalid("date header is not a valid timestamp")
                    .with_context(format!("value: {raw}"))
                    .with_source(err)
            })?;
        ctx.headers
            .insert(header::DATE, format_iso8601(t).parse()?);
        return Ok(t);
    }

    let t = clock.unwrap_or_else(now);
    ctx.headers
        .insert(header::DATE, format_iso8601(t).parse()?);
    Ok(t)
}

fn canonicalize_header(ctx: &mut SigningRequest) -> Result<()> {
    // Header values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)
    }

    // Insert HOST header if not present.
    if !ctx.headers.contains_key(header::HOST) {
        ctx.headers
            .insert(header::HOST, ctx.authority.as_str().parse()?);
    }

    Ok(())
}

fn canonicalize_query(ctx: &mut SigningRequest) {
    if ctx.query.is_empty() {
        return;
    }

    // Sort by param name
    ctx.query.sort();

    ctx.query = ctx
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();
}

fn signable_headers_present(ctx: &SigningRequest) -> Vec<&'static str> {
    SIGNABLE_HEADERS
        .iter()
        .copied()
        .filter(|name| ctx.headers.contains_key(*name))
        .collect()
}

fn canonical_request_string(
    ctx: &SigningRequest,
    body: &[u8],
    signed_headers: &[&'static str],
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)
        .map_err(|e| Error::unexpected("failed to write method").with_source(e))?;
    // Insert encoded path
    let path = ctx.path_percent_decoded();
    writeln!(f, "{}", utf8_percent_encode(&path, &AWS_URI_ENCODE_SET))
        .map_err(|e| Error::unexpected("failed to write path").with_source(e))?;
    // Insert query
    writeln!(
        f,
        "{}",
        ctx.query
            .iter()
            .map(|(k, v)| { format!("{k}={v}") })
            .collect::<Vec<_>>()
            .join("&")
    )
    .map_err(|e| Error::unexpected("failed to write query").with_source(e))?;
    // Insert signed headers
    for name in signed_headers.iter() {
        let value = &ctx.headers[*name];
        writeln!(
            f,
            "{}:{}",
            name,
            value.to_str().expect("header value must be valid")
        )
        .map_err(|e| Error::unexpected("failed to write header").with_source(e))?;
    }
    writeln!(f).map_err(|e| Error::unexpected("failed to write empty line").with_source(e))?;
    writeln!(f, "{}", signed_headers.join(";"))
        .map_err(|e| Error::unexpected("failed to write signed headers").with_source(e))?;
    // The body hash covers the actual payload, an empty body hashes the
    // empty string.
    write!(f, "{}", hex_sha256(body))
        .map_err(|e| Error::unexpected("failed to write body hash").with_source(e))?;

    Ok(f)
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    let sign_request = hmac_sha256(sign_service.as_slice(), "aws4_request".as_bytes());

    sign_request
}
