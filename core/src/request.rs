use std::borrow::Cow;
use std::mem;
use std::str::FromStr;

use crate::{Error, Result};
use http::uri::{Authority, PathAndQuery, Scheme};
use http::{HeaderMap, HeaderValue, Method, Uri};

/// SigningRequest is the mutable picture of a request that a signer works on.
///
/// It is split off the request parts before canonicalization and written back
/// once the signature is attached, so the bytes that go out on the wire are
/// exactly the bytes that were signed.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// Query parameters, decoded into pairs.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Split a signing view off the given request parts.
    ///
    /// The query string is decoded into pairs here; signers re-encode it
    /// with the char set their service requires. A request without an
    /// authority cannot be signed since the host is part of the signature.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let authority = uri.authority.ok_or_else(|| {
            Error::request_invalid("request without authority is invalid for signing")
        })?;
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));
        let query = match paq.query() {
            Some(q) => form_urlencoded::parse(q.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            None => Vec::new(),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority,
            path: paq.path().to_string(),
            query,
            // Headers move out of the request here and move back in apply.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Write the signing view back onto the request parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;

        let encoded_len: usize = self.query.iter().map(|(k, v)| k.len() + v.len() + 2).sum();
        let mut paq = self.path;
        paq.reserve(encoded_len);
        for (i, (k, v)) in self.query.iter().enumerate() {
            paq.push(if i == 0 { '?' } else { '&' });
            paq.push_str(k);
            if !v.is_empty() {
                paq.push('=');
                paq.push_str(v);
            }
        }

        let mut uri_parts = mem::take(&mut parts.uri).into_parts();
        uri_parts.scheme = Some(self.scheme);
        uri_parts.authority = Some(self.authority);
        uri_parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);
        parts.uri = Uri::from_parts(uri_parts)?;

        Ok(())
    }

    /// Get the path percent decoded.
    pub fn path_percent_decoded(&self) -> Cow<str> {
        percent_encoding::percent_decode_str(&self.path).decode_utf8_lossy()
    }

    /// Trim leading and trailing spaces off a header value in place.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let mut bs = v.as_bytes();
        while let [b' ', rest @ ..] = bs {
            bs = rest;
        }
        while let [rest @ .., b' '] = bs {
            bs = rest;
        }

        // Trimming spaces off a valid value cannot make it invalid.
        *v = HeaderValue::from_bytes(bs).expect("header value must stay valid")
    }
}
