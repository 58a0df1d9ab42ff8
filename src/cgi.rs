//! CGI request decoding and response framing.
//!
//! # Data Flow
//! ```text
//! web server (owns the socket)
//!     → environment variables + stdin   (CGI convention)
//!     → CgiRequest::from_env (method, query string / body)
//!     → FormParams (decoded fields)
//!     → [handler computes the result]
//!     → CgiResponse (Content-Type header, blank line, HTML body)
//!     → stdout → web server → client
//! ```
//!
//! # Design Decisions
//! - Environment and stdin are injected, so decoding is testable without a
//!   hosting server
//! - POST bodies are read to exactly CONTENT_LENGTH bytes, never to EOF
//! - Response lines use `\r\n` endings per the CGI framing convention

use std::collections::HashMap;
use std::io::{Read, Write};

use crate::error::CgiError;
use crate::params::FormParams;

const URLENCODED: &str = "application/x-www-form-urlencoded";

/// A decoded CGI request: the form parameters the host delivered through the
/// environment and, for POST, standard input.
#[derive(Debug, Clone)]
pub struct CgiRequest {
    pub params: FormParams,
}

impl CgiRequest {
    /// Decode a request from CGI meta-variables and the request body stream.
    ///
    /// GET (and any method without an urlencoded body) takes its fields from
    /// `QUERY_STRING`; POST with an urlencoded `CONTENT_TYPE` reads
    /// `CONTENT_LENGTH` bytes of the body instead.
    pub fn from_env<I, R>(vars: I, body: R) -> Result<Self, CgiError>
    where
        I: IntoIterator<Item = (String, String)>,
        R: Read,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let method = vars.get("REQUEST_METHOD").map(String::as_str).unwrap_or("GET");
        let content_type = vars.get("CONTENT_TYPE").map(String::as_str).unwrap_or("");

        let raw = if method.eq_ignore_ascii_case("POST") && is_urlencoded(content_type) {
            read_body(&vars, body)?
        } else {
            vars.get("QUERY_STRING").cloned().unwrap_or_default()
        };

        Ok(Self {
            params: FormParams::parse_urlencoded(&raw),
        })
    }
}

fn is_urlencoded(content_type: &str) -> bool {
    // CONTENT_TYPE may carry parameters, e.g. "...urlencoded; charset=UTF-8".
    content_type
        .split(';')
        .next()
        .map(|t| t.trim().eq_ignore_ascii_case(URLENCODED))
        .unwrap_or(false)
}

fn read_body<R: Read>(vars: &HashMap<String, String>, body: R) -> Result<String, CgiError> {
    let length = match vars.get("CONTENT_LENGTH") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| CgiError::InvalidContentLength(raw.clone()))?,
        None => 0,
    };

    let mut buffer = Vec::new();
    body.take(length).read_to_end(&mut buffer)?;

    if buffer.len() as u64 != length {
        tracing::warn!(
            expected = length,
            actual = buffer.len(),
            "Request body shorter than CONTENT_LENGTH"
        );
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// A CGI response: an HTML body framed with the header block the hosting
/// server forwards to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiResponse {
    body: String,
}

impl CgiResponse {
    /// Frame an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The header block plus the body, as sent on stdout.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("Content-Type: text/html\r\n\r\n{}", self.body).into_bytes()
    }

    /// Emit the framed response.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(&self.to_bytes())?;
        out.flush()
    }
}
