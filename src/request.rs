//! ベースウェアから来たSHIORIのリクエスト
//!
//! # Examples
//!
//! ```
//! use shiori_interface_rs::*;
//!
//! let request_raw = "GET SHIORI/3.0\r\nCharset: UTF-8\r\nSender: SSP\r\nID: OnBoot\r\n\r\n";
//! let request = parse_request(request_raw).unwrap();
//!
//! // testing
//! assert_eq!(request.method(), Method::Get);
//! assert_eq!(request.protocol(), Protocol::Shiori);
//! assert_eq!(request.version(), "3.0");
//! assert_eq!(request.charset(), "UTF-8");
//! assert_eq!(request.sender(), "SSP");
//! assert_eq!(request.reference(0), "");
//! ```

use std::fmt::Display;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::charset::decode_message;
use crate::error::{ParseError, ShioriError};
use crate::headers::{parse_header_lines, Headers};
use crate::message::ShioriMessage;
use crate::method::{to_method, Method, Protocol};

lazy_static! {
    static ref REQUEST_LINE: Regex = Regex::new(r"^(.+) SHIORI/([0-9]+\.[0-9]+)$").unwrap();
}

/// SHIORIのリクエスト
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Request {
    method: Method,
    protocol: Protocol,
    version: String,
    headers: Headers,
}

/// 文字列からリクエストを読む。
///
/// ヘッダの途中で失敗した場合は、メソッドとバージョンと読めたヘッダを持つリクエストを途中結果として添える。
pub fn parse_request(text: &str) -> Result<Request, ParseError<Request>> {
    let mut lines = text.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let header_lines: Vec<&str> = lines.collect();

    let captures = REQUEST_LINE.captures(request_line).ok_or_else(|| {
        debug!("request line parse failed: {:?}", request_line);
        ShioriError::ParseRequest(request_line.to_string())
    })?;

    let method = to_method(&captures[1]).map_err(|e| {
        debug!("unknown method: {:?}", &captures[1]);
        e
    })?;
    let mut request = Request::new(method, &captures[2]);

    match parse_header_lines(header_lines.as_slice()) {
        Ok(headers) => {
            request.headers = headers;
            trace!("parsed request: {} SHIORI/{}", request.method, request.version);
            Ok(request)
        }
        Err(e) => {
            let (error, partial) = e.into_parts();
            request.headers = partial.unwrap_or_default();
            Err(ParseError::new(error, Some(request)))
        }
    }
}

/// `Charset`ヘッダに従ってバイト列を文字列に戻してから、リクエストを読む。
pub fn parse_request_bytes(bytes: &[u8]) -> Result<Request, ParseError<Request>> {
    let (contents, _charset) = decode_message(bytes)?;
    parse_request(&contents)
}

impl Request {
    /// ヘッダが空のリクエストを生成する
    pub fn new<V: Into<String>>(method: Method, version: V) -> Request {
        Request {
            method,
            protocol: Protocol::Shiori,
            version: version.into(),
            headers: Headers::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version<V: Into<String>>(&mut self, version: V) {
        self.version = version.into();
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }
}

impl ShioriMessage for Request {
    fn headers(&self) -> &Headers {
        &self.headers
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{}\r\n{}\r\n",
            self.method, self.protocol, self.version, self.headers
        )
    }
}
