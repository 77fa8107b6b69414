//! ベースウェアへ返すSHIORIのレスポンス
//!
//! # Examples
//!
//! ```
//! use shiori_interface_rs::*;
//!
//! let mut response = Response::new(200, "3.0");
//! response.headers_mut().insert("Charset", "UTF-8");
//! response.headers_mut().insert("Value", "\\0\\s[0]Hello.\\e");
//! assert_eq!(response.message(), "OK");
//! assert_eq!(response.value(0), "\\0\\s[0]Hello.\\e");
//!
//! // testing
//! let result = parse_response(&response.to_string()).unwrap();
//! assert_eq!(result, response);
//! ```

use std::fmt::Display;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::charset::decode_message;
use crate::error::{ParseError, ShioriError};
use crate::headers::{parse_header_lines, Headers};
use crate::message::ShioriMessage;
use crate::method::Protocol;

const SHIORI_HEADER_VALUE: &str = "Value";

lazy_static! {
    static ref STATUS_LINE: Regex = Regex::new(r"^SHIORI/([0-9]+\.[0-9]+) ([0-9]+) (.+)$").unwrap();
}

/// SHIORIのレスポンス
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Response {
    code: u64,
    protocol: Protocol,
    version: String,
    headers: Headers,
}

/// 文字列からレスポンスを読む。
///
/// ステータス行の理由句は読み捨てる。
pub fn parse_response(text: &str) -> Result<Response, ParseError<Response>> {
    let mut lines = text.split("\r\n");
    let status_line = lines.next().unwrap_or_default();
    let header_lines: Vec<&str> = lines.collect();

    let captures = STATUS_LINE.captures(status_line).ok_or_else(|| {
        debug!("status line parse failed: {:?}", status_line);
        ShioriError::ParseResponse(status_line.to_string())
    })?;

    let code = captures[2].parse::<u64>().map_err(|e| {
        debug!("status code parse failed: {:?}", &captures[2]);
        ShioriError::from(e)
    })?;
    let mut response = Response::new(code, &captures[1]);

    match parse_header_lines(header_lines.as_slice()) {
        Ok(headers) => {
            response.headers = headers;
            trace!("parsed response: SHIORI/{} {}", response.version, response.code);
            Ok(response)
        }
        Err(e) => {
            let (error, partial) = e.into_parts();
            response.headers = partial.unwrap_or_default();
            Err(ParseError::new(error, Some(response)))
        }
    }
}

/// `Charset`ヘッダに従ってバイト列を文字列に戻してから、レスポンスを読む。
pub fn parse_response_bytes(bytes: &[u8]) -> Result<Response, ParseError<Response>> {
    let (contents, _charset) = decode_message(bytes)?;
    parse_response(&contents)
}

impl Response {
    /// ヘッダが空のレスポンスを生成する
    pub fn new<V: Into<String>>(code: u64, version: V) -> Response {
        Response {
            code,
            protocol: Protocol::Shiori,
            version: version.into(),
            headers: Headers::new(),
        }
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn set_code(&mut self, code: u64) {
        self.code = code;
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

    /// ステータスコードに対応する理由句。200以外は空文字列
    pub fn message(&self) -> &'static str {
        match self.code {
            200 => "OK",
            _ => "",
        }
    }

    /// `Value`ヘッダ。なければ空文字列
    ///
    /// `index`は使われず、常に`Value`を読む。
    pub fn value(&self, _index: usize) -> &str {
        self.headers.value(SHIORI_HEADER_VALUE)
    }
}

impl ShioriMessage for Response {
    fn headers(&self) -> &Headers {
        &self.headers
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {} {}\r\n{}\r\n",
            self.protocol,
            self.version,
            self.code,
            self.message(),
            self.headers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use encoding_rs::{SHIFT_JIS, UTF_8};

    mod parse_response {
        use super::*;

        #[test]
        fn success_when_valid_str() {
            let case = "SHIORI/3.0 200 OK\r\nSender: A\r\n\r\n";
            let result = parse_response(case).unwrap();
            assert_eq!(result.code(), 200);
            assert_eq!(result.protocol(), Protocol::Shiori);
            assert_eq!(result.version(), "3.0");
            assert_eq!(result.headers(), &Headers::from_iter([("Sender", "A")]));
        }

        #[test]
        fn success_when_reason_phrase_differs() {
            let case = "SHIORI/3.0 500 Internal Error\r\n\r\n";
            let result = parse_response(case).unwrap();
            assert_eq!(result.code(), 500);
            assert!(result.headers().is_empty());
        }

        #[test]
        fn success_when_long_code() {
            let result = parse_response("SHIORI/2.0 0204 No Content\r\n\r\n").unwrap();
            assert_eq!(result.code(), 204);
            assert_eq!(result.version(), "2.0");
        }

        #[test]
        fn failed_when_no_reason_phrase() {
            for case in ["SHIORI/3.0 204", "SHIORI/3.0 204 "] {
                let result = parse_response(case).unwrap_err();
                assert_eq!(result.error(), &ShioriError::ParseResponse(case.to_string()));
            }
        }

        #[test]
        fn failed_when_request_given() {
            let case = "GET SHIORI/3.0\r\n\r\n";
            let result = parse_response(case).unwrap_err();
            assert_eq!(
                result.error(),
                &ShioriError::ParseResponse("GET SHIORI/3.0".to_string())
            );
            assert!(result.partial().is_none());
        }

        #[test]
        fn failed_when_non_numeric_code() {
            let case = "SHIORI/3.0 2OO OK\r\n\r\n";
            assert!(matches!(
                parse_response(case).unwrap_err().error(),
                ShioriError::ParseResponse(_)
            ));
        }

        #[test]
        fn failed_when_non_ascii_digits() {
            for case in [
                "SHIORI/3.0 \u{662}\u{660}\u{660} OK",
                "SHIORI/\u{663}.\u{660} 200 OK",
            ] {
                let result = parse_response(case).unwrap_err();
                assert_eq!(result.error(), &ShioriError::ParseResponse(case.to_string()));
            }
        }

        #[test]
        fn success_when_code_exceeds_u32() {
            let result = parse_response("SHIORI/3.0 4294967296 OK\r\n\r\n").unwrap();
            assert_eq!(result.code(), 4_294_967_296);
        }

        #[test]
        fn failed_when_code_overflows() {
            let case = "SHIORI/3.0 99999999999999999999 OK\r\n\r\n";
            let result = parse_response(case).unwrap_err();
            assert!(matches!(result.error(), ShioriError::StatusCode(_)));
            assert!(result.partial().is_none());
        }

        #[test]
        fn failed_when_invalid_header() {
            let case = "SHIORI/3.0 200 OK\r\nSender: A\r\nBadLineNoColon\r\n\r\n";
            let result = parse_response(case).unwrap_err();
            assert_eq!(
                result.error(),
                &ShioriError::ParseHeader("BadLineNoColon".to_string())
            );
            let partial = result.partial().unwrap();
            assert_eq!(partial.code(), 200);
            assert_eq!(partial.version(), "3.0");
            assert_eq!(partial.headers(), &Headers::from_iter([("Sender", "A")]));
        }
    }

    mod parse_response_bytes {
        use super::*;

        #[test]
        fn success_when_valid_bytes() {
            let case_raw = "SHIORI/3.0 200 OK\r\nCharset: Shift_JIS\r\nValue: こんにちは\r\n\r\n";
            let (case, _, _) = SHIFT_JIS.encode(case_raw);
            let result = parse_response_bytes(&case).unwrap();
            assert_eq!(result.value(0), "こんにちは");
        }

        #[test]
        fn failed_when_unsupported_charset() {
            let case_raw = "SHIORI/3.0 200 OK\r\nCharset: KOI8-R\r\n\r\n";
            let result = parse_response_bytes(case_raw.as_bytes()).unwrap_err();
            assert_eq!(
                result.error(),
                &ShioriError::UnsupportedCharset("KOI8-R".to_string())
            );
        }
    }

    mod message {
        use super::*;

        #[test]
        fn ok_only_when_200() {
            assert_eq!(Response::new(200, "3.0").message(), "OK");
            for code in [204, 311, 312, 400, 500] {
                assert_eq!(Response::new(code, "3.0").message(), "");
            }
        }
    }

    mod value {
        use super::*;

        #[test]
        fn ignore_index() {
            let case = "SHIORI/3.0 200 OK\r\nValue: a\r\nValue0: b\r\nValue1: c\r\n\r\n";
            let result = parse_response(case).unwrap();
            assert_eq!(result.value(0), "a");
            assert_eq!(result.value(1), "a");
        }

        #[test]
        fn empty_when_absent() {
            let case = Response::new(204, "3.0");
            assert_eq!(case.value(0), "");
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn checking_value() {
            let case =
                "SHIORI/3.0 200 OK\r\nCharset: UTF-8\r\nSender: A\r\nReference0: r0\r\n\r\n";
            let result = parse_response(case).unwrap();
            assert_eq!(result.charset(), "UTF-8");
            assert_eq!(result.sender(), "A");
            assert_eq!(result.reference(0), "r0");
            assert_eq!(result.reference(1), "");
        }
    }

    mod to_string {
        use super::*;

        #[test]
        fn checking_value_ok() {
            let mut case = Response::new(200, "3.0");
            case.headers_mut().insert("Sender", "A");
            assert_eq!(case.to_string(), "SHIORI/3.0 200 OK\r\nSender: A\r\n\r\n");
        }

        #[test]
        fn empty_reason_phrase_when_not_200() {
            let case = parse_response("SHIORI/3.0 500 Internal Error\r\n\r\n").unwrap();
            assert_eq!(case.to_string(), "SHIORI/3.0 500 \r\n\r\n");
        }

        #[test]
        fn checking_value_after_set_code() {
            let mut case = Response::new(200, "2.6");
            case.set_code(204);
            case.set_version("3.0");
            assert_eq!(case.to_string(), "SHIORI/3.0 204 \r\n\r\n");
        }
    }

    mod to_encoded_bytes {
        use super::*;

        #[test]
        fn success_when_utf8() {
            let mut case = Response::new(200, "3.0");
            case.headers_mut().insert("Charset", "UTF-8");
            let result = case.to_encoded_bytes().unwrap();
            let (expect, _, _) = UTF_8.encode("SHIORI/3.0 200 OK\r\nCharset: UTF-8\r\n\r\n");
            assert_eq!(result, expect.into_owned());
        }

        #[test]
        fn shift_jis_when_no_charset() {
            let mut case = Response::new(200, "3.0");
            case.headers_mut().insert("Value", "こんにちは");
            let result = case.to_encoded_bytes().unwrap();
            let rendered = case.to_string();
            let (expect, _, _) = SHIFT_JIS.encode(&rendered);
            assert_eq!(result, expect.into_owned());
        }

        #[test]
        fn failed_when_unmappable() {
            let mut case = Response::new(200, "3.0");
            case.headers_mut().insert("Charset", "Shift_JIS");
            case.headers_mut().insert("Value", "🍣");
            assert_eq!(
                case.to_encoded_bytes(),
                Err(ShioriError::EncodeFailed("Shift_JIS"))
            );
        }
    }
}
