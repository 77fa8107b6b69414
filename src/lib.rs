//! SHIORIのリクエストとレスポンスを処理します。
//!
//! [`parse_request`] は、ベースウェアから来たリクエストの文字列を [`Request`] にします。
//! [`parse_response`] は、レスポンスの文字列を [`Response`] にします。
//! どちらも [`Display`] でワイヤ形式の文字列に戻せます。
//! ヘッダの並び順は保持しません。
//!
//! バイト列でやりとりするときは、 [`parse_request_bytes`] と [`ShioriMessage::to_encoded_bytes`] で
//! `Charset`ヘッダに従ってデコード・エンコードできます。
//!
//! # Examples
//!
//! ```
//! use shiori_interface_rs::*;
//!
//! let request_raw = "GET SHIORI/3.0\r\nCharset: UTF-8\r\nID: OnBoot\r\n\r\n";
//! let request = parse_request(request_raw).unwrap();
//!
//! let mut response = Response::new(200, request.version());
//! response.headers_mut().insert("Charset", request.charset());
//! response.headers_mut().insert("Value", "\\0\\s[0]Hello.\\e");
//! let result = response.to_encoded_bytes().unwrap();
//!
//! // testing
//! let mut expect_lines = vec!["SHIORI/3.0 200 OK", "Charset: UTF-8", "Value: \\0\\s[0]Hello.\\e"];
//! let result = String::from_utf8(result).unwrap();
//! let mut result_lines: Vec<&str> = result.split("\r\n").filter(|v| !v.is_empty()).collect();
//! assert_eq!(result_lines.remove(0), expect_lines.remove(0));
//! result_lines.sort();
//! assert_eq!(result_lines, expect_lines);
//! ```
//!
//! [`Display`]: std::fmt::Display
//! [`ShioriMessage::to_encoded_bytes`]: crate::message::ShioriMessage::to_encoded_bytes

pub mod charset;
pub mod error;
pub mod headers;
pub mod message;
pub mod method;
pub mod request;
pub mod response;

pub use charset::*;
pub use error::*;
pub use headers::*;
pub use message::*;
pub use method::*;
pub use request::*;
pub use response::*;
