//! SHIORIのメッセージを処理中のエラー

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// SHIORIのメッセージを処理中のエラー
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ShioriError {
    #[error("InvalidMethodError: {0}")]
    InvalidMethod(String),

    #[error("ParseRequestError: request line parse failed: {0}")]
    ParseRequest(String),

    #[error("ParseResponseError: status line parse failed: {0}")]
    ParseResponse(String),

    #[error("ParseHeaderError: header line parse failed: {0}")]
    ParseHeader(String),

    #[error("invalid status code: {0}")]
    StatusCode(#[from] ParseIntError),

    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    #[error("failed to decode message as {0}")]
    DecodeFailed(&'static str),

    #[error("failed to encode message as {0}")]
    EncodeFailed(&'static str),
}

/// 解析失敗のエラーと、失敗までに読めた途中結果
///
/// 途中結果は参考情報であり、正しいメッセージとして扱ってはならない。
/// 開始行を読めずに失敗した場合、途中結果は`None`になる。
#[derive(Debug, PartialEq)]
pub struct ParseError<T> {
    error: ShioriError,
    partial: Option<T>,
}

impl<T> ParseError<T> {
    pub(crate) fn new(error: ShioriError, partial: Option<T>) -> ParseError<T> {
        ParseError { error, partial }
    }

    pub fn error(&self) -> &ShioriError {
        &self.error
    }

    pub fn partial(&self) -> Option<&T> {
        self.partial.as_ref()
    }

    pub fn into_error(self) -> ShioriError {
        self.error
    }

    pub fn into_parts(self) -> (ShioriError, Option<T>) {
        (self.error, self.partial)
    }
}

impl<T> From<ShioriError> for ParseError<T> {
    fn from(e: ShioriError) -> ParseError<T> {
        ParseError::new(e, None)
    }
}

impl<T> From<ParseError<T>> for ShioriError {
    fn from(e: ParseError<T>) -> ShioriError {
        e.error
    }
}

impl<T> fmt::Display for ParseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> std::error::Error for ParseError<T> {}
