//! リクエストとレスポンスに共通する振る舞い

use std::fmt::Display;

use crate::charset::Charset;
use crate::error::ShioriError;
use crate::headers::Headers;

const SHIORI_HEADER_CHARSET: &str = "Charset";
const SHIORI_HEADER_SENDER: &str = "Sender";
const SHIORI_PREFIX_REFERENCE: &str = "Reference";

/// SHIORIのメッセージ
///
/// [`Display`] でワイヤ形式の文字列になる。
pub trait ShioriMessage: Display {
    fn headers(&self) -> &Headers;

    /// `Charset`ヘッダ。なければ空文字列
    fn charset(&self) -> &str {
        self.headers().value(SHIORI_HEADER_CHARSET)
    }

    /// `Sender`ヘッダ。なければ空文字列
    fn sender(&self) -> &str {
        self.headers().value(SHIORI_HEADER_SENDER)
    }

    /// `Reference{index}`ヘッダ。なければ空文字列
    fn reference(&self, index: usize) -> &str {
        self.headers()
            .value(&format!("{}{}", SHIORI_PREFIX_REFERENCE, index))
    }

    /// 自身を`Charset`ヘッダの文字コードでエンコードしたバイト列にして返す
    fn to_encoded_bytes(&self) -> Result<Vec<u8>, ShioriError> {
        Charset::from_header_value(self.charset())?.encode(&self.to_string())
    }
}
