//! SHIORIのメッセージの文字コード
//!
//! ベースウェアとのやりとりはバイト列で行われ、その文字コードは`Charset`ヘッダで指定される。
//! 指定がなければ`Shift_JIS`とみなす。

use encoding_rs::{Encoding, EUC_JP, ISO_2022_JP, SHIFT_JIS, UTF_8};
use log::{debug, trace};

use crate::error::ShioriError;

const SHIORI_PREFIX_CHARSET: &str = "Charset: ";

/// SHIORIのCharset
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Charset {
    #[default]
    ShiftJIS,
    EucJP,
    UTF8,
    ISO2022JP,
}

impl Charset {
    pub fn to_str(&self) -> &'static str {
        match self {
            Charset::ShiftJIS => "Shift_JIS",
            Charset::EucJP => "EUC-JP",
            Charset::UTF8 => "UTF-8",
            Charset::ISO2022JP => "ISO-2022-JP",
        }
    }

    pub fn to_encoding(&self) -> &'static Encoding {
        match self {
            Charset::ShiftJIS => SHIFT_JIS,
            Charset::EucJP => EUC_JP,
            Charset::UTF8 => UTF_8,
            Charset::ISO2022JP => ISO_2022_JP,
        }
    }

    /// `Charset`ヘッダの値から変換する。値が空なら既定の`Shift_JIS`
    pub fn from_header_value(value: &str) -> Result<Charset, ShioriError> {
        if value.is_empty() {
            Ok(Charset::default())
        } else {
            Charset::try_from(value)
        }
    }

    /// 文字列をこのCharsetのバイト列にする。
    pub fn encode(&self, contents: &str) -> Result<Vec<u8>, ShioriError> {
        let (bytes, _used_encoding, has_error) = self.to_encoding().encode(contents);

        if has_error {
            debug!("failed to encode message as {}", self.to_str());
            Err(ShioriError::EncodeFailed(self.to_str()))
        } else {
            Ok(bytes.into_owned())
        }
    }
}

impl TryFrom<&str> for Charset {
    type Error = ShioriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            v if v == Charset::ShiftJIS.to_str() => Ok(Charset::ShiftJIS),
            v if v == Charset::EucJP.to_str() => Ok(Charset::EucJP),
            v if v == Charset::UTF8.to_str() => Ok(Charset::UTF8),
            v if v == Charset::ISO2022JP.to_str() => Ok(Charset::ISO2022JP),
            _ => Err(ShioriError::UnsupportedCharset(value.to_string())),
        }
    }
}

/// バイト列の`Charset`ヘッダを見て、文字列に戻す。
pub fn decode_message(bytes: &[u8]) -> Result<(String, Charset), ShioriError> {
    let temp_string = String::from_utf8_lossy(bytes);

    let charset = match temp_string
        .split("\r\n")
        .skip(1)
        .take_while(|v| !v.is_empty())
        .find_map(|v| v.strip_prefix(SHIORI_PREFIX_CHARSET))
    {
        Some(body) => Charset::try_from(body)?,
        None => Charset::default(),
    };
    trace!("decoding message as {}", charset.to_str());

    let (contents, _used_encoding, has_error) = charset.to_encoding().decode(bytes);

    if has_error {
        debug!("failed to decode message as {}", charset.to_str());
        Err(ShioriError::DecodeFailed(charset.to_str()))
    } else {
        Ok((contents.into_owned(), charset))
    }
}
