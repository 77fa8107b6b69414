//! SHIORIのリクエストメソッドとプロトコル

use std::fmt::Display;
use std::str::FromStr;

use crate::error::ShioriError;

/// SHIORIのリクエストメソッド
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Method {
    Get,
    Notify,
}

/// SHIORIのプロトコル
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Default)]
pub enum Protocol {
    #[default]
    Shiori,
}

/// 文字列をメソッドに変換する。大文字小文字は区別する。
///
/// ```
/// use shiori_interface_rs::*;
///
/// assert_eq!(to_method("NOTIFY"), Ok(Method::Notify));
/// assert_eq!(
///     to_method("get"),
///     Err(ShioriError::InvalidMethod("get".to_string()))
/// );
/// ```
pub fn to_method(token: &str) -> Result<Method, ShioriError> {
    match token {
        t if t == Method::Get.as_str() => Ok(Method::Get),
        t if t == Method::Notify.as_str() => Ok(Method::Notify),
        _ => Err(ShioriError::InvalidMethod(token.to_string())),
    }
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Notify => "NOTIFY",
        }
    }
}

impl FromStr for Method {
    type Err = ShioriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_method(s)
    }
}

impl TryFrom<&str> for Method {
    type Error = ShioriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        to_method(value)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        "SHIORI"
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod to_method {
        use super::*;

        #[test]
        fn success_when_valid_str() {
            assert_eq!(to_method("GET"), Ok(Method::Get));
            assert_eq!(to_method("NOTIFY"), Ok(Method::Notify));
        }

        #[test]
        fn identity_when_rendered_back() {
            for token in ["GET", "NOTIFY"] {
                assert_eq!(to_method(token).unwrap().to_string(), token);
            }
        }

        #[test]
        fn failed_when_invalid_str() {
            for token in ["", "get", "Notify", "POST", "GET ", "EXECUTE"] {
                assert_eq!(
                    to_method(token),
                    Err(ShioriError::InvalidMethod(token.to_string()))
                );
            }
        }
    }

    mod method {
        use super::*;

        #[test]
        fn parse_with_from_str() {
            assert_eq!("GET".parse::<Method>(), Ok(Method::Get));
            assert!("FOO".parse::<Method>().is_err());
        }

        #[test]
        fn parse_with_try_from() {
            assert_eq!(Method::try_from("NOTIFY"), Ok(Method::Notify));
        }
    }

    mod protocol {
        use super::*;

        #[test]
        fn checking_value() {
            assert_eq!(Protocol::Shiori.to_string(), "SHIORI");
            assert_eq!(Protocol::default(), Protocol::Shiori);
        }
    }
}
