//! SHIORIのメッセージのヘッダ
//!
//! ヘッダの並び順は保持しない。同じ名前のヘッダが複数あれば、後のものが残る。
//!
//! # Examples
//!
//! ```
//! use shiori_interface_rs::*;
//!
//! let lines = ["ID: OnBoot", "Reference0: master", "", "ignored"];
//! let headers = parse_header_lines(&lines).unwrap();
//!
//! // testing
//! assert_eq!(headers.len(), 2);
//! assert_eq!(headers.get("ID"), Some("OnBoot"));
//! assert_eq!(headers.value("Reference1"), "");
//! ```

use std::collections::hash_map::Iter;
use std::collections::HashMap;
use std::fmt::Display;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::error::{ParseError, ShioriError};

const HEADER_SEPARATOR: &str = ": ";

lazy_static! {
    static ref HEADER_LINE: Regex = Regex::new(r"^([^:]+): (.*)$").unwrap();
}

/// SHIORIのメッセージのヘッダ
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Headers(HashMap<String, String>);

/// ヘッダ行を空行まで読んで [`Headers`] にする。
///
/// 空行より後の行は読まない。
/// 書式に合わない行があればその行を含むエラーを返し、それまでに読めたヘッダを途中結果として添える。
pub fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> Result<Headers, ParseError<Headers>> {
    let mut headers = Headers::new();

    for line in lines.iter().map(|v| v.as_ref()) {
        if line.is_empty() {
            break;
        }
        let captures = match HEADER_LINE.captures(line) {
            Some(c) => c,
            None => {
                debug!("header line parse failed: {:?}", line);
                return Err(ParseError::new(
                    ShioriError::ParseHeader(line.to_string()),
                    Some(headers),
                ));
            }
        };
        headers.insert(&captures[1], &captures[2]);
    }

    trace!("parsed {} header(s)", headers.len());
    Ok(headers)
}

impl Headers {
    pub fn new() -> Headers {
        Headers(HashMap::new())
    }

    /// `name`の値を返す。なければ`None`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|v| v.as_str())
    }

    /// `name`の値を返す。なければ空文字列
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// 値を設定し、以前の値があれば返す。
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            // {name}: {value}\r\n
            write!(f, "{}{}{}\r\n", name, HEADER_SEPARATOR, value)?;
        }
        Ok(())
    }
}
