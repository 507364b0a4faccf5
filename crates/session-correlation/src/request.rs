//! Read-only access to the cookies of the current request.

use std::collections::HashMap;

/// Cookies sent by the browser with the current request.
pub trait RequestCookies {
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl RequestCookies for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Cookies parsed from a `Cookie` request header.
///
/// Pairs are split on `;`, names and values trimmed. Pairs without `=` are
/// skipped. The first occurrence of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let value = value.trim();
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(value);
                Some((name.to_string(), value.to_string()))
            })
            .collect();
        Self { cookies }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.cookies.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl RequestCookies for CookieJar {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
