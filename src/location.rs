//! Navigable Location
//!
//! The page address whose query string may carry the locale code.

use url::Url;

use crate::constants::LOCALE_QUERY_PARAM;
use crate::error::Result;

/// Current page URL plus the name of the locale query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
    param: String,
}

impl Location {
    /// Parse `url`, reading the locale from [`LOCALE_QUERY_PARAM`]
    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?, LOCALE_QUERY_PARAM))
    }

    pub fn new(url: Url, param: impl Into<String>) -> Self {
        Self {
            url,
            param: param.into(),
        }
    }

    /// Use a different query parameter name
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Value of the locale query parameter, if present
    pub fn locale_param(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(name, _)| name == self.param.as_str())
            .map(|(_, value)| value.into_owned())
    }

    /// Replace the locale query parameter, keeping every other pair in order
    pub fn replace_locale_param(&mut self, code: &str) {
        let others: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(name, _)| name != self.param.as_str())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        let mut pairs = self.url.query_pairs_mut();
        pairs.clear();
        for (name, value) in &others {
            pairs.append_pair(name, value);
        }
        pairs.append_pair(&self.param, code);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_locale_param() {
        let location = Location::parse("https://example.com/?page=2&locale=en-US").expect("url");
        assert_eq!(location.locale_param().as_deref(), Some("en-US"));

        let bare = Location::parse("https://example.com/").expect("url");
        assert_eq!(bare.locale_param(), None);
    }

    #[test]
    fn replace_keeps_other_pairs() {
        let mut location =
            Location::parse("https://example.com/docs?locale=de&page=2#top").expect("url");
        location.replace_locale_param("en");

        assert_eq!(location.locale_param().as_deref(), Some("en"));
        assert_eq!(location.to_string(), "https://example.com/docs?page=2&locale=en#top");
    }

    #[test]
    fn custom_param_name() {
        let mut location = Location::parse("https://example.com/?lang=en")
            .expect("url")
            .with_param("lang");
        assert_eq!(location.locale_param().as_deref(), Some("en"));
        location.replace_locale_param("de");
        assert_eq!(location.to_string(), "https://example.com/?lang=de");
    }

    #[test]
    fn rejects_relative_urls() {
        assert!(Location::parse("/relative?locale=en").is_err());
    }
}
