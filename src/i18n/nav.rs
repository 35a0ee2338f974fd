//! Language Query Parameter
//!
//! The `lang` query parameter is the only place a language choice survives
//! a full page load.

use url::Url;

use super::LanguageCode;

pub const LANG_PARAM: &str = "lang";

/// Language requested by the page URL, if present and supported
pub fn language_from_href(href: &str) -> Option<LanguageCode> {
    let url = Url::parse(href).ok()?;
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == LANG_PARAM)
        .map(|(_, value)| value.into_owned())?;
    LanguageCode::parse(&raw).ok()
}

/// Same href with `lang` set to `code`. Other parameters keep their
/// relative order and `lang` moves to the end of the query.
pub fn with_language_param(href: &str, code: &LanguageCode) -> Result<String, url::ParseError> {
    let mut url = Url::parse(href)?;
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LANG_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(LANG_PARAM, code.as_str());
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_href() {
        assert_eq!(
            language_from_href("https://cv.example/results?lang=de"),
            Some(LanguageCode::new("de"))
        );
        assert_eq!(language_from_href("https://cv.example/results"), None);
        assert_eq!(language_from_href("https://cv.example/?lang=xx"), None);
        assert_eq!(language_from_href("not a url"), None);
    }

    #[test]
    fn test_rewrite_replaces_existing_param() {
        let href = "https://cv.example/results?page=2&lang=en#corrections";
        let rewritten = with_language_param(href, &LanguageCode::new("de")).unwrap();
        assert_eq!(rewritten, "https://cv.example/results?page=2&lang=de#corrections");
    }

    #[test]
    fn test_rewrite_adds_missing_param() {
        let rewritten = with_language_param("https://cv.example/", &LanguageCode::new("de")).unwrap();
        assert_eq!(rewritten, "https://cv.example/?lang=de");
        assert_eq!(language_from_href(&rewritten), Some(LanguageCode::new("de")));
    }

    #[test]
    fn test_rewrite_is_stable() {
        let code = LanguageCode::new("en");
        let once = with_language_param("https://cv.example/?lang=de", &code).unwrap();
        let twice = with_language_param(&once, &code).unwrap();
        assert_eq!(once, twice);
    }
}
