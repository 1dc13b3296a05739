use std::borrow::Cow;

/// Recipient name read once from the load URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct GuestName(Option<String>);

impl GuestName {
    /// Named guest; blank names count as absent.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// Read the `name` parameter from a query string or a full URL.
    ///
    /// Accepts `name=Budi`, `?name=Budi+Santoso`, or `https://host/?x=1&name=Budi%20S#top`.
    /// The first `name` parameter wins; undecodable values are kept verbatim.
    pub fn from_query(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, q)) => q,
            None => input,
        };
        let query = query.split('#').next().unwrap_or_default();

        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(key) != "name" {
                continue;
            }
            return Self::new(decode_component(value));
        }
        Self::absent()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Text to render: the name, or `placeholder` when absent.
    pub fn display<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(placeholder)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => spaced,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/guest.rs"]
mod tests;
