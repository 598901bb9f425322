//! Shortening of long window titles down to a known application name.
use serde::{Deserialize, Serialize};

/// Application names a title gets shortened to when it contains one of them.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["Chromium", "Firefox", "nvim"];

/// How a [`TextShortener`] picks between several matching candidates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShortenPolicy {
    /// The first candidate contained in the text wins, the rest are not looked at.
    #[default]
    FirstMatch,
    /// Every candidate is tested in order against the current value and replaces it on a
    /// match, so later candidates are tested against an already shortened value.
    Rebind,
}

impl std::str::FromStr for ShortenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" | "FirstMatch" => Ok(Self::FirstMatch),
            "rebind" | "Rebind" => Ok(Self::Rebind),
            _ => Err(format!("unknown shorten policy `{s}`")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TextShortener {
    pub candidates: Vec<String>,
    pub policy: ShortenPolicy,
}

impl Default for TextShortener {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(ToString::to_string).collect(),
            policy: ShortenPolicy::default(),
        }
    }
}

impl TextShortener {
    pub fn new(candidates: Vec<String>, policy: ShortenPolicy) -> Self {
        Self { candidates, policy }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ShortenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn shorten(&self, text: &str) -> String {
        match self.policy {
            ShortenPolicy::FirstMatch => self
                .candidates
                .iter()
                .find(|candidate| text.contains(candidate.as_str()))
                .map_or_else(|| text.to_owned(), Clone::clone),
            ShortenPolicy::Rebind => {
                self.candidates
                    .iter()
                    .fold(text.to_owned(), |current, candidate| {
                        if current.contains(candidate.as_str()) {
                            candidate.clone()
                        } else {
                            current
                        }
                    })
            }
        }
    }
}

/// Shortens `text` with the default candidates and [`ShortenPolicy::FirstMatch`].
pub fn shorten(text: &str) -> String {
    TextShortener::default().shorten(text)
}
