//! Output channels and per-entry visibility tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// A named output target. Each channel has its own markup dialect and its
/// own visibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Typeset CV (LaTeX source compiled to PDF)
    Pdf,
    /// Profile overview document (README.md)
    Readme,
    /// Static website (index.html)
    Website,
}

impl Channel {
    /// All built-in channels, in generation order.
    pub const ALL: [Channel; 3] = [Channel::Pdf, Channel::Website, Channel::Readme];

    /// The visibility tag for this channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Pdf => "pdf",
            Channel::Readme => "readme",
            Channel::Website => "website",
        }
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Channel::Pdf),
            "readme" => Ok(Channel::Readme),
            "website" => Ok(Channel::Website),
            other => Err(Error::UnknownChannel(other.to_string())),
        }
    }
}

/// The set of channel names an entry should be rendered in.
///
/// Names are open-ended: tags that match no channel are kept but never pass
/// a filter. A missing, `null`, or non-array field loads as the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Visibility(Vec<String>);

impl Visibility {
    /// Create a visibility set from channel names.
    pub fn new<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(channels.into_iter().map(Into::into).collect())
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, channel: &str) -> bool {
        self.0.iter().any(|c| c == channel)
    }

    /// Check if the entry is visible nowhere.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the raw channel names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::lenient::strings(deserializer).map(Visibility)
    }
}

/// An entry that carries a visibility set.
pub trait Visible {
    /// The entry's visibility set.
    fn visibility(&self) -> &Visibility;

    /// Check if the entry should be rendered in `channel`.
    fn is_visible_in(&self, channel: &str) -> bool {
        self.visibility().contains(channel)
    }
}

/// Return the entries visible in `channel`, preserving input order.
///
/// The input is never modified; each call is independent.
pub fn filter_visible<'a, E, C>(entries: &'a [E], channel: C) -> Vec<&'a E>
where
    E: Visible,
    C: AsRef<str>,
{
    let channel = channel.as_ref();
    entries
        .iter()
        .filter(|entry| entry.is_visible_in(channel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static str, Visibility);

    impl Visible for Tagged {
        fn visibility(&self) -> &Visibility {
            &self.1
        }
    }

    #[test]
    fn test_channel_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
        assert!(matches!(
            "PDF".parse::<Channel>(),
            Err(Error::UnknownChannel(_))
        ));
    }

    #[test]
    fn test_filter_preserves_order() {
        let entries = vec![
            Tagged("a", Visibility::new(["pdf", "website"])),
            Tagged("b", Visibility::new(["readme"])),
            Tagged("c", Visibility::new(["pdf"])),
            Tagged("d", Visibility::default()),
        ];

        let names: Vec<_> = filter_visible(&entries, Channel::Pdf)
            .into_iter()
            .map(|e| e.0)
            .collect();
        assert_eq!(names, vec!["a", "c"]);

        let names: Vec<_> = filter_visible(&entries, "readme")
            .into_iter()
            .map(|e| e.0)
            .collect();
        assert_eq!(names, vec!["b"]);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let entries = vec![Tagged("a", Visibility::new(["Website"]))];
        assert!(filter_visible(&entries, Channel::Website).is_empty());
    }

    #[test]
    fn test_unknown_tag_never_matches_builtin() {
        let entries = vec![Tagged("a", Visibility::new(["print"]))];
        for channel in Channel::ALL {
            assert!(filter_visible(&entries, channel).is_empty());
        }
        assert_eq!(filter_visible(&entries, "print").len(), 1);
    }

    #[test]
    fn test_visibility_deserialize_lenient() {
        let v: Visibility = serde_json::from_str(r#"["pdf", 1, "readme"]"#).unwrap();
        assert_eq!(v.iter().collect::<Vec<_>>(), vec!["pdf", "readme"]);

        let v: Visibility = serde_json::from_str(r#""pdf""#).unwrap();
        assert!(v.is_empty());

        let v: Visibility = serde_json::from_str("null").unwrap();
        assert!(v.is_empty());
    }
}
