//! Record-level types.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{
    filter_visible, AwardEntry, EducationEntry, LanguageEntry, Profile, SkillCategory, WorkEntry,
};

/// A parsed résumé document.
///
/// The record is loaded once per run and only ever read by the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    /// Identity and contact details
    #[serde(deserialize_with = "lenient::object")]
    pub basics: Basics,

    #[serde(deserialize_with = "lenient::sequence")]
    pub work: Vec<WorkEntry>,

    #[serde(deserialize_with = "lenient::sequence")]
    pub education: Vec<EducationEntry>,

    #[serde(deserialize_with = "lenient::sequence")]
    pub skills: Vec<SkillCategory>,

    #[serde(deserialize_with = "lenient::sequence")]
    pub languages: Vec<LanguageEntry>,

    #[serde(deserialize_with = "lenient::sequence")]
    pub awards: Vec<AwardEntry>,
}

impl ResumeRecord {
    /// Count the entries of each category visible in `channel`.
    pub fn visible_counts(&self, channel: &str) -> VisibleCounts {
        VisibleCounts {
            work: filter_visible(&self.work, channel).len(),
            education: filter_visible(&self.education, channel).len(),
            skills: filter_visible(&self.skills, channel).len(),
            languages: filter_visible(&self.languages, channel).len(),
            awards: filter_visible(&self.awards, channel).len(),
            profiles: filter_visible(&self.basics.profiles, channel).len(),
        }
    }

    /// Username of the first GitHub profile, regardless of visibility.
    pub fn github_username(&self) -> Option<&str> {
        self.basics
            .profiles
            .iter()
            .find(|p| p.is_github())
            .map(|p| p.username.as_str())
            .filter(|u| !u.is_empty())
    }
}

/// Personal details of the résumé owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,

    /// Professional title or tagline
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,

    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,

    #[serde(deserialize_with = "lenient::text")]
    pub email: String,

    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,

    /// Personal website
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,

    #[serde(deserialize_with = "lenient::object")]
    pub location: Location,

    #[serde(deserialize_with = "lenient::sequence")]
    pub profiles: Vec<Profile>,
}

impl Basics {
    /// First whitespace-separated word of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Postal location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    #[serde(deserialize_with = "lenient::text")]
    pub city: String,

    #[serde(deserialize_with = "lenient::text")]
    pub region: String,

    /// ISO 3166 country code
    #[serde(deserialize_with = "lenient::text")]
    pub country_code: String,
}

impl Location {
    /// "City, Region", or just the city when no region is set.
    pub fn city_region(&self) -> String {
        match (self.city.is_empty(), self.region.is_empty()) {
            (true, _) => String::new(),
            (false, true) => self.city.clone(),
            (false, false) => format!("{}, {}", self.city, self.region),
        }
    }
}

/// Number of entries per category that pass a channel filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisibleCounts {
    pub work: usize,
    pub education: usize,
    pub skills: usize,
    pub languages: usize,
    pub awards: usize,
    pub profiles: usize,
}

impl VisibleCounts {
    /// Total visible entries across all categories.
    pub fn total(&self) -> usize {
        self.work + self.education + self.skills + self.languages + self.awards + self.profiles
    }
}
