//! Résumé category entries.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{Visibility, Visible};

/// A position held at an employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    /// Employer name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,

    /// Job title
    #[serde(deserialize_with = "lenient::text")]
    pub position: String,

    /// Free-text location, usually "City, Country"
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,

    /// ISO start date
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,

    /// ISO end date; absent while the position is ongoing
    #[serde(deserialize_with = "lenient::optional_text")]
    pub end_date: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,

    #[serde(deserialize_with = "lenient::strings")]
    pub highlights: Vec<String>,

    /// Technology names used in the role
    #[serde(deserialize_with = "lenient::strings")]
    pub technologies: Vec<String>,

    #[serde(deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,

    pub visibility: Visibility,
}

/// A degree or course of study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub institution: String,

    /// Degree type, e.g. "Bachelor"
    #[serde(deserialize_with = "lenient::text")]
    pub study_type: String,

    /// Field of study
    #[serde(deserialize_with = "lenient::text")]
    pub area: String,

    #[serde(deserialize_with = "lenient::text")]
    pub start_date: String,

    #[serde(deserialize_with = "lenient::optional_text")]
    pub end_date: Option<String>,

    /// Final grade
    #[serde(deserialize_with = "lenient::optional_text")]
    pub score: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,

    #[serde(deserialize_with = "lenient::strings")]
    pub courses: Vec<String>,

    #[serde(deserialize_with = "lenient::strings")]
    pub keywords: Vec<String>,

    #[serde(deserialize_with = "lenient::strings")]
    pub highlights: Vec<String>,

    #[serde(deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,

    pub visibility: Visibility,
}

/// A named group of skill keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(deserialize_with = "lenient::strings")]
    pub keywords: Vec<String>,

    pub visibility: Visibility,
}

/// A spoken language and its fluency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub language: String,

    /// Free-text fluency, e.g. "Native speaker"
    #[serde(deserialize_with = "lenient::text")]
    pub fluency: String,

    pub visibility: Visibility,
}

/// An award or recognition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(deserialize_with = "lenient::text")]
    pub awarder: String,

    #[serde(deserialize_with = "lenient::optional_text")]
    pub date: Option<String>,

    #[serde(deserialize_with = "lenient::optional_text")]
    pub summary: Option<String>,

    pub visibility: Visibility,
}

/// An online profile (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Network name, matched case-sensitively against known networks
    #[serde(deserialize_with = "lenient::text")]
    pub network: String,

    #[serde(deserialize_with = "lenient::text")]
    pub username: String,

    #[serde(deserialize_with = "lenient::text")]
    pub url: String,

    pub visibility: Visibility,
}

impl Profile {
    /// Network name for GitHub profiles.
    pub const GITHUB: &'static str = "GitHub";
    /// Network name for LinkedIn profiles.
    pub const LINKEDIN: &'static str = "LinkedIn";

    /// Check if this is a GitHub profile.
    pub fn is_github(&self) -> bool {
        self.network == Self::GITHUB
    }

    /// Check if this is a LinkedIn profile.
    pub fn is_linkedin(&self) -> bool {
        self.network == Self::LINKEDIN
    }
}

macro_rules! impl_visible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Visible for $ty {
                fn visibility(&self) -> &Visibility {
                    &self.visibility
                }
            }
        )*
    };
}

impl_visible!(
    WorkEntry,
    EducationEntry,
    SkillCategory,
    LanguageEntry,
    AwardEntry,
    Profile,
);
