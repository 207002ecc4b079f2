//! Résumé record model.
//!
//! This module defines the in-memory form of the source document. Every
//! category entry and profile carries a [`Visibility`] set naming the
//! channels it should be rendered in; [`filter_visible`] selects the entries
//! for one channel without touching the record.

mod entry;
pub(crate) mod lenient;
mod record;
mod visibility;

pub use entry::{AwardEntry, EducationEntry, LanguageEntry, Profile, SkillCategory, WorkEntry};
pub use record::{Basics, Location, ResumeRecord, VisibleCounts};
pub use visibility::{filter_visible, Channel, Visibility, Visible};
