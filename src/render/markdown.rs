//! Markdown rendering for the profile README.

use crate::error::Result;
use crate::format::{
    display_handle, escape_html, escape_markdown, format_date_range, DateStyle,
};
use crate::model::{filter_visible, Channel, Profile, ResumeRecord, WorkEntry};

use super::{Fragments, MarkdownOptions, Template};

const RANGE_SEPARATOR: &str = " - ";

const README_TEMPLATE: &str = r#"<!-- This file is auto-generated from resume.json. Do not edit manually. -->
<!-- Run "{{REGENERATE_HINT}}" to regenerate this file. -->

<h1 align="center">
  Hi, I am {{FIRST_NAME}} 
{{GREETING_IMAGE}}</h1>

## 👨🏻‍💻 About me

{{SUMMARY}}

{{WORK_EXPERIENCE}}{{LINKS}}"#;

/// Render a record to a README document.
pub fn to_readme(record: &ResumeRecord, options: &MarkdownOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(record)
}

/// Markdown renderer for the `readme` channel.
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Render the complete README.
    pub fn render(&self, record: &ResumeRecord) -> Result<String> {
        let fragments = self.fragments(record);
        Ok(Template::new(README_TEMPLATE).fill(&fragments))
    }

    /// Fragments for the README template.
    pub fn fragments(&self, record: &ResumeRecord) -> Fragments {
        let basics = &record.basics;
        let greeting_image = match &self.options.greeting_image {
            Some(url) => format!("  <img src=\"{}\" width=\"29px\">\n", escape_html(url)),
            None => String::new(),
        };

        let mut fragments = Fragments::new();
        fragments.insert("REGENERATE_HINT", self.options.regenerate_hint.clone());
        fragments.insert("FIRST_NAME", escape_html(basics.first_name()));
        fragments.insert("GREETING_IMAGE", greeting_image);
        fragments.insert("SUMMARY", self.escape(&basics.summary));
        fragments.insert("WORK_EXPERIENCE", self.work_experience(record));
        fragments.insert("LINKS", self.links(record));
        fragments
    }

    /// Work experience section; empty when no entry is visible.
    pub fn work_experience(&self, record: &ResumeRecord) -> String {
        let entries = filter_visible(&record.work, Channel::Readme);
        log::debug!("Markdown: {} work entries", entries.len());

        if entries.is_empty() {
            return String::new();
        }

        let mut md = String::from("## 💼 Work Experience\n\n");
        for work in entries {
            self.work_entry(&mut md, work);
        }
        md
    }

    fn work_entry(&self, output: &mut String, work: &WorkEntry) {
        let handle = match work.url.as_deref() {
            Some(url) => format!("[`{}`]({})", display_handle(work), url),
            None => format!("`{}`", display_handle(work)),
        };
        let range = format_date_range(
            Some(work.start_date.as_str()),
            work.end_date.as_deref(),
            RANGE_SEPARATOR,
            DateStyle::Long,
        );

        output.push_str(&format!(
            "{} 👨🏻‍💻 {} - {}  \n",
            self.options.list_marker,
            self.escape(&work.position),
            handle
        ));

        match place(&work.location) {
            Some(place) => {
                output.push_str(&format!("*{} | {}*  \n", self.escape(&place), range))
            }
            None => output.push_str(&format!("*{}*  \n", range)),
        }

        if !work.technologies.is_empty() {
            let technologies: Vec<String> =
                work.technologies.iter().map(|t| self.escape(t)).collect();
            output.push_str(&format!(
                "🛠 **Technologies**: {}",
                technologies.join(" · ")
            ));
        }

        output.push_str("\n\n");
    }

    /// Links section: visible profiles, personal website and e-mail.
    pub fn links(&self, record: &ResumeRecord) -> String {
        let basics = &record.basics;
        let marker = self.options.list_marker;
        let mut md = String::from("## 🔗 Links  \n\n");

        for profile in filter_visible(&basics.profiles, Channel::Readme) {
            md.push_str(&format!(
                "{} {} [{}]({})  \n",
                marker,
                profile_icon(profile),
                self.escape(&profile.network),
                profile.url
            ));
        }

        if !basics.url.is_empty() {
            md.push_str(&format!(
                "{} 🖥️ [Personal Website]({})  \n",
                marker, basics.url
            ));
        }
        if !basics.email.is_empty() {
            md.push_str(&format!(
                "{} 📧 [Email](mailto:{})  \n",
                marker, basics.email
            ));
        }

        md
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn profile_icon(profile: &Profile) -> &'static str {
    if profile.is_linkedin() {
        "💼"
    } else if profile.is_github() {
        "💻"
    } else {
        "🔗"
    }
}

/// "City, Country" from a free-text location: the first and last
/// comma-separated parts.
fn place(location: &str) -> Option<String> {
    if location.trim().is_empty() {
        return None;
    }
    let first = location.split(',').next().unwrap_or_default().trim();
    let last = location.rsplit(',').next().unwrap_or_default().trim();
    Some(format!("{}, {}", first, last))
}
