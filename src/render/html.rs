//! HTML rendering for the static website.

use crate::error::Result;
use crate::format::{escape_html, format_date, format_date_range, DateStyle};
use crate::model::{filter_visible, AwardEntry, Channel, EducationEntry, ResumeRecord, WorkEntry};

use super::{seo, Fragments, HtmlOptions, Template};

/// Template bundled with the crate, used when no template directory is set.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/website/index.html");

const RANGE_SEPARATOR: &str = " – ";

/// Joins sibling items at the indentation of the template's list containers.
const ITEM_JOIN: &str = "\n                ";

/// Render a record into the bundled website template.
pub fn to_html(record: &ResumeRecord, options: &HtmlOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(record, &Template::new(DEFAULT_TEMPLATE))
}

/// HTML renderer for the `website` channel.
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render the record into `template`.
    pub fn render(&self, record: &ResumeRecord, template: &Template) -> Result<String> {
        let fragments = self.fragments(record)?;
        Ok(template.fill(&fragments))
    }

    /// All placeholder fragments for the website template.
    pub fn fragments(&self, record: &ResumeRecord) -> Result<Fragments> {
        let basics = &record.basics;

        let phone = if basics.phone.is_empty() {
            String::new()
        } else {
            let phone = escape_html(&basics.phone);
            format!("<a href=\"tel:{}\" class=\"contact-link\">{}</a>", phone, phone)
        };

        let github_username = record
            .github_username()
            .or(self.options.fallback_github_username.as_deref())
            .unwrap_or_default();

        let mut fragments = Fragments::new();
        fragments.insert("NAME", escape_html(&basics.name));
        fragments.insert("LABEL", escape_html(&basics.label));
        fragments.insert("SUMMARY", escape_html(&basics.summary));
        fragments.insert("LOCATION", escape_html(&basics.location.city_region()));
        fragments.insert("EMAIL", escape_html(&basics.email));
        fragments.insert("PHONE", phone);
        fragments.insert("PROFILES", self.profiles(record));
        fragments.insert("WORK_EXPERIENCE", self.work_experience(record));
        fragments.insert("EDUCATION", self.education(record));
        fragments.insert("SKILLS", self.skills(record));
        fragments.insert("AWARDS", self.awards(record));
        fragments.insert("GITHUB_USERNAME", escape_html(github_username));

        // Templates without an SEO block simply ignore these two.
        if self.options.seo {
            let keywords = seo::keywords(record, &self.options).join(", ");
            fragments.insert("KEYWORDS", escape_html(&keywords));
            fragments.insert(
                "STRUCTURED_DATA",
                seo::structured_data_json(record, &self.options)?,
            );
        } else {
            fragments.insert("KEYWORDS", "");
            fragments.insert("STRUCTURED_DATA", "{}");
        }

        Ok(fragments)
    }

    /// Profile links. Every network renders as a plain link.
    pub fn profiles(&self, record: &ResumeRecord) -> String {
        filter_visible(&record.basics.profiles, Channel::Website)
            .iter()
            .map(|profile| external_link(&profile.url, &profile.network))
            .collect::<Vec<_>>()
            .join(ITEM_JOIN)
    }

    /// Work experience timeline.
    pub fn work_experience(&self, record: &ResumeRecord) -> String {
        let entries = filter_visible(&record.work, Channel::Website);
        log::debug!("HTML: {} work entries", entries.len());
        entries
            .iter()
            .map(|job| work_item(job))
            .collect::<Vec<_>>()
            .join(ITEM_JOIN)
    }

    /// Education timeline.
    pub fn education(&self, record: &ResumeRecord) -> String {
        let entries = filter_visible(&record.education, Channel::Website);
        log::debug!("HTML: {} education entries", entries.len());
        entries
            .iter()
            .map(|edu| education_item(edu))
            .collect::<Vec<_>>()
            .join(ITEM_JOIN)
    }

    /// Skill categories with keyword tags.
    pub fn skills(&self, record: &ResumeRecord) -> String {
        filter_visible(&record.skills, Channel::Website)
            .iter()
            .map(|skill| {
                let mut html = String::from("\n");
                line(&mut html, 4, "<div class=\"skill-category\">");
                line(
                    &mut html,
                    5,
                    &format!(
                        "<div class=\"skill-category-name\">{}</div>",
                        escape_html(&skill.name)
                    ),
                );
                tag_list(&mut html, "skill-tags", &skill.keywords);
                line(&mut html, 4, "</div>");
                html.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join(ITEM_JOIN)
    }

    /// Awards block; empty when no award is visible.
    pub fn awards(&self, record: &ResumeRecord) -> String {
        let awards = filter_visible(&record.awards, Channel::Website);
        if awards.is_empty() {
            return String::new();
        }

        let mut html = String::from("\n");
        line(&mut html, 3, "<div class=\"awards-section\">");
        line(
            &mut html,
            4,
            "<h3 class=\"awards-title\">Awards &amp; Recognition</h3>",
        );
        line(&mut html, 4, "<div class=\"awards-list\">");
        for award in awards {
            award_item(&mut html, award);
        }
        line(&mut html, 4, "</div>");
        line(&mut html, 3, "</div>");
        html.trim_end().to_string()
    }
}

fn line(output: &mut String, depth: usize, text: &str) {
    output.push_str(&"    ".repeat(depth));
    output.push_str(text);
    output.push('\n');
}

fn external_link(url: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(url),
        escape_html(text)
    )
}

fn link_or_text(url: Option<&str>, text: &str) -> String {
    match url {
        Some(url) => external_link(url, text),
        None => escape_html(text),
    }
}

fn tag_list(output: &mut String, class: &str, tags: &[String]) {
    line(output, 5, &format!("<div class=\"{}\">", class));
    for tag in tags {
        line(
            output,
            6,
            &format!("<span class=\"tech-tag\">{}</span>", escape_html(tag)),
        );
    }
    line(output, 5, "</div>");
}

fn highlight_list(output: &mut String, highlights: &[String]) {
    line(output, 5, "<ul class=\"timeline-highlights\">");
    for highlight in highlights {
        line(output, 6, &format!("<li>{}</li>", escape_html(highlight)));
    }
    line(output, 5, "</ul>");
}

fn timeline_header(output: &mut String, title: &str, range: &str) {
    line(output, 5, "<div class=\"timeline-header\">");
    line(
        output,
        6,
        &format!("<div class=\"timeline-position\">{}</div>", escape_html(title)),
    );
    line(
        output,
        6,
        &format!("<div class=\"timeline-date\">{}</div>", escape_html(range)),
    );
    line(output, 5, "</div>");
}

fn timeline_company(output: &mut String, url: Option<&str>, name: &str) {
    line(output, 5, "<div class=\"timeline-company\">");
    line(output, 6, &link_or_text(url, name));
    line(output, 5, "</div>");
}

fn work_item(job: &WorkEntry) -> String {
    let range = format_date_range(
        Some(job.start_date.as_str()),
        job.end_date.as_deref(),
        RANGE_SEPARATOR,
        DateStyle::Short,
    );

    let mut html = String::from("\n");
    line(&mut html, 4, "<div class=\"timeline-item\">");
    timeline_header(&mut html, &job.position, &range);
    timeline_company(&mut html, job.url.as_deref(), &job.name);
    if !job.location.is_empty() {
        line(
            &mut html,
            5,
            &format!(
                "<div class=\"timeline-location\">{}</div>",
                escape_html(&job.location)
            ),
        );
    }
    if !job.summary.is_empty() {
        line(
            &mut html,
            5,
            &format!(
                "<p class=\"timeline-description\">{}</p>",
                escape_html(&job.summary)
            ),
        );
    }
    if !job.highlights.is_empty() {
        highlight_list(&mut html, &job.highlights);
    }
    if !job.technologies.is_empty() {
        tag_list(&mut html, "timeline-technologies", &job.technologies);
    }
    line(&mut html, 4, "</div>");
    html.trim_end().to_string()
}

fn education_item(edu: &EducationEntry) -> String {
    let range = format_date_range(
        Some(edu.start_date.as_str()),
        edu.end_date.as_deref(),
        RANGE_SEPARATOR,
        DateStyle::Short,
    );
    let title = if edu.area.is_empty() {
        edu.study_type.clone()
    } else {
        format!("{}, {}", edu.study_type, edu.area)
    };

    let mut html = String::from("\n");
    line(&mut html, 4, "<div class=\"timeline-item\">");
    timeline_header(&mut html, &title, &range);
    timeline_company(&mut html, edu.url.as_deref(), &edu.institution);
    if let Some(score) = &edu.score {
        line(
            &mut html,
            5,
            &format!(
                "<div class=\"timeline-location\">Grade: {}</div>",
                escape_html(score)
            ),
        );
    }
    if !edu.summary.is_empty() {
        line(
            &mut html,
            5,
            &format!(
                "<p class=\"timeline-description\">{}</p>",
                escape_html(&edu.summary)
            ),
        );
    }
    if !edu.highlights.is_empty() {
        highlight_list(&mut html, &edu.highlights);
    }
    if !edu.keywords.is_empty() {
        tag_list(&mut html, "timeline-technologies", &edu.keywords);
    }
    line(&mut html, 4, "</div>");
    html.trim_end().to_string()
}

fn award_item(output: &mut String, award: &AwardEntry) {
    let date = format_date(award.date.as_deref(), DateStyle::Short);
    let meta = if date.is_empty() {
        escape_html(&award.awarder)
    } else {
        format!("{} • {}", escape_html(&award.awarder), escape_html(&date))
    };

    line(output, 5, "<div class=\"award-item\">");
    line(
        output,
        6,
        &format!("<div class=\"award-title\">{}</div>", escape_html(&award.title)),
    );
    line(output, 6, &format!("<div class=\"award-meta\">{}</div>", meta));
    if let Some(summary) = &award.summary {
        line(
            output,
            6,
            &format!("<p class=\"award-description\">{}</p>", escape_html(summary)),
        );
    }
    line(output, 5, "</div>");
}
