//! Search-engine metadata for the website: keyword list and JSON-LD block.

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::model::{filter_visible, Channel, ResumeRecord};

use super::HtmlOptions;

/// SEO keywords: visible skill keywords, visible work technologies, the
/// label, then the configured extras. Duplicates keep their first position.
pub fn keywords(record: &ResumeRecord, options: &HtmlOptions) -> Vec<String> {
    let skills = filter_visible(&record.skills, Channel::Website)
        .into_iter()
        .flat_map(|skill| skill.keywords.iter());
    let technologies = filter_visible(&record.work, Channel::Website)
        .into_iter()
        .flat_map(|job| job.technologies.iter());
    let label = Some(&record.basics.label).filter(|l| !l.is_empty());

    let mut keywords: Vec<String> = Vec::new();
    for keyword in skills
        .chain(technologies)
        .chain(label)
        .chain(options.extra_keywords.iter())
    {
        if !keywords.contains(keyword) {
            keywords.push(keyword.clone());
        }
    }

    keywords.truncate(options.max_keywords);
    keywords
}

/// A schema.org `Person` description of the résumé owner.
pub fn structured_data(record: &ResumeRecord, options: &HtmlOptions) -> Value {
    let basics = &record.basics;
    let country = if basics.location.country_code.is_empty() {
        options.default_country_code.as_str()
    } else {
        basics.location.country_code.as_str()
    };

    let same_as: Vec<&str> = filter_visible(&basics.profiles, Channel::Website)
        .into_iter()
        .map(|p| p.url.as_str())
        .collect();

    let knows_about: Vec<&str> = filter_visible(&record.skills, Channel::Website)
        .into_iter()
        .flat_map(|skill| skill.keywords.iter().map(String::as_str))
        .take(options.max_known_topics)
        .collect();

    let alumni_of: Vec<Value> = filter_visible(&record.education, Channel::Website)
        .into_iter()
        .map(|edu| {
            json!({
                "@type": "EducationalOrganization",
                "name": edu.institution,
                "url": edu.url.as_deref().unwrap_or(""),
            })
        })
        .collect();

    let mut person = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": basics.name,
        "url": options.site_url,
        "image": options.resolved_image_url(),
        "jobTitle": basics.label,
        "description": basics.summary,
        "email": basics.email,
        "telephone": basics.phone,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": basics.location.city,
            "addressRegion": basics.location.region,
            "addressCountry": country,
        },
        "sameAs": same_as,
        "knowsAbout": knows_about,
        "alumniOf": alumni_of,
    });

    if let Some(current) = filter_visible(&record.work, Channel::Website).first() {
        person["worksFor"] = json!({
            "@type": "Organization",
            "name": current.name,
        });
    }

    person
}

/// Pretty-printed JSON-LD, safe to embed in a `<script>` element.
pub fn structured_data_json(record: &ResumeRecord, options: &HtmlOptions) -> Result<String> {
    let json = serde_json::to_string_pretty(&structured_data(record, options))
        .map_err(|e| Error::Render(format!("JSON-LD serialization error: {}", e)))?;
    Ok(json.replace("</", "<\\/"))
}
