//! Static website generator (`website` channel).

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::model::{Channel, ResumeRecord};
use crate::render::html::DEFAULT_TEMPLATE;
use crate::render::{Fragments, HtmlRenderer, Template};

use super::{GenerateOptions, GenerateResult, Generator, OutputFile};

/// Main page file name.
pub const INDEX_FILE: &str = "index.html";

const STYLE_FILE: &str = "style.css";
const SCRIPT_FILE: &str = "script.js";
const ROBOTS_FILE: &str = "robots.txt";
const SITEMAP_FILE: &str = "sitemap.xml";
const PICTURE_FILE: &str = "picture.jpg";

const DEFAULT_STYLE: &str = include_str!("../../templates/website/style.css");
const DEFAULT_SCRIPT: &str = include_str!("../../templates/website/script.js");
const DEFAULT_ROBOTS: &str = include_str!("../../templates/website/robots.txt");
const DEFAULT_SITEMAP: &str = include_str!("../../templates/website/sitemap.xml");

/// Generator for the static website.
#[derive(Debug, Clone, Default)]
pub struct WebsiteGenerator {
    _private: (),
}

impl WebsiteGenerator {
    /// Create a new website generator.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Fragments for `robots.txt` and `sitemap.xml`.
    fn site_fragments(&self, options: &GenerateOptions) -> Fragments {
        let build_date = options
            .html
            .build_date
            .unwrap_or_else(|| Local::now().date_naive());

        let mut fragments = Fragments::new();
        fragments.insert(
            "SITE_URL",
            options.html.site_url.trim_end_matches('/').to_string(),
        );
        fragments.insert("LAST_MOD", last_mod(build_date));
        fragments
    }
}

impl Generator for WebsiteGenerator {
    fn channel(&self) -> Channel {
        Channel::Website
    }

    fn name(&self) -> &str {
        "website"
    }

    fn generate(&self, record: &ResumeRecord, options: &GenerateOptions) -> Result<GenerateResult> {
        let renderer = HtmlRenderer::new(options.html.clone());
        let site = self.site_fragments(options);
        let mut result = GenerateResult::new(Channel::Website);

        match &options.website_template_dir {
            Some(dir) => {
                let index = Template::new(read_template(&dir.join(INDEX_FILE))?);
                result.push(OutputFile::text(INDEX_FILE, renderer.render(record, &index)?));

                for asset in [STYLE_FILE, SCRIPT_FILE] {
                    let source = dir.join(asset);
                    if !source.is_file() {
                        return Err(Error::MissingTemplate(source));
                    }
                    result.push(OutputFile::copy(asset, source));
                }

                for name in [ROBOTS_FILE, SITEMAP_FILE] {
                    let template = Template::new(read_template(&dir.join(name))?);
                    result.push(OutputFile::text(name, template.fill(&site)));
                }
            }
            None => {
                let index = Template::new(DEFAULT_TEMPLATE);
                result.push(OutputFile::text(INDEX_FILE, renderer.render(record, &index)?));
                result.push(OutputFile::text(STYLE_FILE, DEFAULT_STYLE));
                result.push(OutputFile::text(SCRIPT_FILE, DEFAULT_SCRIPT));
                result.push(OutputFile::text(
                    ROBOTS_FILE,
                    Template::new(DEFAULT_ROBOTS).fill(&site),
                ));
                result.push(OutputFile::text(
                    SITEMAP_FILE,
                    Template::new(DEFAULT_SITEMAP).fill(&site),
                ));
            }
        }

        if let Some(picture) = &options.picture {
            if picture.is_file() {
                result.push(OutputFile::copy(PICTURE_FILE, picture.clone()));
            } else {
                log::warn!("Picture {} not found, skipping", picture.display());
            }
        }

        Ok(result)
    }
}

/// Sitemap `lastmod` value, e.g. `2024-05-01`.
pub fn last_mod(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn read_template(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::MissingTemplate(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlOptions;

    fn options() -> GenerateOptions {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        GenerateOptions::new().with_html_options(
            HtmlOptions::new()
                .with_site_url("https://ada.dev/")
                .with_build_date(date),
        )
    }

    #[test]
    fn test_bundled_template_files() {
        let result = WebsiteGenerator::new()
            .generate(&ResumeRecord::default(), &options())
            .unwrap();

        let names: Vec<_> = result
            .files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["index.html", "style.css", "script.js", "robots.txt", "sitemap.xml"]
        );

        let sitemap = result.text(SITEMAP_FILE).unwrap();
        assert!(sitemap.contains("<lastmod>2024-05-01</lastmod>"));
        assert!(sitemap.contains("<loc>https://ada.dev/</loc>"));
        assert!(result
            .text(ROBOTS_FILE)
            .unwrap()
            .contains("Sitemap: https://ada.dev/sitemap.xml"));
    }

    #[test]
    fn test_template_dir_missing_index() {
        let dir = tempfile::tempdir().unwrap();
        let options = options().with_website_template_dir(dir.path());

        let err = WebsiteGenerator::new()
            .generate(&ResumeRecord::default(), &options)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTemplate(path) if path.ends_with("index.html")));
    }

    #[test]
    fn test_template_dir_missing_style() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<h1>{{NAME}}</h1>").unwrap();
        let options = options().with_website_template_dir(dir.path());

        let err = WebsiteGenerator::new()
            .generate(&ResumeRecord::default(), &options)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTemplate(path) if path.ends_with("style.css")));
    }

    #[test]
    fn test_template_dir_custom_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<h1>{{NAME}}</h1>").unwrap();
        fs::write(dir.path().join(STYLE_FILE), "body {}").unwrap();
        fs::write(dir.path().join(SCRIPT_FILE), "").unwrap();
        fs::write(dir.path().join(ROBOTS_FILE), "User-agent: *").unwrap();
        fs::write(dir.path().join(SITEMAP_FILE), "{{LAST_MOD}}").unwrap();

        let mut record = ResumeRecord::default();
        record.basics.name = "Ada & Co".to_string();
        let options = options().with_website_template_dir(dir.path());

        let result = WebsiteGenerator::new().generate(&record, &options).unwrap();
        assert_eq!(result.text(INDEX_FILE), Some("<h1>Ada &amp; Co</h1>"));
        assert_eq!(result.text(SITEMAP_FILE), Some("2024-05-01"));
        assert!(matches!(
            &result.file(STYLE_FILE).unwrap().contents,
            crate::generate::OutputContents::Copy(_)
        ));
    }

    #[test]
    fn test_missing_picture_skipped() {
        let options = options().with_picture("/nonexistent/picture.jpg");
        let result = WebsiteGenerator::new()
            .generate(&ResumeRecord::default(), &options)
            .unwrap();
        assert!(result.file(PICTURE_FILE).is_none());
    }
}
