//! Integration tests for the generator registry and file writing.

use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use vitae::error::{Error, Result};
use vitae::generate::{
    write_result, GenerateOptions, GenerateResult, Generator, GeneratorRegistry, OutputFile,
};
use vitae::{load_str, Channel, HtmlOptions, ResumeRecord, Vitae};

const RESUME: &str = include_str!("fixtures/resume.json");

fn build_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

/// Mock generator for testing.
struct MockGenerator {
    channel: Channel,
    name: &'static str,
}

impl Generator for MockGenerator {
    fn channel(&self) -> Channel {
        self.channel
    }

    fn name(&self) -> &str {
        self.name
    }

    fn generate(&self, record: &ResumeRecord, _options: &GenerateOptions) -> Result<GenerateResult> {
        let mut result = GenerateResult::new(self.channel);
        result.push(OutputFile::text(
            "mock.txt",
            format!("{} by {}", record.basics.name, self.name),
        ));
        Ok(result)
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = GeneratorRegistry::new();
    assert!(!registry.supports("pdf"));
    assert!(registry.channels().is_empty());
}

#[test]
fn test_registry_register_replaces_channel() {
    let mut registry = GeneratorRegistry::with_defaults();
    registry.register(Arc::new(MockGenerator {
        channel: Channel::Readme,
        name: "mock",
    }));

    let record = load_str(RESUME).unwrap();
    let result = registry
        .generate("readme", &record, &GenerateOptions::default())
        .unwrap();
    assert_eq!(result.text("mock.txt"), Some("Ada Lovelace by mock"));
    assert!(registry.get_by_name("mock").is_some());
}

#[test]
fn test_registry_generate_by_name() {
    let registry = GeneratorRegistry::with_defaults();
    let record = load_str(RESUME).unwrap();
    let result = registry
        .generate("cv", &record, &GenerateOptions::default())
        .unwrap();
    assert_eq!(result.channel, Channel::Pdf);
}

#[test]
fn test_generate_all_channels_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let vitae = Vitae::new()
        .with_site_url("https://ada.dev")
        .with_build_date(build_date())
        .load_str(RESUME)
        .unwrap();

    let cv = vitae.generate("pdf", dir.path().join("cv")).unwrap();
    let site = vitae.generate("website", dir.path().join("site")).unwrap();
    let readme = vitae.generate("readme", dir.path()).unwrap();

    assert_eq!(cv.len(), 2);
    assert_eq!(site.len(), 5);
    assert_eq!(readme, vec![dir.path().join("README.md")]);

    let sidebar = fs::read_to_string(dir.path().join("cv").join("page1sidebar.tex")).unwrap();
    assert!(sidebar.contains("\\cvsection{Skills}"));

    let sitemap = fs::read_to_string(dir.path().join("site").join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<lastmod>2024-05-01</lastmod>"));
}

#[test]
fn test_generation_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let vitae = Vitae::new()
        .with_build_date(build_date())
        .load_str(RESUME)
        .unwrap();

    for channel in Channel::ALL {
        let first_dir = dir.path().join("first").join(channel.as_str());
        let second_dir = dir.path().join("second").join(channel.as_str());
        let first = vitae.generate(channel.as_str(), &first_dir).unwrap();
        let second = vitae.generate(channel.as_str(), &second_dir).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
        }
    }
}

#[test]
fn test_cv_assets_copied() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template");
    fs::create_dir_all(&template).unwrap();
    fs::write(template.join("altacv.cls"), "% AltaCV class").unwrap();
    fs::write(template.join("picture.jpg"), [0xFFu8, 0xD8]).unwrap();

    let vitae = Vitae::new()
        .with_cv_template_dir(&template)
        .load_str(RESUME)
        .unwrap();
    let output = dir.path().join("output");
    vitae.generate("pdf", &output).unwrap();

    assert_eq!(
        fs::read_to_string(output.join("altacv.cls")).unwrap(),
        "% AltaCV class"
    );
    assert_eq!(fs::read(output.join("picture.jpg")).unwrap(), vec![0xFF, 0xD8]);
    assert!(output.join("cv.tex").exists());
}

#[test]
fn test_website_picture_copied() {
    let dir = tempfile::tempdir().unwrap();
    let picture = dir.path().join("me.jpg");
    fs::write(&picture, [1u8, 2, 3]).unwrap();

    let vitae = Vitae::new()
        .with_picture(&picture)
        .with_build_date(build_date())
        .load_str(RESUME)
        .unwrap();
    let output = dir.path().join("site");
    vitae.generate("website", &output).unwrap();

    assert_eq!(fs::read(output.join("picture.jpg")).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_missing_website_template_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("site");

    let vitae = Vitae::new()
        .with_website_template_dir(dir.path().join("no-template"))
        .load_str(RESUME)
        .unwrap();
    let err = vitae.generate("website", &output).unwrap_err();

    assert!(matches!(err, Error::MissingTemplate(_)));
    assert!(!output.exists());
}

#[test]
fn test_write_result_to_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let mut result = GenerateResult::new(Channel::Readme);
    result.push(OutputFile::text("README.md", "# Hi"));

    let err = write_result(&result, &blocker).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn test_options_flow_through_registry() {
    let options = GenerateOptions::new()
        .with_html_options(HtmlOptions::new().with_seo(false).with_build_date(build_date()));
    let record = load_str(RESUME).unwrap();

    let result = GeneratorRegistry::with_defaults()
        .generate("website", &record, &options)
        .unwrap();
    let html = result.text("index.html").unwrap();
    assert!(!html.contains("\"@context\""));
}
