//! Integration tests for the channel renderers.

use vitae::render::{
    to_html, to_latex, to_readme, unresolved_placeholders, HtmlOptions, LatexOptions,
    MarkdownOptions,
};
use vitae::{load_str, ResumeRecord};

const RESUME: &str = include_str!("fixtures/resume.json");

fn record() -> ResumeRecord {
    load_str(RESUME).unwrap()
}

fn html_options() -> HtmlOptions {
    HtmlOptions::new().with_site_url("https://ada.dev")
}

#[test]
fn test_work_entry_hidden_from_readme() {
    let record = record();

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    let html = to_html(&record, &html_options()).unwrap();
    let readme = to_readme(&record, &MarkdownOptions::default()).unwrap();

    assert!(latex.document.contains("{Analytical Engines}"));
    assert!(html.contains("Analytical Engines"));
    assert!(!readme.contains("Analytical Engines"));
    assert!(readme.contains("Maintainer"));
}

#[test]
fn test_fluency_levels_in_sidebar() {
    let latex = to_latex(&record(), &LatexOptions::default()).unwrap();
    let sidebar = latex.sidebar.unwrap();

    assert!(sidebar.contains("\\cvskill{English}{5}\nNative speaker\n"));
    assert!(sidebar.contains("\\cvskill{French}{3}\nProfessional working proficiency\n"));
}

#[test]
fn test_empty_awards_produce_no_section() {
    let record = record();
    assert!(record.awards.is_empty());

    let sidebar = to_latex(&record, &LatexOptions::default())
        .unwrap()
        .sidebar
        .unwrap();
    let html = to_html(&record, &html_options()).unwrap();

    assert!(!sidebar.contains("Awards"));
    assert!(!html.contains("awards-section"));
    assert!(!html.contains("Awards &amp; Recognition"));
}

#[test]
fn test_ongoing_range_per_channel() {
    let latex = to_latex(&record(), &LatexOptions::default()).unwrap();
    assert!(latex
        .document
        .contains("{March 2022 -- Present}{London, United Kingdom}"));

    let html = to_html(&record(), &html_options()).unwrap();
    assert!(html.contains("<div class=\"timeline-date\">Mar 2022 – Present</div>"));

    let ongoing = load_str(
        r#"{"work": [{"name": "Acme", "position": "Dev", "startDate": "2023-11-01", "visibility": ["readme"]}]}"#,
    )
    .unwrap();
    let readme = to_readme(&ongoing, &MarkdownOptions::default()).unwrap();
    assert!(readme.contains("*November 2023 - Present*"));
}

#[test]
fn test_closed_range_per_channel() {
    let record = record();
    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(latex.document.contains("{June 2019 -- February 2022}"));

    let readme = to_readme(&record, &MarkdownOptions::default()).unwrap();
    assert!(readme.contains(
        "- 👨🏻‍💻 Maintainer - [`@difference-engine`](https://github.com/difference-engine)  \n\
         *Cambridge, United Kingdom | June 2019 - February 2022*  \n\
         🛠 **Technologies**: Rust\n\n"
    ));
}

#[test]
fn test_entries_keep_record_order() {
    let latex = to_latex(&record(), &LatexOptions::default()).unwrap();
    let senior = latex.document.find("Senior Data Engineer").unwrap();
    let maintainer = latex.document.find("Maintainer").unwrap();
    assert!(senior < maintainer);
    assert_eq!(latex.document.matches("\\divider").count(), 1);
}

#[test]
fn test_escaping_per_dialect() {
    let record = record();

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(latex.document.contains("Owns the streaming platform (100\\% uptime)."));

    let html = to_html(&record, &html_options()).unwrap();
    assert!(html.contains("<p class=\"summary\">Builds data pipelines &amp; analytical engines.</p>"));

    let sidebar = latex.sidebar.unwrap();
    assert!(sidebar.contains("\\cvachievement{\\faGithub}{GitHub}{\\url{github.com/ada\\_l}}"));
}

#[test]
fn test_courses_capped_keywords_uncapped() {
    let record = record();

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(latex.document.contains("\\textbf{Logic}"));
    assert!(!latex.document.contains("Topology"));

    let latex = to_latex(&record, &LatexOptions::new().with_max_courses(2)).unwrap();
    assert!(latex.document.contains("\\textbf{Algebra}\n"));
    assert!(!latex.document.contains("Probability"));

    let html = to_html(&record, &html_options()).unwrap();
    assert!(html.contains("<span class=\"tech-tag\">Numerical Methods</span>"));
}

#[test]
fn test_profiles_filtered_per_channel() {
    let record = record();

    let html = to_html(&record, &html_options()).unwrap();
    assert!(html.contains(">Mastodon</a>"));

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(!latex.document.contains("fosstodon"));
    assert!(!latex.sidebar.unwrap().contains("fosstodon"));

    let readme = to_readme(&record, &MarkdownOptions::default()).unwrap();
    assert!(!readme.contains("Mastodon"));
    assert!(readme.contains("- 💻 [GitHub](https://github.com/ada_l)  \n"));
}

#[test]
fn test_structured_data_block() {
    let html = to_html(&record(), &html_options()).unwrap();

    assert!(html.contains("\"worksFor\": {"));
    assert!(html.contains("\"name\": \"Analytical Engines\""));
    assert!(html.contains("\"addressCountry\": \"GB\""));
    assert!(html.contains("\"image\": \"https://ada.dev/picture.jpg\""));
    assert!(html.contains(
        "<meta name=\"keywords\" content=\"Rust, Python, SQL, Kubernetes, Terraform, Kafka, PostgreSQL, Data Engineer, Resume, Portfolio\">"
    ));
}

#[test]
fn test_seo_disabled() {
    let html = to_html(&record(), &html_options().with_seo(false)).unwrap();
    assert!(!html.contains("\"@type\""));
    assert!(html.contains("<meta name=\"keywords\" content=\"\">"));
}

#[test]
fn test_github_username_placeholder() {
    let html = to_html(&record(), &html_options()).unwrap();
    assert!(html.contains("data-github-user=\"ada_l\""));
}

#[test]
fn test_no_unresolved_placeholders() {
    let record = record();

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(unresolved_placeholders(&latex.document).is_empty());
    assert!(unresolved_placeholders(latex.sidebar.as_deref().unwrap()).is_empty());

    let html = to_html(&record, &html_options()).unwrap();
    assert!(unresolved_placeholders(&html).is_empty());

    let readme = to_readme(&record, &MarkdownOptions::default()).unwrap();
    assert!(unresolved_placeholders(&readme).is_empty());
}

#[test]
fn test_rendering_is_idempotent_and_pure() {
    let record = record();
    let before = record.clone();

    let first = (
        to_latex(&record, &LatexOptions::default()).unwrap(),
        to_html(&record, &html_options()).unwrap(),
        to_readme(&record, &MarkdownOptions::default()).unwrap(),
    );
    let second = (
        to_latex(&record, &LatexOptions::default()).unwrap(),
        to_html(&record, &html_options()).unwrap(),
        to_readme(&record, &MarkdownOptions::default()).unwrap(),
    );

    assert_eq!(first, second);
    assert_eq!(record, before);
}

#[test]
fn test_unknown_and_missing_visibility() {
    let record = load_str(
        r#"{"work": [
            {"name": "Print Only", "position": "A", "visibility": ["print"]},
            {"name": "No Tags", "position": "B"},
            {"name": "Bad Tags", "position": "C", "visibility": "pdf"}
        ]}"#,
    )
    .unwrap();

    let latex = to_latex(&record, &LatexOptions::default()).unwrap();
    assert!(latex.document.contains("% No work experience entries for PDF"));

    let html = to_html(&record, &HtmlOptions::default()).unwrap();
    assert!(!html.contains("timeline-item"));
}

#[test]
fn test_malformed_categories_treated_as_empty() {
    let record = load_str(r#"{"work": "none", "skills": {"name": "Rust"}, "basics": []}"#).unwrap();
    assert!(record.work.is_empty());
    assert!(record.skills.is_empty());
    assert!(record.basics.name.is_empty());

    let readme = to_readme(&record, &MarkdownOptions::default()).unwrap();
    assert!(!readme.contains("Work Experience"));
}
