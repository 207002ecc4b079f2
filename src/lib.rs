//! # vitae
//!
//! Generate a typeset CV, a static website and a profile README from a
//! single JSON résumé.
//!
//! Every entry in the résumé carries a `visibility` list naming the channels
//! it appears in (`pdf`, `website`, `readme`). Each channel has its own
//! renderer, and rendering never modifies the record.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vitae::{load_file, render};
//!
//! fn main() -> vitae::Result<()> {
//!     let record = load_file("resume.json")?;
//!
//!     let readme = render::to_readme(&record, &render::MarkdownOptions::default())?;
//!     println!("{}", readme);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Channels
//!
//! - **pdf**: AltaCV LaTeX source (`cv.tex`) plus its sidebar
//! - **website**: `index.html` with timeline sections, SEO keywords and a
//!   JSON-LD block, plus static assets
//! - **readme**: a GitHub profile `README.md`

pub mod error;
pub mod format;
pub mod generate;
pub mod load;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use generate::{
    write_result, GenerateOptions, GenerateResult, Generator, GeneratorRegistry, OutputFile,
};
pub use load::{load_file, load_reader, load_str};
pub use model::{
    filter_visible, AwardEntry, Basics, Channel, EducationEntry, LanguageEntry, Location, Profile,
    ResumeRecord, SkillCategory, Visibility, Visible, VisibleCounts, WorkEntry,
};
pub use render::{HtmlOptions, LatexOptions, LatexOutput, MarkdownOptions};

use std::path::{Path, PathBuf};

/// Builder for loading a résumé and generating outputs.
///
/// # Example
///
/// ```no_run
/// use vitae::Vitae;
///
/// let written = Vitae::new()
///     .with_site_url("https://ada.dev")
///     .without_seo()
///     .load("resume.json")?
///     .generate("website", "website/output")?;
/// # Ok::<(), vitae::Error>(())
/// ```
pub struct Vitae {
    options: GenerateOptions,
}

impl Vitae {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: GenerateOptions::default(),
        }
    }

    /// Use complete generation options.
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Embed the sidebar in `cv.tex` instead of writing a separate file.
    pub fn embedded_sidebar(mut self) -> Self {
        self.options.latex = self.options.latex.with_split_sidebar(false);
        self
    }

    /// Set the maximum number of courses per education entry.
    pub fn with_max_courses(mut self, max: usize) -> Self {
        self.options.latex = self.options.latex.with_max_courses(max);
        self
    }

    /// Set the canonical site URL.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.options.html = self.options.html.with_site_url(url);
        self
    }

    /// Disable the website SEO block.
    pub fn without_seo(mut self) -> Self {
        self.options.html = self.options.html.with_seo(false);
        self
    }

    /// Pin the sitemap build date.
    pub fn with_build_date(mut self, date: chrono::NaiveDate) -> Self {
        self.options.html = self.options.html.with_build_date(date);
        self
    }

    /// Disable Markdown escaping in the README.
    pub fn without_markdown_escaping(mut self) -> Self {
        self.options.markdown = self.options.markdown.with_escaping(false);
        self
    }

    /// Set the CV template directory.
    pub fn with_cv_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_cv_template_dir(dir);
        self
    }

    /// Set the website template directory.
    pub fn with_website_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_website_template_dir(dir);
        self
    }

    /// Set the profile picture copied next to the website.
    pub fn with_picture(mut self, path: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_picture(path);
        self
    }

    /// Load a résumé file and return a result wrapper.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<VitaeResult> {
        let record = load_file(path)?;
        Ok(self.with_record(record))
    }

    /// Load a résumé from a JSON string.
    pub fn load_str(self, data: &str) -> Result<VitaeResult> {
        let record = load::load_str(data)?;
        Ok(self.with_record(record))
    }

    /// Wrap an already loaded record.
    pub fn with_record(self, record: ResumeRecord) -> VitaeResult {
        VitaeResult {
            record,
            options: self.options,
            registry: GeneratorRegistry::with_defaults(),
        }
    }
}

impl Default for Vitae {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded résumé ready for rendering.
pub struct VitaeResult {
    /// The loaded record
    pub record: ResumeRecord,
    options: GenerateOptions,
    registry: GeneratorRegistry,
}

impl VitaeResult {
    /// Render the LaTeX sources.
    pub fn to_latex(&self) -> Result<LatexOutput> {
        render::to_latex(&self.record, &self.options.latex)
    }

    /// Render the website page with the bundled template.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.record, &self.options.html)
    }

    /// Render the README.
    pub fn to_readme(&self) -> Result<String> {
        render::to_readme(&self.record, &self.options.markdown)
    }

    /// Render every file of a channel without writing anything.
    pub fn render_channel(&self, channel: &str) -> Result<GenerateResult> {
        self.registry.generate(channel, &self.record, &self.options)
    }

    /// Generate a channel and write it below `output_dir`.
    pub fn generate<P: AsRef<Path>>(&self, channel: &str, output_dir: P) -> Result<Vec<PathBuf>> {
        let result = self.render_channel(channel)?;
        write_result(&result, output_dir)
    }

    /// Entry counts per category visible in `channel`.
    pub fn visible_counts(&self, channel: Channel) -> VisibleCounts {
        self.record.visible_counts(channel.as_str())
    }

    /// Get the record.
    pub fn record(&self) -> &ResumeRecord {
        &self.record
    }

    /// Get the generation options.
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }
}
