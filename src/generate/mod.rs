//! Channel generators: one per output channel, dispatched through a registry.
//!
//! A generator turns a record into a [`GenerateResult`], a list of output
//! files relative to an output directory. Generating never touches the output
//! directory; [`write_result`] performs the I/O step.
//!
//! # Example
//!
//! ```no_run
//! use vitae::generate::{write_result, GenerateOptions, GeneratorRegistry};
//!
//! fn main() -> vitae::Result<()> {
//!     let record = vitae::load_file("resume.json")?;
//!     let registry = GeneratorRegistry::with_defaults();
//!
//!     let result = registry.generate("readme", &record, &GenerateOptions::default())?;
//!     write_result(&result, ".")?;
//!     Ok(())
//! }
//! ```

mod latex;
mod readme;
mod website;
mod write;

pub use latex::CvGenerator;
pub use readme::ReadmeGenerator;
pub use website::WebsiteGenerator;
pub use write::write_result;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{Channel, ResumeRecord};
use crate::render::{HtmlOptions, LatexOptions, MarkdownOptions};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// LaTeX rendering options
    pub latex: LatexOptions,

    /// HTML rendering options
    pub html: HtmlOptions,

    /// Markdown rendering options
    pub markdown: MarkdownOptions,

    /// Directory holding `altacv.cls` and `picture.jpg` for the CV
    pub cv_template_dir: Option<PathBuf>,

    /// Directory holding the website template and assets; `None` uses the
    /// bundled template
    pub website_template_dir: Option<PathBuf>,

    /// Profile picture copied next to the website
    pub picture: Option<PathBuf>,
}

impl GenerateOptions {
    /// Create new generation options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set LaTeX options.
    pub fn with_latex_options(mut self, options: LatexOptions) -> Self {
        self.latex = options;
        self
    }

    /// Set HTML options.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html = options;
        self
    }

    /// Set Markdown options.
    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown = options;
        self
    }

    /// Set the CV template directory.
    pub fn with_cv_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cv_template_dir = Some(dir.into());
        self
    }

    /// Set the website template directory.
    pub fn with_website_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.website_template_dir = Some(dir.into());
        self
    }

    /// Set the profile picture.
    pub fn with_picture(mut self, path: impl Into<PathBuf>) -> Self {
        self.picture = Some(path.into());
        self
    }
}

/// Contents of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContents {
    /// Rendered text
    Text(String),

    /// Verbatim copy of an existing file
    Copy(PathBuf),
}

/// A file produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output directory
    pub path: PathBuf,

    pub contents: OutputContents,
}

impl OutputFile {
    /// A rendered text file.
    pub fn text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: OutputContents::Text(text.into()),
        }
    }

    /// A file copied from `source`.
    pub fn copy(path: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: OutputContents::Copy(source.into()),
        }
    }

    /// Rendered text, or `None` for copied files.
    pub fn as_text(&self) -> Option<&str> {
        match &self.contents {
            OutputContents::Text(text) => Some(text),
            OutputContents::Copy(_) => None,
        }
    }
}

/// Result of generating one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Channel the files were generated for
    pub channel: Channel,

    /// Output files in write order
    pub files: Vec<OutputFile>,
}

impl GenerateResult {
    /// Create an empty result.
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            files: Vec::new(),
        }
    }

    /// Add a file.
    pub fn push(&mut self, file: OutputFile) {
        self.files.push(file);
    }

    /// Find a file by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&OutputFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    /// Rendered text of a file, if present and not a copy.
    pub fn text(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.file(path).and_then(OutputFile::as_text)
    }

    /// Number of output files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Trait for channel generators.
///
/// Implement this trait to add a new output channel.
pub trait Generator: Send + Sync {
    /// The channel this generator renders.
    fn channel(&self) -> Channel;

    /// Get the name of this generator.
    fn name(&self) -> &str;

    /// Render every output file of the channel.
    fn generate(&self, record: &ResumeRecord, options: &GenerateOptions)
        -> Result<GenerateResult>;
}

/// Registry for channel generators.
///
/// Generators are looked up by channel tag (`pdf`, `website`, `readme`) or
/// by their own name (`cv`, `website`, `readme`).
pub struct GeneratorRegistry {
    by_channel: HashMap<String, Arc<dyn Generator>>,
    by_name: HashMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_channel: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the three built-in generators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CvGenerator::new()));
        registry.register(Arc::new(WebsiteGenerator::new()));
        registry.register(Arc::new(ReadmeGenerator::new()));
        registry
    }

    /// Register a generator, replacing any previous one for its channel.
    pub fn register(&mut self, generator: Arc<dyn Generator>) {
        let channel = generator.channel().as_str().to_string();
        if let Some(previous) = self.by_channel.insert(channel, generator.clone()) {
            self.by_name.remove(&previous.name().to_lowercase());
        }
        self.by_name
            .insert(generator.name().to_lowercase(), generator);
    }

    /// Get a generator by channel tag.
    pub fn get(&self, channel: &str) -> Option<Arc<dyn Generator>> {
        self.by_channel.get(&channel.to_lowercase()).cloned()
    }

    /// Get a generator by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if a channel has a generator.
    pub fn supports(&self, channel: &str) -> bool {
        self.by_channel.contains_key(&channel.to_lowercase())
    }

    /// Registered channel tags in generation order.
    pub fn channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| self.by_channel.contains_key(c.as_str()))
            .collect()
    }

    /// Generate one channel. Accepts a channel tag or a generator name.
    pub fn generate(
        &self,
        channel: &str,
        record: &ResumeRecord,
        options: &GenerateOptions,
    ) -> Result<GenerateResult> {
        let generator = self
            .get(channel)
            .or_else(|| self.get_by_name(channel))
            .ok_or_else(|| Error::UnknownChannel(channel.to_string()))?;

        log::debug!("Generating channel {} with {}", channel, generator.name());
        generator.generate(record, options)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
