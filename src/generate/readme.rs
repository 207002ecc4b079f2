//! Profile README generator (`readme` channel).

use crate::error::Result;
use crate::model::{Channel, ResumeRecord};
use crate::render::MarkdownRenderer;

use super::{GenerateOptions, GenerateResult, Generator, OutputFile};

/// Output file name.
pub const README_FILE: &str = "README.md";

/// Generator for `README.md`.
#[derive(Debug, Clone, Default)]
pub struct ReadmeGenerator {
    _private: (),
}

impl ReadmeGenerator {
    /// Create a new README generator.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Generator for ReadmeGenerator {
    fn channel(&self) -> Channel {
        Channel::Readme
    }

    fn name(&self) -> &str {
        "readme"
    }

    fn generate(&self, record: &ResumeRecord, options: &GenerateOptions) -> Result<GenerateResult> {
        let readme = MarkdownRenderer::new(options.markdown.clone()).render(record)?;
        let mut result = GenerateResult::new(Channel::Readme);
        result.push(OutputFile::text(README_FILE, readme));
        Ok(result)
    }
}
