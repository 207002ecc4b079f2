//! Typeset CV generator (`pdf` channel).

use crate::error::Result;
use crate::model::{Channel, ResumeRecord};
use crate::render::LatexRenderer;

use super::{GenerateOptions, GenerateResult, Generator, OutputFile};

/// Main document file name.
pub const CV_FILE: &str = "cv.tex";

/// Files copied from the CV template directory when present.
const CV_ASSETS: [&str; 2] = ["altacv.cls", "picture.jpg"];

/// Generator for the AltaCV LaTeX sources.
#[derive(Debug, Clone, Default)]
pub struct CvGenerator {
    _private: (),
}

impl CvGenerator {
    /// Create a new CV generator.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Generator for CvGenerator {
    fn channel(&self) -> Channel {
        Channel::Pdf
    }

    fn name(&self) -> &str {
        "cv"
    }

    fn generate(&self, record: &ResumeRecord, options: &GenerateOptions) -> Result<GenerateResult> {
        let output = LatexRenderer::new(options.latex.clone()).render(record);
        let mut result = GenerateResult::new(Channel::Pdf);

        result.push(OutputFile::text(CV_FILE, output.document));
        if let Some(sidebar) = output.sidebar {
            result.push(OutputFile::text(options.latex.sidebar_file_name(), sidebar));
        }

        if let Some(dir) = &options.cv_template_dir {
            for asset in CV_ASSETS {
                let source = dir.join(asset);
                if source.is_file() {
                    result.push(OutputFile::copy(asset, source));
                } else {
                    log::debug!("No {} in {}, skipping", asset, dir.display());
                }
            }
        }

        Ok(result)
    }
}
