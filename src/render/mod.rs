//! Rendering module: turns a résumé record into fragments for each output
//! dialect and substitutes them into templates.

pub mod html;
pub mod latex;
mod markdown;
mod options;
pub mod seo;
mod template;

pub use html::{to_html, HtmlRenderer};
pub use latex::{to_latex, LatexOutput, LatexRenderer};
pub use markdown::{to_readme, MarkdownRenderer};
pub use options::{HtmlOptions, LatexOptions, MarkdownOptions, Photo};
pub use template::{placeholder, unresolved_placeholders, Fragments, Template};
