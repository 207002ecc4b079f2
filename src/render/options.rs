//! Rendering options and configuration.

use chrono::NaiveDate;

/// Options for the LaTeX (AltaCV) renderer.
#[derive(Debug, Clone)]
pub struct LatexOptions {
    /// Write the sidebar to its own file instead of embedding it in the
    /// main document
    pub split_sidebar: bool,

    /// Base name of the sidebar file, without extension
    pub sidebar_name: String,

    /// Maximum number of courses listed per education entry
    pub max_courses: usize,

    /// Header photo; `None` omits the `\photo` command
    pub photo: Option<Photo>,

    /// Command shown in the "regenerate" comment of generated files
    pub regenerate_hint: String,
}

impl LatexOptions {
    /// Create new LaTeX options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the separate sidebar file.
    pub fn with_split_sidebar(mut self, split: bool) -> Self {
        self.split_sidebar = split;
        self
    }

    /// Set the maximum number of listed courses.
    pub fn with_max_courses(mut self, max: usize) -> Self {
        self.max_courses = max;
        self
    }

    /// Set or remove the header photo.
    pub fn with_photo(mut self, photo: Option<Photo>) -> Self {
        self.photo = photo;
        self
    }

    /// Set the regenerate hint.
    pub fn with_regenerate_hint(mut self, hint: impl Into<String>) -> Self {
        self.regenerate_hint = hint.into();
        self
    }

    /// File name of the sidebar, e.g. `page1sidebar.tex`.
    pub fn sidebar_file_name(&self) -> String {
        format!("{}.tex", self.sidebar_name)
    }
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            split_sidebar: true,
            sidebar_name: "page1sidebar".to_string(),
            max_courses: 4,
            photo: Some(Photo::default()),
            regenerate_hint: "vitae cv".to_string(),
        }
    }
}

/// Header photo placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// LaTeX length, e.g. "2.5cm"
    pub width: String,
    /// Image file name without extension
    pub file_stem: String,
}

impl Default for Photo {
    fn default() -> Self {
        Self {
            width: "2.5cm".to_string(),
            file_stem: "picture".to_string(),
        }
    }
}

/// Options for the HTML website renderer.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Emit the SEO keyword list and JSON-LD block
    pub seo: bool,

    /// Canonical site URL used in structured data
    pub site_url: String,

    /// Profile image URL; defaults to `<site_url>/picture.jpg`
    pub image_url: Option<String>,

    /// Keywords appended after the skill and technology keywords
    pub extra_keywords: Vec<String>,

    /// Maximum number of SEO keywords
    pub max_keywords: usize,

    /// Maximum number of `knowsAbout` topics in structured data
    pub max_known_topics: usize,

    /// Country code used when the record has none
    pub default_country_code: String,

    /// Username used when the record has no GitHub profile
    pub fallback_github_username: Option<String>,

    /// Date written to the sitemap; `None` uses the current date
    pub build_date: Option<NaiveDate>,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the SEO block.
    pub fn with_seo(mut self, seo: bool) -> Self {
        self.seo = seo;
        self
    }

    /// Set the canonical site URL.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Set the profile image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the extra SEO keywords.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the default country code.
    pub fn with_default_country_code(mut self, code: impl Into<String>) -> Self {
        self.default_country_code = code.into();
        self
    }

    /// Set the fallback GitHub username.
    pub fn with_fallback_github_username(mut self, username: impl Into<String>) -> Self {
        self.fallback_github_username = Some(username.into());
        self
    }

    /// Pin the build date written to the sitemap.
    pub fn with_build_date(mut self, date: NaiveDate) -> Self {
        self.build_date = Some(date);
        self
    }

    /// Resolved profile image URL.
    pub fn resolved_image_url(&self) -> String {
        match &self.image_url {
            Some(url) => url.clone(),
            None if self.site_url.is_empty() => "picture.jpg".to_string(),
            None => format!("{}/picture.jpg", self.site_url.trim_end_matches('/')),
        }
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            seo: true,
            site_url: String::new(),
            image_url: None,
            extra_keywords: vec!["Resume".to_string(), "Portfolio".to_string()],
            max_keywords: 20,
            max_known_topics: 10,
            default_country_code: String::new(),
            fallback_github_username: None,
            build_date: None,
        }
    }
}

/// Options for the Markdown README renderer.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Escape special Markdown characters in free text
    pub escape_special_chars: bool,

    /// Character to use for list markers
    pub list_marker: char,

    /// Animated image shown next to the greeting; `None` omits it
    pub greeting_image: Option<String>,

    /// Command shown in the "regenerate" comment
    pub regenerate_hint: String,
}

impl MarkdownOptions {
    /// Create new Markdown options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set or remove the greeting image.
    pub fn with_greeting_image(mut self, url: Option<String>) -> Self {
        self.greeting_image = url;
        self
    }

    /// Set the regenerate hint.
    pub fn with_regenerate_hint(mut self, hint: impl Into<String>) -> Self {
        self.regenerate_hint = hint.into();
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            escape_special_chars: true,
            list_marker: '-',
            greeting_image: Some(
                "https://github.com/TheDudeThatCode/TheDudeThatCode/blob/master/Assets/Hi.gif"
                    .to_string(),
            ),
            regenerate_hint: "vitae readme".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_options_builder() {
        let options = LatexOptions::new()
            .with_split_sidebar(false)
            .with_max_courses(2)
            .with_photo(None);

        assert!(!options.split_sidebar);
        assert_eq!(options.max_courses, 2);
        assert!(options.photo.is_none());
        assert_eq!(options.sidebar_file_name(), "page1sidebar.tex");
    }

    #[test]
    fn test_html_options_image_url() {
        assert_eq!(HtmlOptions::new().resolved_image_url(), "picture.jpg");

        let options = HtmlOptions::new().with_site_url("https://ada.dev/");
        assert_eq!(options.resolved_image_url(), "https://ada.dev/picture.jpg");

        let options = options.with_image_url("https://cdn.ada.dev/me.png");
        assert_eq!(options.resolved_image_url(), "https://cdn.ada.dev/me.png");
    }

    #[test]
    fn test_html_options_defaults() {
        let options = HtmlOptions::default();
        assert!(options.seo);
        assert_eq!(options.max_keywords, 20);
        assert_eq!(options.max_known_topics, 10);
        assert!(options.build_date.is_none());
    }

    #[test]
    fn test_markdown_options_builder() {
        let options = MarkdownOptions::new()
            .with_escaping(false)
            .with_list_marker('*')
            .with_greeting_image(None);

        assert!(!options.escape_special_chars);
        assert_eq!(options.list_marker, '*');
        assert!(options.greeting_image.is_none());
    }
}
