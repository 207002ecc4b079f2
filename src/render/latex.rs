//! LaTeX rendering for the AltaCV class.

use crate::error::Result;
use crate::format::{escape_latex, fluency_level, format_date_range, shorten_url, DateStyle};
use crate::model::{
    filter_visible, Channel, EducationEntry, Profile, ResumeRecord, SkillCategory, WorkEntry,
};

use super::{Fragments, LatexOptions, Template};

/// Separator placed between consecutive entries of a section.
const DIVIDER: &str = "\n\\divider\n\n";

/// Separator between date range endpoints.
const RANGE_SEPARATOR: &str = " -- ";

const DOCUMENT_TEMPLATE: &str = r#"%%%%%%%%%%%%%%%%%
% This file is auto-generated from resume.json. Do not edit manually.
% Run "{{REGENERATE_HINT}}" to regenerate this file.
%%%%%%%%%%%%%%%%

{{EMBEDDED_SIDEBAR}}%% If you need to pass whatever options to xcolor
\PassOptionsToPackage{dvipsnames}{xcolor}

\documentclass[10pt,a4paper]{altacv}

% Change the page layout if you need to
\geometry{left=1cm,right=9cm,marginparwidth=6.8cm,marginparsep=1.2cm,top=1.25cm,bottom=1.25cm,footskip=2pt}

% If using pdflatex:
\usepackage[T1]{fontenc}
\usepackage[utf8]{inputenc}
\usepackage[default]{lato}

% Change the colours if you want to
\definecolor{links}{HTML}{025159}
\definecolor{Mulberry}{HTML}{15959F}
\definecolor{SlateGrey}{HTML}{133046}
\definecolor{LightGrey}{HTML}{666666}
\definecolor{titlesColor}{HTML}{133046}
\colorlet{heading}{titlesColor}
\colorlet{accent}{Mulberry}
\colorlet{emphasis}{SlateGrey}
\colorlet{body}{LightGrey}

% Change the bullets for itemize and rating marker
\renewcommand{\itemmarker}{{\small\textbullet}}
\renewcommand{\ratingmarker}{\faCircle}

\usepackage[colorlinks]{hyperref}

\begin{document}

\hypersetup{urlcolor=links}

\name{{{NAME}}}
\tagline{{{TAGLINE}}}
{{PHOTO}}
\personalinfo{%
{{PERSONAL_INFO}}
}

%% Make the header extend all the way to the right
\begin{fullwidth}
\makecvheader
\end{fullwidth}

%% Work Experience Section
\cvsection[{{SIDEBAR_NAME}}]{Work Experience}

{{WORK_EXPERIENCE}}

%% Education Section
\cvsection{Education}

{{EDUCATION}}

\end{document}
"#;

/// Rendered LaTeX sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexOutput {
    /// Main document (`cv.tex`)
    pub document: String,

    /// Sidebar file contents, when the sidebar is split into its own file
    pub sidebar: Option<String>,
}

/// Render a record to AltaCV LaTeX.
pub fn to_latex(record: &ResumeRecord, options: &LatexOptions) -> Result<LatexOutput> {
    let renderer = LatexRenderer::new(options.clone());
    Ok(renderer.render(record))
}

/// LaTeX renderer for the `pdf` channel.
pub struct LatexRenderer {
    options: LatexOptions,
}

impl LatexRenderer {
    /// Create a new LaTeX renderer.
    pub fn new(options: LatexOptions) -> Self {
        Self { options }
    }

    /// Render the main document and sidebar.
    pub fn render(&self, record: &ResumeRecord) -> LatexOutput {
        let mut fragments = self.fragments(record);
        let sidebar = self.sidebar(record);

        if self.options.split_sidebar {
            fragments.insert("EMBEDDED_SIDEBAR", "");
            LatexOutput {
                document: Template::new(DOCUMENT_TEMPLATE).fill(&fragments),
                sidebar: Some(sidebar),
            }
        } else {
            // filecontents* writes the sidebar next to cv.tex at compile time
            fragments.insert(
                "EMBEDDED_SIDEBAR",
                format!(
                    "\\begin{{filecontents*}}[overwrite]{{{}}}\n{}\\end{{filecontents*}}\n\n",
                    self.options.sidebar_file_name(),
                    sidebar
                ),
            );
            LatexOutput {
                document: Template::new(DOCUMENT_TEMPLATE).fill(&fragments),
                sidebar: None,
            }
        }
    }

    /// Fragments for the main document template.
    pub fn fragments(&self, record: &ResumeRecord) -> Fragments {
        let basics = &record.basics;
        let photo = match &self.options.photo {
            Some(photo) => format!("\\photo{{{}}}{{{}}}\n", photo.width, photo.file_stem),
            None => String::new(),
        };

        let mut fragments = Fragments::new();
        fragments.insert("REGENERATE_HINT", self.options.regenerate_hint.clone());
        fragments.insert("NAME", escape_latex(&basics.name));
        fragments.insert("TAGLINE", escape_latex(&basics.label));
        fragments.insert("PHOTO", photo);
        fragments.insert("PERSONAL_INFO", self.personal_info(record));
        fragments.insert("SIDEBAR_NAME", self.options.sidebar_name.clone());
        fragments.insert("WORK_EXPERIENCE", self.work_experience(record));
        fragments.insert("EDUCATION", self.education(record));
        fragments
    }

    /// Contact lines for `\personalinfo{}`. Networks other than LinkedIn
    /// and GitHub have no AltaCV field and are dropped.
    pub fn personal_info(&self, record: &ResumeRecord) -> String {
        let basics = &record.basics;
        let mut latex = String::new();

        if !basics.email.is_empty() {
            latex.push_str(&format!("  \\email{{{}}}\n", escape_latex(&basics.email)));
        }
        if !basics.url.is_empty() {
            latex.push_str(&format!(
                "  \\homepage{{{}}}\n",
                escape_latex(shorten_url(&basics.url))
            ));
        }

        for profile in filter_visible(&basics.profiles, Channel::Pdf) {
            let username = escape_latex(&profile.username);
            if profile.is_linkedin() {
                latex.push_str(&format!("  \\linkedin{{{}}}\n", username));
            } else if profile.is_github() {
                latex.push_str(&format!("  \\github{{{}}}\n", username));
            }
        }

        latex
    }

    /// Work experience section body.
    pub fn work_experience(&self, record: &ResumeRecord) -> String {
        let entries = filter_visible(&record.work, Channel::Pdf);
        log::debug!("LaTeX: {} work entries", entries.len());

        if entries.is_empty() {
            return "% No work experience entries for PDF\n".to_string();
        }

        entries
            .iter()
            .map(|work| self.work_entry(work))
            .collect::<Vec<_>>()
            .join(DIVIDER)
    }

    fn work_entry(&self, work: &WorkEntry) -> String {
        let range = format_date_range(
            Some(work.start_date.as_str()),
            work.end_date.as_deref(),
            RANGE_SEPARATOR,
            DateStyle::Long,
        );

        let mut latex = String::new();
        latex.push_str(&format!("\\cvevent{{{}}}\n", escape_latex(&work.position)));
        latex.push_str(&format!("{{{}}}\n", escape_latex(&work.name)));
        latex.push_str(&format!(
            "{{{}}}{{{}}}\n\n",
            escape_latex(&range),
            escape_latex(&work.location)
        ));
        latex.push_str(&format!("{}\n\n", escape_latex(&work.summary)));

        if !work.technologies.is_empty() {
            latex.push_str("\\medskip{}\n\n");
            latex.push_str(&format!("Skills: {}\n", bold_list(&work.technologies)));
        }

        latex
    }

    /// Education section body.
    pub fn education(&self, record: &ResumeRecord) -> String {
        let entries = filter_visible(&record.education, Channel::Pdf);
        log::debug!("LaTeX: {} education entries", entries.len());

        if entries.is_empty() {
            return "% No education entries for PDF\n".to_string();
        }

        entries
            .iter()
            .map(|edu| self.education_entry(edu))
            .collect::<Vec<_>>()
            .join(DIVIDER)
    }

    fn education_entry(&self, edu: &EducationEntry) -> String {
        let degree = escape_latex(&format!("{} ({})", edu.study_type, edu.area));
        let range = format_date_range(
            Some(edu.start_date.as_str()),
            edu.end_date.as_deref(),
            RANGE_SEPARATOR,
            DateStyle::Long,
        );
        let location = edu
            .url
            .as_deref()
            .map(|url| escape_latex(shorten_url(url)))
            .unwrap_or_default();

        let mut latex = String::new();
        latex.push_str(&format!("\\cvevent{{{}}}\n", degree));
        latex.push_str(&format!("{{{}}}\n", escape_latex(&edu.institution)));
        latex.push_str(&format!("{{{}}}{{{}}}\n\n", escape_latex(&range), location));
        latex.push_str(&format!("{}\n\n", escape_latex(&edu.summary)));

        let courses: Vec<String> = edu
            .courses
            .iter()
            .take(self.options.max_courses)
            .cloned()
            .collect();
        if !courses.is_empty() {
            latex.push_str("\\medskip{}\n\n");
            latex.push_str(&format!("Subjects: {}\n", bold_list(&courses)));
        }

        latex
    }

    /// Sidebar contents (`page1sidebar.tex`).
    pub fn sidebar(&self, record: &ResumeRecord) -> String {
        let mut latex = String::new();
        latex.push_str("% AUTO-GENERATED SIDEBAR - DO NOT EDIT\n");
        latex.push_str(&format!(
            "% Run \"{}\" to regenerate\n\n",
            self.options.regenerate_hint
        ));

        self.render_contact(&mut latex, record);
        self.render_awards(&mut latex, record);
        self.render_skills(&mut latex, record);
        self.render_languages(&mut latex, record);

        latex.push_str("\n\\clearpage\n");
        latex
    }

    fn render_contact(&self, output: &mut String, record: &ResumeRecord) {
        let basics = &record.basics;
        output.push_str("\\cvsection{Contact}\n\n");

        if !basics.phone.is_empty() {
            output.push_str(&achievement("\\faPhone", "Phone", &escape_latex(&basics.phone)));
        }
        if !basics.email.is_empty() {
            output.push_str(&achievement("\\faAt", "Mail", &escape_latex(&basics.email)));
        }
        let address = basics.location.city_region();
        if !address.is_empty() {
            output.push_str(&achievement("\\faMapPin", "Address", &escape_latex(&address)));
        }

        output.push_str(DIVIDER);

        for profile in filter_visible(&basics.profiles, Channel::Pdf) {
            if let Some(line) = social_line(profile) {
                output.push_str(&line);
            }
        }

        if !basics.url.is_empty() {
            let url = escape_latex(shorten_url(&basics.url));
            output.push_str(&achievement(
                "\\faLink",
                "Webpage",
                &format!("\\url{{{}}}", url),
            ));
        }
    }

    fn render_awards(&self, output: &mut String, record: &ResumeRecord) {
        let awards = filter_visible(&record.awards, Channel::Pdf);
        if awards.is_empty() {
            return;
        }

        output.push_str("\n\\cvsection{Awards}\n\n");
        let blocks: Vec<String> = awards
            .iter()
            .map(|award| {
                achievement(
                    "\\faBook",
                    &escape_latex(&award.title),
                    &escape_latex(&award.awarder),
                )
            })
            .collect();
        output.push_str(&blocks.join(DIVIDER));
    }

    fn render_skills(&self, output: &mut String, record: &ResumeRecord) {
        let skills = filter_visible(&record.skills, Channel::Pdf);
        if skills.is_empty() {
            return;
        }

        output.push_str("\n\\cvsection{Skills}\n\n");
        let blocks: Vec<String> = skills.iter().map(|category| skill_block(category)).collect();
        output.push_str(&blocks.join(DIVIDER));
    }

    fn render_languages(&self, output: &mut String, record: &ResumeRecord) {
        let languages = filter_visible(&record.languages, Channel::Pdf);
        if languages.is_empty() {
            return;
        }

        output.push_str("\n\\cvsection{Languages}\n\n");
        let blocks: Vec<String> = languages
            .iter()
            .map(|lang| {
                format!(
                    "\\cvskill{{{}}}{{{}}}\n{}\n",
                    escape_latex(&lang.language),
                    fluency_level(&lang.fluency),
                    escape_latex(&lang.fluency)
                )
            })
            .collect();
        output.push_str(&blocks.join("\\divider\n\n"));
    }
}

/// `\textbf{a}, \textbf{b}, ...`
fn bold_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\\textbf{{{}}}", escape_latex(item)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn achievement(icon: &str, title: &str, body: &str) -> String {
    format!("\\cvachievement{{{}}}{{{}}}{{{}}}\n", icon, title, body)
}

fn social_line(profile: &Profile) -> Option<String> {
    let url = format!("\\url{{{}}}", escape_latex(shorten_url(&profile.url)));
    if profile.is_github() {
        Some(achievement("\\faGithub", "GitHub", &url))
    } else if profile.is_linkedin() {
        Some(achievement("\\faLinkedin", "LinkedIn", &url))
    } else {
        None
    }
}

fn skill_block(category: &SkillCategory) -> String {
    let mut latex = format!("{}:\n\n\\medskip{{}}\n\n", escape_latex(&category.name));
    for keyword in &category.keywords {
        latex.push_str(&format!("\\cvtag{{{}}}\n", escape_latex(keyword)));
    }
    latex
}
