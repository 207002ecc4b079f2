//! vitae CLI - résumé rendering tool

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use vitae::{
    load_file, write_result, Channel, GenerateOptions, GeneratorRegistry, HtmlOptions,
    LatexOptions, MarkdownOptions, ResumeRecord,
};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author = "vitae contributors")]
#[command(version)]
#[command(about = "Render a JSON résumé into a LaTeX CV, a static website, and a README", long_about = None)]
struct Cli {
    /// Résumé JSON file
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "VITAE_RESUME",
        default_value = "resume.json"
    )]
    resume: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the LaTeX CV (pdf channel)
    #[command(alias = "pdf")]
    Cv {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "cv/output")]
        output: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate the static website
    Website {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "website/output")]
        output: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate README.md
    Readme {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate every channel
    All {
        /// CV output directory
        #[arg(long, value_name = "DIR", default_value = "cv/output")]
        cv_output: PathBuf,

        /// Website output directory
        #[arg(long, value_name = "DIR", default_value = "website/output")]
        website_output: PathBuf,

        /// README output directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        readme_output: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Show résumé information and per-channel entry counts
    Info {
        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Directory holding altacv.cls and picture.jpg
    #[arg(long, value_name = "DIR", default_value = "cv/template")]
    cv_template_dir: PathBuf,

    /// Website template directory (bundled template if not set)
    #[arg(long, value_name = "DIR")]
    website_template_dir: Option<PathBuf>,

    /// Profile picture copied next to the website
    #[arg(long, value_name = "FILE", default_value = "picture.jpg")]
    picture: PathBuf,

    /// Embed the sidebar in cv.tex instead of writing page1sidebar.tex
    #[arg(long)]
    no_sidebar: bool,

    /// Maximum courses listed per education entry
    #[arg(long, default_value = "4")]
    max_courses: usize,

    /// Omit the SEO keywords and JSON-LD block
    #[arg(long)]
    no_seo: bool,

    /// Canonical site URL
    #[arg(long, env = "VITAE_SITE_URL", default_value = "")]
    site_url: String,

    /// Country code used when the résumé has none
    #[arg(long, value_name = "CODE", default_value = "")]
    country_code: String,

    /// GitHub username used when the résumé has no GitHub profile
    #[arg(long, value_name = "USER")]
    github_user: Option<String>,

    /// Sitemap date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE", value_parser = parse_build_date)]
    build_date: Option<NaiveDate>,

    /// Do not escape Markdown characters in the README
    #[arg(long)]
    no_escape: bool,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        let latex = LatexOptions::new()
            .with_split_sidebar(!self.no_sidebar)
            .with_max_courses(self.max_courses);

        let mut html = HtmlOptions::new()
            .with_seo(!self.no_seo)
            .with_site_url(self.site_url.as_str())
            .with_default_country_code(self.country_code.as_str());
        if let Some(user) = &self.github_user {
            html = html.with_fallback_github_username(user.as_str());
        }
        if let Some(date) = self.build_date {
            html = html.with_build_date(date);
        }

        let markdown = MarkdownOptions::new().with_escaping(!self.no_escape);

        let mut options = GenerateOptions::new()
            .with_latex_options(latex)
            .with_html_options(html)
            .with_markdown_options(markdown)
            .with_cv_template_dir(&self.cv_template_dir)
            .with_picture(&self.picture);
        if let Some(dir) = &self.website_template_dir {
            options = options.with_website_template_dir(dir);
        }
        options
    }
}

fn parse_build_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Cv { output, args }) => {
            cmd_generate(&cli.resume, Channel::Pdf, &output, &args)
        }
        Some(Commands::Website { output, args }) => {
            cmd_generate(&cli.resume, Channel::Website, &output, &args)
        }
        Some(Commands::Readme { output, args }) => {
            cmd_generate(&cli.resume, Channel::Readme, &output, &args)
        }
        Some(Commands::All {
            cv_output,
            website_output,
            readme_output,
            args,
        }) => cmd_all(
            &cli.resume,
            [
                (Channel::Pdf, cv_output),
                (Channel::Website, website_output),
                (Channel::Readme, readme_output),
            ],
            &args,
        ),
        Some(Commands::Info { json }) => cmd_info(&cli.resume, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: vitae <COMMAND> [--resume FILE]".yellow());
            println!("       vitae --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Render one channel and write its files below `output`.
fn generate_channel(
    record: &ResumeRecord,
    channel: Channel,
    output: &Path,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let registry = GeneratorRegistry::with_defaults();
    let result = registry.generate(channel.as_str(), record, options)?;
    Ok(write_result(&result, output)?)
}

fn cmd_generate(
    resume: &Path,
    channel: Channel,
    output: &Path,
    args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_file(resume)?;
    log::debug!("Loaded résumé from {}", resume.display());
    let written = generate_channel(&record, channel, output, &args.options())?;

    println!(
        "{} {} ({})",
        "Generated".green().bold(),
        channel,
        output.display()
    );
    print_files(&written, output);

    Ok(())
}

fn cmd_all(
    resume: &Path,
    targets: [(Channel, PathBuf); 3],
    args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_file(resume)?;
    let options = args.options();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut summary = Vec::new();
    for (channel, output) in &targets {
        pb.set_message(format!("Generating {}...", channel));
        let written = generate_channel(&record, *channel, output, &options)?;
        summary.push((*channel, output, written));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    for (channel, output, written) in summary {
        println!(
            "\n{} {}",
            format!("{}:", channel).green().bold(),
            output.display()
        );
        print_files(&written, output);
    }

    Ok(())
}

fn print_files(written: &[PathBuf], output: &Path) {
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        let name = path.strip_prefix(output).unwrap_or(path);
        println!("  {} {}", branch.dimmed(), name.display());
    }
}

fn cmd_info(resume: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_file(resume)?;

    if json {
        let counts: serde_json::Map<String, serde_json::Value> = Channel::ALL
            .iter()
            .map(|channel| {
                let counts = record.visible_counts(channel.as_str());
                serde_json::to_value(counts).map(|value| (channel.to_string(), value))
            })
            .collect::<Result<_, serde_json::Error>>()?;
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let basics = &record.basics;
    println!("{}", "Résumé Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), resume.display());
    println!("{}: {}", "Name".bold(), basics.name);
    if !basics.label.is_empty() {
        println!("{}: {}", "Label".bold(), basics.label);
    }
    let location = basics.location.city_region();
    if !location.is_empty() {
        println!("{}: {}", "Location".bold(), location);
    }
    if let Some(username) = record.github_username() {
        println!("{}: {}", "GitHub".bold(), username);
    }

    println!();
    println!("{}", "Visible Entries".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{:<10} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "Channel",
        "Work",
        "Edu",
        "Skill",
        "Lang",
        "Award",
        "Link"
    );

    for channel in Channel::ALL {
        let counts = record.visible_counts(channel.as_str());
        println!(
            "{:<10} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
            channel.as_str(),
            counts.work,
            counts.education,
            counts.skills,
            counts.languages,
            counts.awards,
            counts.profiles
        );
    }

    let hidden = hidden_entries(&record);
    if hidden > 0 {
        println!();
        println!(
            "{} {} entries are not visible in any channel",
            "Note:".yellow(),
            hidden
        );
    }

    Ok(())
}

/// Entries whose visibility set names no built-in channel.
fn hidden_entries(record: &ResumeRecord) -> usize {
    use vitae::Visible;

    fn count<E: Visible>(entries: &[E]) -> usize {
        entries
            .iter()
            .filter(|e| !Channel::ALL.iter().any(|c| e.is_visible_in(c.as_str())))
            .count()
    }

    count(&record.work)
        + count(&record.education)
        + count(&record.skills)
        + count(&record.languages)
        + count(&record.awards)
        + count(&record.basics.profiles)
}

fn cmd_version() {
    println!("{} {}", "vitae".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("JSON résumé to LaTeX CV, website, and README");
    println!();
    println!("License: MIT");
}
