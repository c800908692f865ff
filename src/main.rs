use clap::Parser;
use mdpage::output::Reporter;
use mdpage::request::{ConversionRequest, Source};
use mdpage::{convert, request};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdpage")]
#[command(about = "Convert GitHub Flavored Markdown to styled HTML pages")]
#[command(long_about = "\
Convert GitHub Flavored Markdown to styled HTML pages

Renders fenced code blocks with inline-style syntax highlighting, tables,
strikethrough and task lists, and wraps the result in a standalone page
linking the cached github-markdown.css stylesheet.

Pass a single file:

  mdpage README.md -o readme.html
  mdpage README.md --preview --interval 2

or convert a whole tree, mirroring its layout under --out:

  mdpage --dir docs --out site
  mdpage --dir docs --out site --navigation

With --navigation, every document containing a literal '### Project Links'
heading has it replaced by a generated list linking all converted pages.

The stylesheet is downloaded once into the user cache directory and reused;
--force refreshes it. A failed download degrades styling but never aborts
a run.")]
#[command(version)]
struct Cli {
    /// Markdown file to convert
    file: Option<PathBuf>,

    /// Convert every .md file under this directory instead
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Output file, or output root in --dir mode
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Re-download the cached stylesheet
    #[arg(short, long)]
    force: bool,

    /// Open each generated page in the browser
    #[arg(short, long)]
    preview: bool,

    /// Refresh generated pages every <SECONDS> seconds
    #[arg(short, long, value_name = "SECONDS")]
    interval: Option<NonZeroU32>,

    /// Generate navigation links between converted documents
    #[arg(short, long)]
    navigation: bool,

    /// Show less information
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new(cli.quiet);

    let request = match build_request(cli) {
        Ok(request) => request,
        Err(err) => {
            reporter.error(err.to_string());
            return ExitCode::FAILURE;
        }
    };

    match convert::run(&request, &reporter) {
        Ok(summary) => {
            if summary.all_succeeded() {
                if summary.converted > 1 {
                    reporter.info(format!("Converted {} files", summary.converted));
                }
                ExitCode::SUCCESS
            } else {
                reporter.error(format!(
                    "{} of {} files failed",
                    summary.failed.len(),
                    summary.converted + summary.failed.len()
                ));
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            reporter.error(err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn build_request(cli: Cli) -> Result<ConversionRequest, request::RequestError> {
    let source = Source::resolve(cli.file, cli.dir)?;
    Ok(ConversionRequest {
        source,
        output: cli.out,
        force: cli.force,
        preview: cli.preview,
        refresh: cli.interval,
        navigation: cli.navigation,
        quiet: cli.quiet,
    })
}
