//! panelvp CLI - comic panel metadata to reader viewports

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use panelvp::{parse_file, render, ConvertOptions, Converter, JsonFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "panelvp")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert comic panel metadata to normalized reader viewports", long_about = None)]
struct Cli {
    /// Input metadata JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Emit reader meta.json (page sizes, direction, viewpoints)
    #[arg(long)]
    meta: bool,

    /// Keep single full-page viewports instead of writing null
    #[arg(long)]
    keep_full_pages: bool,

    /// Print conversion statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    // Missing or invalid arguments exit with status 2 from clap.
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = cmd_convert(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(&cli.input)?;

    let options = ConvertOptions::new()
        .with_omit_full_page(!cli.keep_full_pages)
        .with_format(if cli.meta {
            OutputFormat::ReaderMeta
        } else {
            OutputFormat::Viewports
        })
        .with_json_format(if cli.pretty {
            JsonFormat::Pretty
        } else {
            JsonFormat::Compact
        });

    let result = Converter::new(options.clone()).convert(&doc)?;
    let json = render::render(&result, &options)?;

    if cli.stats {
        print_stats(&cli.input, &result);
    }

    write_output(cli.output.as_deref(), &json)
}

fn write_output(output: Option<&Path>, json: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, format!("{}\n", json))?;
        log::info!("Saved to {}", path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn print_stats(input: &Path, result: &panelvp::ConvertResult) {
    let stats = &result.stats;

    eprintln!("{}", "Conversion Summary".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "File".bold(), input.display());
    eprintln!(
        "{}: {}",
        "Direction".bold(),
        if result.right_to_left {
            "right to left"
        } else {
            "left to right"
        }
    );
    eprintln!("{}: {}", "Pages".bold(), stats.page_count);
    eprintln!("{}: {}", "Viewports".bold(), stats.viewport_count);
    eprintln!("{}: {}", "Compacted pages".bold(), stats.omitted_pages);
    eprintln!("{}: {}", "Skipped pages".bold(), stats.skipped_pages);
    eprintln!("{}: {}", "Preview pages".bold(), stats.preview_pages);
    eprintln!("{}: {}", "Diagnostics".bold(), result.diagnostics.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Cli::try_parse_from(["panelvp"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["panelvp", "--meta", "--pretty", "book.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("book.json"));
        assert!(cli.meta);
        assert!(cli.pretty);
        assert!(!cli.keep_full_pages);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("book.json");
        let output = dir.path().join("out.json");
        fs::write(
            &input,
            r#"{"id": 1, "page_count": 1, "is_rtl": false, "viewport_count": 1,
                "pages": [{"id": 2, "book_id": 1, "sort_order": 1, "skip": false,
                "is_preview": false, "width": 1000, "height": 500,
                "viewports": [{"id": 3, "page_id": 2, "sort_order": 1,
                "pos_x": 100, "pos_y": 50, "width": 200, "height": 100}]}]}"#,
        )
        .unwrap();

        let args: Vec<OsString> = vec![
            "panelvp".into(),
            input.into_os_string(),
            "-o".into(),
            output.clone().into_os_string(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        cmd_convert(&cli).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written.trim_end(), r#"[[{"X":0.1,"Y":0.1,"W":0.2,"H":0.2}]]"#);
    }
}
