//! tailwind-sorter - sort Tailwind classes in source files
//!
//! Reads files (or stdin) and rewrites class strings into canonical order.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use tailwind_sorter::error::{Result, SorterError};
use tailwind_sorter::language::LanguageMap;
use tailwind_sorter::{SortConfig, Sorter};

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    /// Report files that would change instead of writing them
    check: bool,
    /// Print sorted output instead of writing files
    stdout: bool,
    /// Explicit configuration file
    config: Option<PathBuf>,
    /// Files to sort; stdin when empty
    files: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Help,
    Version,
    Sort(Options),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns `false` when `--check` found unsorted input
fn run() -> Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args)? {
        Action::Help => {
            print_usage();
            return Ok(true);
        }
        Action::Version => {
            print_version();
            return Ok(true);
        }
        Action::Sort(options) => options,
    };

    let config = match &options.config {
        Some(path) => SortConfig::load(path)?,
        None => SortConfig::discover(&env::current_dir()?)?,
    };
    let sorter = Sorter::new(&config);

    if options.files.is_empty() {
        sort_stdin(&sorter, &options)
    } else {
        sort_files(&sorter, &options)
    }
}

fn parse_args(args: &[String]) -> Result<Action> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Action::Help),
            "--version" | "-V" => return Ok(Action::Version),
            "--check" => options.check = true,
            "--stdout" => options.stdout = true,
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| {
                    SorterError::Message(format!("{} requires a path", arg))
                })?;
                options.config = Some(PathBuf::from(path));
            }
            "--" => {
                options.files.extend(iter.by_ref().map(PathBuf::from));
            }
            _ if arg.starts_with("--config=") => {
                options.config = Some(PathBuf::from(&arg["--config=".len()..]));
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(SorterError::Message(format!("Unknown option: {}", arg)));
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    Ok(Action::Sort(options))
}

fn sort_stdin(sorter: &Sorter, options: &Options) -> Result<bool> {
    sort_stream(sorter, options, io::stdin().lock(), io::stdout().lock())
}

/// Sort `input` into `output`; in check mode only report
fn sort_stream(
    sorter: &Sorter,
    options: &Options,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<bool> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let sorted = sorter.sort(&text);

    if options.check {
        if sorted != text {
            writeln!(output, "<stdin> is not sorted")?;
            return Ok(false);
        }
        return Ok(true);
    }

    output.write_all(sorted.as_bytes())?;
    Ok(true)
}

fn sort_files(sorter: &Sorter, options: &Options) -> Result<bool> {
    let languages = LanguageMap::new();
    let mut clean = true;

    for path in &options.files {
        let Some(language) = languages.detect_language(path) else {
            tracing::warn!(path = %path.display(), "unknown file type, skipped");
            continue;
        };

        let input = fs::read_to_string(path)?;
        let output = sorter.sort(&input);
        let changed = output != input;
        tracing::debug!(path = %path.display(), language, changed, "sorted file");

        if options.check {
            if changed {
                println!("{} is not sorted", path.display());
                clean = false;
            }
        } else if options.stdout {
            io::stdout().write_all(output.as_bytes())?;
        } else if changed {
            fs::write(path, output)?;
            println!("Sorted {}", path.display());
        }
    }

    Ok(clean)
}

fn print_usage() {
    println!(
        "tailwind-sorter {} - sort Tailwind classes in source files",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: tailwind-sorter [OPTIONS] [FILE]...");
    println!();
    println!("Reads stdin and writes stdout when no FILE is given.");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Use this configuration file");
    println!("      --check          Exit with status 1 if anything would change");
    println!("      --stdout         Print sorted files instead of rewriting them");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Configuration is read from the nearest tailwind-sorter.toml,");
    println!("then ~/.tailwind-sorter.toml. Set RUST_LOG=debug for diagnostics.");
}

fn print_version() {
    println!("tailwind-sorter {}", env!("CARGO_PKG_VERSION"));
}
