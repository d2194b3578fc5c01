use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

mod document;
mod error;
mod insert;
mod report;
mod scan;
mod slug;

use document::{load_document, save_document, DEFAULT_PATH};
use error::SlugError;
use insert::insert_all;
use scan::extract_categories;
use slug::{is_reserved, SlugStyle};

const USAGE: &str = "\
Usage: category-slug [OPTIONS] [PATH]

Insert a categorySlug field after every `category: '<label>',` line that is
directly followed by a `price:` line.

Arguments:
  [PATH]  File to rewrite (default: data/products.ts)

Options:
      --slug-style <raw|kebab>  How slugs are derived from labels (default: raw)
  -n, --dry-run                 Report what would change without writing
  -h, --help                    Print this help";

#[derive(Debug, PartialEq, Eq)]
struct Options {
    path: PathBuf,
    style: SlugStyle,
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = match parse_args(env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{} {}", report::TAG, e);
            eprintln!("{}", USAGE);
            return ExitCode::from(e.exit_code());
        }
    };
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report::failure(&e));
            ExitCode::from(exit_code_of(&e))
        }
    }
}

fn run(opts: &Options) -> Result<()> {
    let path = opts.path.as_path();
    let content = load_document(path).with_context(|| "Loading product records")?;
    log::debug!("loaded {} bytes from {}", content.len(), path.display());

    let labels = extract_categories(&content);
    println!("{}", report::categories_found(&labels));

    let (content, insertions) =
        insert_all(content, &labels, opts.style).with_context(|| "Inserting category slugs")?;
    for ins in &insertions {
        println!("{}", report::added(ins));
        if is_reserved(&ins.slug) {
            eprintln!("{}", report::reserved_warning(ins));
        }
    }

    if opts.dry_run {
        println!("{}", report::dry_run(path));
        return Ok(());
    }
    save_document(path, &content).with_context(|| "Saving product records")?;
    println!("{}", report::updated(path));
    Ok(())
}

// Context layers wrap the domain error; the innermost `SlugError` decides.
fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SlugError>().map(SlugError::exit_code).unwrap_or(1)
}

// Ok(None) means help was requested.
fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Option<Options>, SlugError> {
    let mut path: Option<PathBuf> = None;
    let mut style = SlugStyle::default();
    let mut dry_run = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-n" | "--dry-run" => dry_run = true,
            "--slug-style" => {
                let val = args
                    .next()
                    .ok_or_else(|| SlugError::Usage("Missing value for --slug-style".into()))?;
                style = val.parse()?;
            }
            s if s.starts_with("--slug-style=") => {
                style = s["--slug-style=".len()..].parse()?;
            }
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(SlugError::Usage(format!("Unknown option: {}", s)));
            }
            s => {
                if path.is_some() {
                    return Err(SlugError::Usage(format!("Unexpected argument: {}", s)));
                }
                path = Some(PathBuf::from(s));
            }
        }
    }

    Ok(Some(Options {
        path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)),
        style,
        dry_run,
    }))
}
