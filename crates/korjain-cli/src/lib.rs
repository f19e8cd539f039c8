// korjain-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use env_logger::Builder;
use korjain_speller::WordList;
use log::{LevelFilter, debug};

/// Word list file name looked up in each search directory.
const WORDS_FILE: &str = "words.txt";

/// Environment variable naming a word list file or a directory holding one.
const DICT_PATH_VAR: &str = "KORJAIN_DICT_PATH";

/// Environment variable with an `env_logger` filter spec, e.g. `debug`.
const LOG_VAR: &str = "KORJAIN_LOG";

/// Search for a word list and load it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `KORJAIN_DICT_PATH` environment variable
/// 3. `~/.korjain/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current working directory
///
/// Each entry may name the file itself or a directory containing `words.txt`.
pub fn load_word_list(dict_path: Option<&str>) -> Result<WordList, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(file) = resolve_word_file(candidate) else {
            continue;
        };
        let words = WordList::from_path(&file).map_err(|e| e.to_string())?;
        debug!("loaded {} words from {}", words.len(), file.display());
        return Ok(words);
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn resolve_word_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let nested = path.join(WORDS_FILE);
    nested.is_file().then_some(nested)
}

/// Build the list of locations to search for a word list.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_VAR) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".korjain").join(WORDS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match iter.next() {
                Some(val) => dict_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Count `-v` / `--verbose` flags (`-vv` counts twice).
///
/// Returns `(verbosity, remaining_args)`.
pub fn parse_verbosity(args: &[String]) -> (u8, Vec<String>) {
    let mut verbosity: u8 = 0;
    let mut remaining = Vec::new();

    for arg in args {
        if arg == "--verbose" {
            verbosity = verbosity.saturating_add(1);
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') {
            let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
            verbosity = verbosity.saturating_add(count);
        } else {
            remaining.push(arg.clone());
        }
    }

    (verbosity, remaining)
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Set up the logger. `KORJAIN_LOG` overrides the level derived from `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Ok(spec) = std::env::var(LOG_VAR) {
        builder.parse_filters(&spec);
    }
    // A logger may already be installed when called twice.
    let _ = builder.try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
