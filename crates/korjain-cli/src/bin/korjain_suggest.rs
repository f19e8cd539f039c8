// korjain-suggest: Generate spelling suggestions.
//
// For each misspelled word prints the known words one edit away. When no
// such word exists, falls back to the closest dictionary words under the
// chosen metric. Known words are printed as-is.
//
// Usage:
//   korjain-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word list file or directory containing words.txt
//   -m, --metric NAME        levenshtein, osa or damerau (default: damerau)
//   -n, --max-suggestions N  Maximum number of fallback suggestions (default: 5)
//   -v, --verbose            More log output
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use korjain_distance::Metric;
use korjain_speller::{SpellCheckEngine, WordList};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = korjain_cli::parse_dict_path(&args);
    let (verbosity, args) = korjain_cli::parse_verbosity(&args);

    if korjain_cli::wants_help(&args) {
        println!("korjain-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: korjain-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word list file or directory containing words.txt");
        println!("  -m, --metric NAME        levenshtein, osa or damerau (default: damerau)");
        println!("  -n, --max-suggestions N  Maximum number of fallback suggestions (default: 5)");
        println!("  -v, --verbose            More log output (repeat for more)");
        println!("  -h, --help               Print this help");
        return;
    }

    korjain_cli::init_logging(verbosity);

    let mut max_suggestions: usize = 5;
    let mut metric = Metric::default();
    let mut inputs: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--max-suggestions" => {
                let Some(value) = iter.next() else {
                    korjain_cli::fatal("--max-suggestions requires a value");
                };
                max_suggestions = value
                    .parse()
                    .unwrap_or_else(|_| korjain_cli::fatal("invalid number for --max-suggestions"));
            }
            "-m" | "--metric" => {
                let Some(value) = iter.next() else {
                    korjain_cli::fatal("--metric requires a value");
                };
                metric = value
                    .parse()
                    .unwrap_or_else(|e| korjain_cli::fatal(&format!("{e}")));
            }
            other if !other.starts_with('-') => inputs.push(other.to_string()),
            _ => {}
        }
    }

    let words = korjain_cli::load_word_list(dict_path.as_deref())
        .unwrap_or_else(|e| korjain_cli::fatal(&e));
    let mut engine = SpellCheckEngine::new(&words, &words);
    engine.set_metric(metric);
    engine.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(&engine, word, &mut out);
        }
    } else {
        for word in &inputs {
            suggest_word(&engine, word, &mut out);
        }
    }
}

fn suggest_word(engine: &SpellCheckEngine<'_>, word: &str, out: &mut impl Write) {
    let word = WordList::normalize(word);
    if engine.is_known(&word) {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }

    let one_edit = match engine.suggest(&word) {
        Ok(candidates) => candidates.into_sorted_vec(),
        Err(e) => {
            let _ = writeln!(out, "{word}: {e}");
            return;
        }
    };

    if !one_edit.is_empty() {
        let _ = writeln!(out, "{word}:");
        for s in &one_edit {
            let _ = writeln!(out, "  {s} (1)");
        }
        return;
    }

    let closest = engine.closest(&word);
    if closest.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}: (closest by {})", engine.options().metric);
        for ranked in &closest {
            let _ = writeln!(out, "  {} ({})", ranked.word, ranked.distance);
        }
    }
}
