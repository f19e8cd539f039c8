// korjain-spell: Check spelling of words.
//
// Checks each WORD argument, or words from stdin (one per line) when none
// are given, and prints:
//   word: ok
//   word: unknown
//
// Usage:
//   korjain-spell [-d DICT_PATH] [-v] [WORD...]

use std::io::{self, BufRead, Write};

use korjain_speller::{SpellCheckEngine, WordList};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = korjain_cli::parse_dict_path(&args);
    let (verbosity, args) = korjain_cli::parse_verbosity(&args);

    if korjain_cli::wants_help(&args) {
        println!("korjain-spell: Check spelling of words.");
        println!();
        println!("Usage: korjain-spell [-d DICT_PATH] [-v] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  word: ok       (known)");
        println!("  word: unknown  (not in the word list)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word list file or directory containing words.txt");
        println!("  -v, --verbose          More log output (repeat for more)");
        println!("  -h, --help             Print this help");
        return;
    }

    korjain_cli::init_logging(verbosity);

    let words = korjain_cli::load_word_list(dict_path.as_deref())
        .unwrap_or_else(|e| korjain_cli::fatal(&e));
    let engine = SpellCheckEngine::new(&words, &words);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let inputs: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();
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
            check_word(&engine, word, &mut out);
        }
    } else {
        for word in &inputs {
            check_word(&engine, word, &mut out);
        }
    }
}

fn check_word(engine: &SpellCheckEngine<'_>, word: &str, out: &mut impl Write) {
    let word = WordList::normalize(word);
    let status = if engine.is_known(&word) { "ok" } else { "unknown" };
    let _ = writeln!(out, "{word}: {status}");
}
