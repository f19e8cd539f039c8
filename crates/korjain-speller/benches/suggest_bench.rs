// Criterion benchmarks for korjain-speller.
//
// Uses the integration-test word list under tests/data.
//
// Run:
//   cargo bench -p korjain-speller

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use korjain_core::Alphabet;
use korjain_speller::{SpellCheckEngine, WordList, one_edit_candidates};

fn load_words() -> WordList {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.txt");
    WordList::from_path(&path).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_candidates(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let word: Vec<char> = "spelling".chars().collect();
    c.bench_function("one_edit_candidates/spelling", |b| {
        b.iter(|| one_edit_candidates(std::hint::black_box(&word), &alphabet))
    });
}

fn bench_suggest(c: &mut Criterion) {
    let words = load_words();
    let engine = SpellCheckEngine::new(&words, &words);
    let inputs = ["speling", "qiuck", "wrld", "helo", "xyzzy"];
    c.bench_function("suggest/5 words", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = engine.suggest(std::hint::black_box(input));
            }
        })
    });
}

fn bench_closest(c: &mut Criterion) {
    let words = load_words();
    let engine = SpellCheckEngine::new(&words, &words);
    c.bench_function("closest/chekcr", |b| {
        b.iter(|| engine.closest(std::hint::black_box("chekcr")))
    });
}

fn bench_check_text(c: &mut Criterion) {
    let words = load_words();
    let engine = SpellCheckEngine::new(&words, &words);
    let text = "The qiuck brown fox jumps ovre the lazy dog.";
    c.bench_function("check_text/sentence", |b| {
        b.iter(|| engine.check_text(std::hint::black_box(text)))
    });
}

criterion_group!(
    benches,
    bench_candidates,
    bench_suggest,
    bench_closest,
    bench_check_text
);
criterion_main!(benches);
