// korjain-distance: Print edit distances between word pairs.
//
// Arguments are read in pairs. For each pair prints the Levenshtein,
// optimal string alignment and Damerau-Levenshtein distances:
//   ca ac: levenshtein=2 osa=1 damerau=1
//
// Usage:
//   korjain-distance WORD WORD [WORD WORD...]

use std::io::{self, Write};

use korjain_distance::{EditDistance, Metric};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbosity, args) = korjain_cli::parse_verbosity(&args);

    if korjain_cli::wants_help(&args) || args.is_empty() {
        println!("korjain-distance: Print edit distances between word pairs.");
        println!();
        println!("Usage: korjain-distance WORD WORD [WORD WORD...]");
        println!();
        println!("Options:");
        println!("  -v, --verbose   More log output (repeat for more)");
        println!("  -h, --help      Print this help");
        return;
    }

    korjain_cli::init_logging(verbosity);

    if args.len() % 2 != 0 {
        korjain_cli::fatal("expected an even number of words");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for pair in args.chunks(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let _ = write!(out, "{a} {b}:");
        for metric in Metric::ALL {
            let _ = write!(out, " {metric}={}", metric.distance_str(a, b));
        }
        let _ = writeln!(out);
    }
}
