/*! Regression testing for segmentation resources

Segments each input of a gold file and compares the words with the expected
segmentation. Can be used in automated scripts to cap the amount of changes
after a dictionary or model update.

# Usage examples

It's a command-line tool:
```console
$ cargo run -- --dict dict/ --cases gold.tsv --threshold 0.05
```
will expect fewer than 5 % of the cases in `gold.tsv` to segment differently.
Each line of the gold file is `input<TAB>expected words separated by spaces`;
lines starting with `#` are ignored.
*/

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use hanseg::types::Mode;
use hanseg::Segmenter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "DICTDIR")]
    dict: PathBuf,
    #[arg(short, long, value_name = "CASEFILE")]
    cases: PathBuf,
    #[arg(short, long, value_name = "THOLD")]
    threshold: f32,
    #[arg(short, long)]
    index: bool,
}

type Case = (String, Vec<String>);

/// Reads the gold file. Rows that fail to parse or lack an expected column are
/// counted and returned alongside the cases.
fn load_cases<R: std::io::Read>(reader: R) -> (Vec<Case>, usize) {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut cases = vec![];
    let mut skipped = 0;
    for (i, record) in rdr.records().enumerate() {
        match record {
            Ok(r) => match (r.get(0), r.get(1)) {
                (Some(input), Some(expected)) => cases.push((
                    input.to_string(),
                    expected.split_whitespace().map(str::to_string).collect(),
                )),
                _ => {
                    eprintln!("SKIPPED: record {} has no expected segmentation", i + 1);
                    skipped += 1;
                }
            },
            Err(e) => {
                eprintln!("SKIPPED: record {}: {}", i + 1, e);
                skipped += 1;
            }
        }
    }
    (cases, skipped)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let segmenter = Segmenter::from_dir(&cli.dict)?;
    let mode = if cli.index { Mode::Index } else { Mode::Search };
    let (cases, skipped) = load_cases(File::open(&cli.cases)?);
    if skipped > 0 {
        eprintln!("{} malformed rows in {} were not tested", skipped, cli.cases.display());
    }
    if cases.is_empty() {
        Err("Could not find any cases")?
    }

    let mut regressions = 0;
    for (input, expected) in &cases {
        let actual = segmenter
            .cut(input, mode)
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .map(|w| w.to_string())
            .collect::<Vec<_>>();

        if &actual != expected {
            println!(
                "REGRESSION: {}\n  expected: {}\n  actual:   {}",
                input,
                expected.join(" "),
                actual.join(" ")
            );
            regressions += 1;
        } else {
            print!(".");
        }
    }
    println!();

    let regression_rate = regressions as f32 / cases.len() as f32;
    if cli.threshold > regression_rate {
        Ok(())
    } else {
        Err(format!(
            "regressions more than threshold {} > {}",
            regression_rate, cli.threshold
        ))?
    }
}
