use std::env;
use std::process;

use pairalign::{AlignError, AlignerBuilder, AlignmentMode, AlignmentResult};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("pairalign: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let (seq1, seq2) = match options.sequences() {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("pairalign: {err}");
            process::exit(2);
        }
    };

    let aligner = AlignerBuilder::new()
        .mode(options.mode)
        .match_score(options.match_score)
        .mismatch_score(options.mismatch_score)
        .gap_penalty(options.gap_penalty)
        .build();
    let result = aligner.align(&seq1, &seq2);
    options.format.write(&result);
}

struct Options {
    mode: AlignmentMode,
    match_score: i32,
    mismatch_score: i32,
    gap_penalty: i32,
    format: OutputFormat,
    seq1: Option<String>,
    seq2: Option<String>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            mode: AlignmentMode::Global,
            match_score: 2,
            mismatch_score: -1,
            gap_penalty: -1,
            format: OutputFormat::Text,
            seq1: None,
            seq2: None,
        };

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            }

            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };
            let mut value_for = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };

            match flag.as_str() {
                "--mode" => {
                    options.mode = value_for("--mode")?
                        .parse()
                        .map_err(|e: AlignError| e.to_string())?;
                }
                "--match" => options.match_score = parse_score("--match", &value_for("--match")?)?,
                "--mismatch" => {
                    options.mismatch_score =
                        parse_score("--mismatch", &value_for("--mismatch")?)?
                }
                "--gap" => options.gap_penalty = parse_score("--gap", &value_for("--gap")?)?,
                "--format" => options.format = OutputFormat::from_str(&value_for("--format")?)?,
                _ if flag.starts_with("--") => {
                    return Err(format!("unrecognized argument '{arg}'"));
                }
                _ if options.seq1.is_none() => options.seq1 = Some(arg),
                _ if options.seq2.is_none() => options.seq2 = Some(arg),
                _ => return Err(format!("unexpected extra sequence '{arg}'")),
            }
        }

        Ok(options)
    }

    /// Trimmed, uppercased input sequences; both must be non-empty.
    fn sequences(&self) -> Result<(Vec<u8>, Vec<u8>), AlignError> {
        let normalize = |raw: &Option<String>, name: &'static str| {
            let seq = raw.as_deref().unwrap_or("").trim().to_uppercase();
            if seq.is_empty() {
                Err(AlignError::EmptySequence(name))
            } else {
                Ok(seq.into_bytes())
            }
        };
        Ok((
            normalize(&self.seq1, "sequence 1")?,
            normalize(&self.seq2, "sequence 2")?,
        ))
    }

    fn print_help() {
        println!(
            "\
Usage: pairalign [options] <SEQ1> <SEQ2>

Options:
  --mode <global|local>     Alignment mode (default: global)
  --match <N>               Score for identical symbols (default: 2)
  --mismatch <N>            Score for differing symbols (default: -1)
  --gap <N>                 Score per gap column (default: -1)
  --format <text|tsv>       Output format (default: text)
  -h, --help                Print this help message

Examples:
  pairalign GATTACA GCATGCU
  pairalign --mode local --match 2 --mismatch -1 --gap -1 ACACACTA AGCACACA
"
        );
    }
}

fn parse_score(flag: &str, value: &str) -> Result<i32, String> {
    value
        .parse::<i32>()
        .map_err(|_| format!("{flag} expects an integer, got '{value}'"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Text,
    Tsv,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(Self::Text),
            "tsv" => Ok(Self::Tsv),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, result: &AlignmentResult) {
        match self {
            OutputFormat::Text => println!("{result}"),
            OutputFormat::Tsv => {
                println!("mode\tscore\tsimilarity\taligned_seq1\taligned_seq2");
                println!(
                    "{}\t{}\t{:.2}\t{}\t{}",
                    result.mode,
                    result.score,
                    result.similarity_percentage,
                    String::from_utf8_lossy(&result.aligned_seq1),
                    String::from_utf8_lossy(&result.aligned_seq2),
                );
            }
        }
    }
}
