use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gumdrop::Options;
use serde::Serialize;

use hanseg::keywords::{Keyword, Tfidf};
use hanseg::paths::ResourcePaths;
use hanseg::segmenter::{Segmenter, SegmenterConfig, Token};
use hanseg::tokenizer::{Run, Runs, Tokenize};
use hanseg::types::Mode;

trait OutputWriter {
    fn write_tokens(&mut self, input: &str, tokens: &[Token]);
    fn write_keywords(&mut self, input: &str, keywords: &[Keyword]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_tokens(&mut self, input: &str, tokens: &[Token]) {
        println!("Input: {}", input);
        for token in tokens {
            println!("{:>4}..{:<4} {}", token.start, token.end, token.word);
        }
        println!();
    }

    fn write_keywords(&mut self, input: &str, keywords: &[Keyword]) {
        println!("Input: {}", input);
        for keyword in keywords {
            println!("{:>10.6}  {}", keyword.weight, keyword.word);
        }
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonResult {
    Tokens { input: String, tokens: Vec<Token> },
    Keywords { input: String, keywords: Vec<Keyword> },
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<JsonResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_tokens(&mut self, input: &str, tokens: &[Token]) {
        self.results.push(JsonResult::Tokens {
            input: input.to_owned(),
            tokens: tokens.to_vec(),
        });
    }

    fn write_keywords(&mut self, input: &str, keywords: &[Keyword]) {
        self.results.push(JsonResult::Keywords {
            input: input.to_owned(),
            keywords: keywords.to_vec(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "segment the provided input into words")]
    Segment(SegmentArgs),

    #[options(help = "extract TF-IDF keywords from the provided input")]
    Keywords(KeywordsArgs),

    #[options(help = "print the regularised run structure of the input")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct SegmentArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "directory holding dict.txt, prob_emit.txt and user/", required)]
    dict: PathBuf,

    #[options(help = "JSON segmenter configuration")]
    config: Option<PathBuf>,

    #[options(short = "i", help = "also emit dictionary 2- and 3-grams of long words")]
    index: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be segmented")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct KeywordsArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "directory holding dict.txt, prob_emit.txt, idf_dict.txt and stop_words.txt", required)]
    dict: PathBuf,

    #[options(short = "n", help = "maximum number of keywords")]
    top: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to extract keywords from")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_inputs(inputs: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer
        .lines()
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SegmenterConfig> {
    Ok(match path {
        Some(path) => SegmenterConfig::from_json_file(path)?,
        None => SegmenterConfig::default(),
    })
}

fn writer(use_json: bool) -> Box<dyn OutputWriter> {
    if use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    }
}

fn segment(args: SegmentArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.index {
        config.mode = Mode::Index;
    }

    let paths = ResourcePaths::from_root(&args.dict);
    let segmenter = Segmenter::open(&paths, &config)?;
    let mut writer = writer(args.use_json);

    for input in read_inputs(args.inputs)? {
        let tokens = segmenter.segment(&input);
        writer.write_tokens(&input, &tokens);
    }

    writer.finish();
    Ok(())
}

fn keywords(args: KeywordsArgs) -> anyhow::Result<()> {
    let paths = ResourcePaths::from_root(&args.dict);
    let segmenter = Arc::new(Segmenter::open(&paths, &SegmenterConfig::default())?);
    let tfidf = Tfidf::open(&paths, segmenter)?;
    let top = args.top.unwrap_or(10);
    let mut writer = writer(args.use_json);

    for input in read_inputs(args.inputs)? {
        let keywords = tfidf.top_n(&input, top);
        writer.write_keywords(&input, &keywords);
    }

    writer.finish();
    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    for input in read_inputs(args.inputs)? {
        let chars = input.regularized();

        for run in Runs::new(&chars) {
            match run {
                Run::Sentence(seg) => {
                    println!("{:>4}: \"{}\"", seg.start, seg.text(&chars));
                }
                Run::Single(pos) => {
                    println!("{:>4}: {:?}", pos, chars[pos]);
                }
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Segment(args)) => segment(args),
        Some(Command::Keywords(args)) => keywords(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
