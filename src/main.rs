use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use persenaut::{build_prompt, parse_question, Review};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with the raw model output (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the parsed question as JSON instead of opening the review screen
    #[arg(long)]
    json: bool,

    /// Print a generation prompt for the given theme and exit
    #[arg(long, value_name = "THEME", conflicts_with_all = ["input", "json"])]
    prompt: Option<String>,

    /// Difficulty level used with --prompt
    #[arg(long, default_value = persenaut::prompt::DEFAULT_LEVEL)]
    level: String,
}

fn main() {
    let args = Args::parse();

    if let Some(theme) = args.prompt {
        println!("{}", build_prompt(&theme, &args.level, &[]));
        return;
    }

    let raw = read_raw_text(args.input.as_deref()).expect("Failed to read input");
    let parsed = parse_question(&raw);

    if args.json {
        let json =
            serde_json::to_string_pretty(&parsed).expect("Failed to serialize question");
        println!("{}", json);
        return;
    }

    if let Err(e) = Review::new(parsed).run() {
        eprintln!("Error running review: {}", e);
        std::process::exit(1);
    }
}

fn read_raw_text(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
