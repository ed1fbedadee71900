use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use env_logger::{Env, Target};
use log::error;
use mcq_prototype::{Quiz, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question from (defaults to the built-in question)
    #[arg(short, long, value_name = "FILE")]
    question: Option<PathBuf>,
    /// Show the choices in random order
    #[arg(long)]
    shuffle: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "error")]
    log_level: String,
    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()));
    if let Some(path) = &args.log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn run(args: Args) -> Result<(), QuizError> {
    let mut quiz = match args.question {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::default(),
    };

    if args.shuffle {
        quiz = quiz.shuffle_choices(&mut rand::rng());
    }

    quiz.run()
}
