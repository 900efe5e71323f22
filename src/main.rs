use std::path::PathBuf;

use clap::Parser;
use daily_quiz::{QuizApp, sample_quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from (uses the built-in sample quiz
    /// when omitted)
    #[arg(short, long)]
    quiz: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let app = match args.quiz {
        Some(path) => QuizApp::from_json(path).expect("Failed to load quiz"),
        None => QuizApp::new(sample_quiz()),
    };

    if let Err(e) = app.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
