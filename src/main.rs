use clap::Parser;
use first_link::config::GameConfig;
use first_link::{Game, NavigationEvent, NavigationState, PageTitle, RunReport};
use std::io::{self, Write};
use std::process::ExitCode;

mod args;
use args::Args;

/// Environment variable that overrides the configured origin
const BASE_URL_ENV: &str = "WIKI_BASE_URL";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => match GameConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    let config = args.apply(file_config, std::env::var(BASE_URL_ENV).ok());
    let verbose = !args.json;

    if verbose {
        print_banner();
    }

    let Some(start) = start_title(args.title.as_deref(), prompt_for_title) else {
        println!("No page title provided");
        return ExitCode::FAILURE;
    };

    let navigator = match Game::new().with_config(config).navigator() {
        Ok(navigator) => navigator,
        Err(e) => {
            ::log::error!("Failed to set up navigation: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if verbose {
        println!("\nStarting from: {}", start);
        println!("Target: {}", navigator.target());
        println!("{}", "-".repeat(60));
    }

    let mut state = NavigationState::new(start.clone());
    let mut observer = |event: &NavigationEvent| {
        if verbose {
            print_event(event);
        }
    };

    let interrupted = tokio::select! {
        _ = navigator.run(&mut state, &mut observer) => false,
        Ok(()) = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        ::log::warn!("Interrupted after {} pages", state.visited().len());
        if verbose {
            println!("\n\nInterrupted by user");
        }
    }

    let report = RunReport::new(start, navigator.target().clone(), &state);
    if verbose {
        print_summary(&report);
    } else {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::error!("Failed to serialize report: {}", e),
        }
    }

    ExitCode::from(exit_status(&report))
}

/// Process exit status for a finished run: 0 on success, 1 for any failure or interruption
fn exit_status(report: &RunReport) -> u8 {
    if report.succeeded() { 0 } else { 1 }
}

/// Starting page from the command line, or from `prompt` when none was given.
/// Blank input yields `None`.
fn start_title(arg: Option<&str>, prompt: impl FnOnce() -> String) -> Option<PageTitle> {
    match arg {
        Some(title) => PageTitle::new(title),
        None => PageTitle::new(&prompt()),
    }
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("First-link game");
    println!("{}", "=".repeat(60));
    println!("\nTests the claim that following the first link of any article");
    println!("eventually leads to Philosophy.\n");
}

/// Ask for the starting title on stdin. Read failures count as empty input.
fn prompt_for_title() -> String {
    print!("Enter a Wikipedia page title (e.g., 'Dog', 'Python'): ");
    if let Err(e) = io::stdout().flush() {
        ::log::debug!("Failed to flush prompt: {}", e);
    }

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line,
        Err(e) => {
            ::log::error!("Failed to read title: {}", e);
            String::new()
        }
    }
}

fn print_event(event: &NavigationEvent) {
    match event {
        NavigationEvent::Visited { index, title } => println!("{}. {}", index, title),
        NavigationEvent::LoopDetected { title } => {
            println!("\nLoop detected! Already visited '{}'", title)
        }
        NavigationEvent::Backtracking { title } => {
            println!("Trying second link from previous page ({})...", title)
        }
        NavigationEvent::FollowingSecondary { to, .. } => {
            println!("   -> Following second link to {}...", to)
        }
        NavigationEvent::Reached { title } => println!("\nSUCCESS! Reached {}!", title),
    }
}

fn print_summary(report: &RunReport) {
    println!("{}", "-".repeat(60));

    if report.succeeded() {
        println!("\nSummary:");
        println!("   Total clicks: {}", report.clicks);
        println!("\nPath taken:");
    } else {
        if let Some(error) = &report.error {
            println!("\n{}", error);
        }
        println!("\nPartial path taken:");
    }

    for (i, page) in report.path.iter().enumerate() {
        println!("   {}. {}", i + 1, page);
    }
}
