use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Select };
use textwrap::wrap;

use poeme_assistant::{ Language, Sentiment };

/// Interactive session actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Generate,
    Analyze,
    Theme,
    SwitchLanguage,
    Quit,
}

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_magenta());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        if line.starts_with('—') {
            println!("{}", line.bold());
        } else if line.starts_with('-') || line.starts_with('•') {
            println!("{}", line);
        } else if line.is_empty() {
            println!();
        } else {
            for wrapped_line in wrap(line, width.saturating_sub(4).max(20)) {
                println!("{}", wrapped_line);
            }
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a score colored by band
pub fn print_score(score: u8) {
    let text = format!("{}/100", score);
    match score {
        70..=100 => println!("{}", text.green().bold()),
        40..=69 => println!("{}", text.yellow().bold()),
        _ => println!("{}", text.red().bold()),
    }
}

pub fn print_sentiment(sentiment: Sentiment) {
    let text = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => print_result("Sentiment", &text.green().to_string()),
        Sentiment::Negative => print_result("Sentiment", &text.red().to_string()),
        Sentiment::Neutral => print_result("Sentiment", &text),
    }
}

/// Interactive selection of the next action
pub fn select_action(language: Language) -> std::io::Result<SessionAction> {
    let (items, prompt) = match language {
        Language::English => (
            ["Generate a poem", "Analyze my poem", "Suggest a theme", "Switch language", "Quit"],
            "What next?",
        ),
        Language::Romanian => (
            ["Generează o poezie", "Verifică poezia", "Sugerează o temă", "Schimbă limba", "Ieșire"],
            "Ce urmează?",
        ),
    };

    let selection = Select::with_theme(&get_theme())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(match selection {
        0 => SessionAction::Generate,
        1 => SessionAction::Analyze,
        2 => SessionAction::Theme,
        3 => SessionAction::SwitchLanguage,
        _ => SessionAction::Quit,
    })
}

/// Interactive selection of a language
pub fn select_language(current: Language) -> std::io::Result<Language> {
    let languages = Language::all();
    let labels: Vec<String> = languages.iter().map(|l| l.to_string()).collect();
    let default = languages.iter().position(|l| *l == current).unwrap_or(0);

    let selection = Select::with_theme(&get_theme())
        .with_prompt("Limba / Language")
        .items(&labels)
        .default(default)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(languages.get(selection).copied().unwrap_or(current))
}

/// Ask for a single line of input, possibly empty
pub fn input_line(prompt: &str, initial: &str) -> std::io::Result<String> {
    Input::with_theme(&get_theme())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Read poem lines from the user until an empty line
pub fn input_poem(language: Language) -> std::io::Result<String> {
    let (intro, label) = match language {
        Language::English => ("Enter your poem (empty line to finish):", "Line"),
        Language::Romanian => ("Scrie poezia (linie goală pentru final):", "Vers"),
    };
    println!("{}", intro);

    let mut lines = Vec::new();
    loop {
        let line: String = Input::with_theme(&get_theme())
            .with_prompt(format!("{} {}", label, lines.len() + 1))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}
