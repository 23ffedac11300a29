use colored::*;

use crate::models::{ConversationTurn, Role};
use crate::session::{SessionConfig, SessionState};

/// Session banner printed when the interactive loop starts.
pub fn print_banner(state: &SessionState, endpoint: &str) {
    println!(
        "{}",
        "Monday Business Intelligence".bold()
    );
    println!(
        "{}",
        format!(
            "Session {} started {}",
            state.session_id(),
            state.started_at().format("%A, %B %d, %Y")
        )
        .dimmed()
    );
    println!("{}", format!("Backend: {}", endpoint).dimmed());
    println!(
        "{}",
        "Type a question and press Enter. /help lists commands.".dimmed()
    );
    println!();
}

pub fn print_answer(answer: &str) {
    println!("{}", answer);
}

/// The backend's diagnostic payload, rendered verbatim as pretty JSON in a
/// dimmed panel.
pub fn print_trace(trace: &serde_json::Value) {
    let rendered =
        serde_json::to_string_pretty(trace).unwrap_or_else(|_| trace.to_string());

    println!(
        "{}",
        "┌─[TRACE]──────────────────────────────────────────────────".dimmed()
    );
    for line in rendered.lines() {
        println!("{}", format!("│ {}", line).dimmed());
    }
    println!(
        "{}",
        "└──────────────────────────────────────────────────────────".dimmed()
    );
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", "Configuration".bold());
    print_field("monday-key", &mask_secret(&config.monday_api_key));
    print_field("gemini-key", &mask_secret(&config.gemini_api_key));
    print_field("deals-board", &display_or_unset(&config.deals_board_id));
    print_field(
        "work-orders-board",
        &display_or_unset(&config.work_orders_board_id),
    );
}

pub fn print_history(history: &[ConversationTurn]) {
    if history.is_empty() {
        println!("{}", "No conversation yet.".dimmed());
        return;
    }

    for turn in history {
        match turn.role {
            Role::User => println!("{} {}", "you:".cyan(), turn.content),
            Role::Assistant => println!("{} {}", "assistant:".green(), turn.content),
        }
    }
}

pub fn print_help() {
    println!("{}", "Commands".bold());
    println!(
        "{}",
        "  /set <field> <value>   Update a config field (monday-key, gemini-key,".dimmed()
    );
    println!(
        "{}",
        "                         deals-board, work-orders-board)".dimmed()
    );
    println!("{}", "  /config                Show the current configuration".dimmed());
    println!("{}", "  /history               Show the conversation so far".dimmed());
    println!("{}", "  /trace                 Re-show the last trace payload".dimmed());
    println!("{}", "  /quit                  End the session".dimmed());
    println!(
        "{}",
        "Anything else is sent to the backend as a question.".dimmed()
    );
}

fn print_field(name: &str, value: &str) {
    // Pad before coloring; escape codes would otherwise count toward the
    // field width.
    println!("  {} {}", format!("{:<18}", name).cyan(), value);
}

fn display_or_unset(value: &str) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value.to_string()
    }
}

/// Keys are shown masked, keeping only the last four characters visible.
fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return "(not set)".to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "••••".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("••••{}", tail)
}
