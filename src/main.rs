use clap::Parser;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process;
use std::time::Duration;

use monday_bi::api::{HttpBackend, QueryBackend};
use monday_bi::cli::Args;
use monday_bi::config::Config;
use monday_bi::orchestrator::{Orchestrator, Submission};
use monday_bi::session::{ConfigField, SessionState};
use monday_bi::ui;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env_and_args(&args);

    if config.verbose {
        eprintln!("{}", format!("[bi] Endpoint: {}", config.endpoint).dimmed());
        match config.request_timeout {
            Some(secs) => eprintln!("{}", format!("[bi] Request timeout: {}s", secs).dimmed()),
            None => eprintln!(
                "{}",
                "[bi] Request timeout: none (waits indefinitely)".dimmed()
            ),
        }
    }

    let backend = match HttpBackend::new(
        &config.endpoint,
        config.request_timeout.map(Duration::from_secs),
    ) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let orchestrator = Orchestrator::new(backend, config.verbose);
    let mut state = SessionState::new(config.session.clone());

    if !args.question.is_empty() {
        let question = args.question.join(" ");
        state.set_draft_question(&question);
        let exit_code = run_single_turn(&orchestrator, &mut state).await;
        process::exit(exit_code);
    }

    run_repl(&orchestrator, &mut state, &config.endpoint).await;
}

/// One-shot mode: submit the question from the command line, render the
/// outcome and exit.
async fn run_single_turn<B: QueryBackend>(
    orchestrator: &Orchestrator<B>,
    state: &mut SessionState,
) -> i32 {
    match orchestrator.submit(state).await {
        Submission::Answered => {
            ui::print_answer(state.last_answer());
            if let Some(trace) = state.last_trace() {
                ui::print_trace(trace);
            }
            0
        }
        Submission::Failed => {
            ui::print_error(state.last_error().unwrap_or("Request failed"));
            1
        }
        Submission::Skipped => {
            eprintln!("{}", "Nothing to ask.".dimmed());
            1
        }
    }
}

async fn run_repl<B: QueryBackend>(
    orchestrator: &Orchestrator<B>,
    state: &mut SessionState,
    endpoint: &str,
) {
    ui::print_banner(state, endpoint);

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    loop {
        match editor.readline("bi> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                if let Some(command) = line.strip_prefix('/') {
                    if !handle_command(command, state) {
                        break;
                    }
                    continue;
                }

                state.set_draft_question(&line);
                match orchestrator.submit(state).await {
                    Submission::Answered => {
                        ui::print_answer(state.last_answer());
                        if let Some(trace) = state.last_trace() {
                            ui::print_trace(trace);
                        }
                    }
                    Submission::Failed => {
                        ui::print_error(state.last_error().unwrap_or("Request failed"));
                    }
                    Submission::Skipped => {}
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                break;
            }
        }
    }
}

/// Handle a `/command` line. Returns false when the session should end.
fn handle_command(command: &str, state: &mut SessionState) -> bool {
    let mut parts = command.splitn(3, ' ');

    match parts.next().unwrap_or("") {
        "help" => ui::print_help(),
        "quit" | "exit" => return false,
        "config" => ui::print_config(state.config()),
        "history" => ui::print_history(state.history()),
        "trace" => match state.last_trace() {
            Some(trace) => ui::print_trace(trace),
            None => println!("{}", "No trace recorded yet.".dimmed()),
        },
        "set" => {
            let field = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            match field.parse::<ConfigField>() {
                Ok(field) => {
                    state.set_config_field(field, value);
                    if field.is_secret() {
                        println!("{}", format!("{} updated.", field).dimmed());
                    } else {
                        println!("{}", format!("{} = {}", field, value).dimmed());
                    }
                }
                Err(e) => ui::print_error(&e),
            }
        }
        other => {
            ui::print_error(&format!("Unknown command: /{}", other));
            println!("{}", "/help lists the available commands.".dimmed());
        }
    }

    true
}
