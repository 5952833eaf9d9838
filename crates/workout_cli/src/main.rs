//! CLI smoke entry point and line-driven session.
//!
//! # Responsibility
//! - Verify `workout_core` linkage with a deterministic ping/version probe.
//! - Drive the navigator from stdin, one command per line.

mod command;

use command::{parse_command, Command, HELP};
use std::io::{self, BufRead, Write};
use workout_core::{
    default_log_level, init_logging, FormInput, NavOutcome, NavResult, NavigatorConfig,
    WorkoutNavigator,
};

const LOG_DIR_ENV: &str = "WORKOUT_LOG_DIR";

fn main() {
    println!("workout_core ping={}", workout_core::ping());
    println!("workout_core version={}", workout_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match NavigatorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut navigator = WorkoutNavigator::in_memory(config);
    if let Err(err) = run_session(&mut navigator, io::stdin().lock(), &mut io::stdout()) {
        eprintln!("session aborted: {err}");
        std::process::exit(1);
    }
}

fn run_session(
    navigator: &mut WorkoutNavigator,
    input: impl BufRead,
    stdout: &mut impl Write,
) -> io::Result<()> {
    print_screen(navigator, stdout)?;

    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(stdout, "error: {message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{HELP}")?,
            Command::List => print_screen(navigator, stdout)?,
            other => {
                match apply(navigator, other) {
                    Ok(outcome) => writeln!(stdout, "ok: {}", describe(outcome))?,
                    Err(err) => writeln!(stdout, "error: {err}")?,
                }
                print_screen(navigator, stdout)?;
            }
        }
    }
    Ok(())
}

fn apply(navigator: &mut WorkoutNavigator, command: Command) -> NavResult<NavOutcome> {
    match command {
        Command::Add => navigator.on_add(),
        Command::Edit(id) => navigator.on_edit(id),
        Command::Delete(id) => navigator.on_delete_requested(id),
        Command::Confirm(id) => navigator.on_delete_confirmed(id),
        Command::Cancel => navigator.on_delete_cancelled(),
        Command::Set { field, value } => navigator.on_field_changed(field, value),
        Command::Save(input) => {
            let input = input.unwrap_or_else(|| {
                navigator
                    .screen()
                    .draft()
                    .map(|draft| FormInput::new(draft.name(), draft.repetitions()))
                    .unwrap_or_default()
            });
            navigator.on_save(input)
        }
        Command::Back => navigator.on_back(),
        Command::Go(route) => navigator.navigate(&route),
        Command::List | Command::Help | Command::Quit => Ok(NavOutcome::Stayed),
    }
}

fn describe(outcome: NavOutcome) -> String {
    match outcome {
        NavOutcome::Moved(route) => format!("moved to {route}"),
        NavOutcome::Stayed => "stayed".to_string(),
        NavOutcome::Created(id) => format!("created {id}"),
        NavOutcome::Updated(id) => format!("updated {id}"),
        NavOutcome::Deleted(id) => format!("deleted {id}"),
        NavOutcome::ConfirmDelete(id) => format!("confirm delete of {id} with `confirm {id}`"),
        NavOutcome::DeleteCancelled => "delete cancelled".to_string(),
    }
}

fn print_screen(navigator: &WorkoutNavigator, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[{}]", navigator.route())?;
    if let Some(draft) = navigator.screen().draft() {
        for field in [workout_core::FormField::Name, workout_core::FormField::Repetitions] {
            let error = draft
                .error_message(field)
                .map(|message| format!("  ! {message}"))
                .unwrap_or_default();
            writeln!(out, "  {}: {}{}", field.as_str(), draft.value(field), error)?;
        }
        return Ok(());
    }

    if navigator.shows_empty_state() {
        return writeln!(out, "  no workouts yet; `add` to start");
    }
    for record in navigator.records() {
        writeln!(out, "  {}  {}  ({})", record.id, record.name, record.repetitions)?;
    }
    if let Some(id) = navigator.screen().pending_delete() {
        writeln!(out, "  delete {id}? `confirm {id}` or `cancel`")?;
    }
    Ok(())
}
