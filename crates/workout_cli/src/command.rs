//! Line command parsing for the interactive session.

use workout_core::{parse_form_field, FormField, FormInput, RecordId};

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(RecordId),
    Delete(RecordId),
    Confirm(RecordId),
    Cancel,
    Set { field: FormField, value: String },
    /// `None` saves the draft as currently typed.
    Save(Option<FormInput>),
    Back,
    Go(String),
    Help,
    Quit,
}

pub const HELP: &str = "commands: list | add | edit <id> | delete <id> | confirm <id> | cancel \
| name <text> | reps <text> | save [<name> | <reps>] | back | go <route> | help | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head {
        "list" | "ls" => Command::List,
        "add" => Command::Add,
        "edit" => Command::Edit(parse_id(rest)?),
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "confirm" => Command::Confirm(parse_id(rest)?),
        "cancel" => Command::Cancel,
        "name" | "reps" | "repetitions" => Command::Set {
            field: parse_form_field(head).unwrap_or(FormField::Name),
            value: rest.to_string(),
        },
        "save" => Command::Save(parse_save_input(rest)?),
        "back" => Command::Back,
        "go" => Command::Go(rest.to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

fn parse_id(value: &str) -> Result<RecordId, String> {
    if value.is_empty() {
        return Err("missing record id".to_string());
    }
    RecordId::parse_str(value).map_err(|_| format!("invalid record id `{value}`"))
}

fn parse_save_input(rest: &str) -> Result<Option<FormInput>, String> {
    if rest.is_empty() {
        return Ok(None);
    }
    let (name, repetitions) = rest
        .split_once('|')
        .ok_or_else(|| "expected `save <name> | <reps>`".to_string())?;
    Ok(Some(FormInput::new(name.trim(), repetitions.trim())))
}
