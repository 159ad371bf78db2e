//! Interactive four-step "add employee" form.

use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use hrdesk_application::AppContext;
use hrdesk_core::config::RootConfig;
use hrdesk_core::session::Role;
use hrdesk_core::wizard::{FormField, HiddenFieldPolicy, IntakeWizard, WizardStage};

use super::utils::{display_value, heading, notice, success};

const COMMANDS: &[&str] = &["next", "prev", "set", "show", "submit", "quit", "help"];

/// One parsed line of wizard input.
#[derive(Debug, PartialEq, Eq)]
enum WizardCommand {
    Next,
    Prev,
    Set { field: FormField, value: String },
    Show,
    Submit,
    Quit,
    Help,
}

/// Secret values are taken verbatim after the single space that follows the
/// field key; other values are trimmed.
fn parse_command(line: &str) -> Result<WizardCommand, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    match word {
        "next" | "n" => Ok(WizardCommand::Next),
        "prev" | "p" | "back" => Ok(WizardCommand::Prev),
        "show" | "s" => Ok(WizardCommand::Show),
        "submit" => Ok(WizardCommand::Submit),
        "quit" | "exit" | "q" => Ok(WizardCommand::Quit),
        "help" | "?" => Ok(WizardCommand::Help),
        "set" => {
            let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if key.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            let field = FormField::from_str(key).map_err(|_| format!("unknown field '{}'", key))?;
            let value = if field.is_secret() { value } else { value.trim() };
            Ok(WizardCommand::Set {
                field,
                value: value.to_string(),
            })
        }
        other => Err(format!("unknown command '{}', type 'help'", other)),
    }
}

/// Completes wizard commands and, after `set `, field keys.
#[derive(Clone)]
struct WizardHelper;

impl Helper for WizardHelper {}

impl Completer for WizardHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if let Some(partial) = line.strip_prefix("set ") {
            if partial.contains(' ') {
                return Ok((pos, vec![]));
            }
            let candidates = FormField::iter()
                .map(FormField::key)
                .filter(|key| key.starts_with(partial))
                .map(|key| Pair {
                    display: key.to_string(),
                    replacement: format!("{} ", key),
                })
                .collect();
            return Ok((4, candidates));
        }

        if line.contains(' ') {
            return Ok((pos, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for WizardHelper {}

impl Hinter for WizardHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let key = line.strip_prefix("set ")?.trim_end();
        let field = FormField::from_str(key).ok()?;
        if field.options().is_empty() || !line.ends_with(' ') {
            return None;
        }
        Some(field.options().join(" | "))
    }
}

impl Validator for WizardHelper {}

fn print_stage(wizard: &IntakeWizard) {
    let stage = wizard.stage();
    println!();
    heading(&format!(
        "Step {} of {}: {}",
        stage.number(),
        WizardStage::COUNT,
        stage.title()
    ));
    for field in wizard.visible_fields() {
        let value = wizard.value(field);
        let mut line = format!(
            "  {:<22} {:<24} {}",
            field.key().cyan(),
            field.label(),
            display_value(field, value.as_deref())
        );
        if !field.options().is_empty() {
            line.push_str(&format!("  [{}]", field.options().join(" | ")).bright_black().to_string());
        }
        println!("{}", line);
    }
    if wizard.can_submit() {
        println!("{}", "Type 'submit' to save this employee.".bright_black());
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  next | prev            move between steps (form values are kept)");
    println!("  set <field> <value>    fill a field shown on this step");
    println!("  show                   show this step again");
    println!("  submit                 save the employee (last step only)");
    println!("  quit                   leave without saving");
}

/// Runs the form until the employee is submitted or the user quits.
pub async fn run(ctx: &AppContext, config: &RootConfig) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;

    let mut wizard = ctx.intake.start();
    let mut rl: Editor<WizardHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(WizardHelper));

    heading("=== Add Employee ===");
    if config.wizard.hidden_fields == HiddenFieldPolicy::ClearOnBranchChange {
        println!(
            "{}",
            "Switching Status or Experience Type clears the fields it hides.".bright_black()
        );
    }
    print_help();
    print_stage(&wizard);

    loop {
        let prompt = format!("step {}> ", wizard.stage().number());
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                notice("CTRL-C detected. Type 'quit' to leave without saving.");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                notice("Leaving without saving.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{}", message.red());
                continue;
            }
        };

        match command {
            WizardCommand::Next => {
                if wizard.stage().is_last() {
                    notice("Already on the last step.");
                }
                wizard.next();
                print_stage(&wizard);
            }
            WizardCommand::Prev => {
                if wizard.stage().is_first() {
                    notice("Already on the first step.");
                }
                wizard.previous();
                print_stage(&wizard);
            }
            WizardCommand::Set { field, value } => match wizard.set_field(field, value) {
                Ok(()) => {
                    // a choice can change which fields are shown
                    if field.is_choice() {
                        print_stage(&wizard);
                    }
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            WizardCommand::Show => print_stage(&wizard),
            WizardCommand::Help => print_help(),
            WizardCommand::Submit => match ctx.intake.submit(&mut wizard).await {
                Ok(employee) => {
                    success(&format!(
                        "Employee {} added with id {}",
                        employee.employee_name, employee.id
                    ));
                    break;
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            WizardCommand::Quit => {
                notice("Leaving without saving.");
                break;
            }
        }
    }

    Ok(())
}
