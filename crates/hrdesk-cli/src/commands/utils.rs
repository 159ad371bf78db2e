use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use hrdesk_core::employee::Employee;
use hrdesk_core::wizard::{FormField, WizardStage};
use strum::IntoEnumIterator;

/// Reads one line from the terminal. `None` on Ctrl-C or Ctrl-D.
///
/// The input is echoed; rustyline has no masked mode.
pub fn prompt_line(prompt: &str) -> Result<Option<String>> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Prompts for a password, failing when the prompt is aborted.
pub fn prompt_password(prompt: &str) -> Result<String> {
    prompt_line(prompt)?.ok_or_else(|| anyhow::anyhow!("password entry aborted"))
}

pub fn success(message: &str) {
    println!("{}", message.bright_green());
}

pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

pub fn heading(title: &str) {
    println!("{}", title.bright_magenta().bold());
}

/// Shows `value` for a field, masking secrets and marking gaps.
pub fn display_value(field: FormField, value: Option<&str>) -> String {
    match value {
        Some(_) if field.is_secret() => "********".to_string(),
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".bright_black().to_string(),
    }
}

/// Prints a stored record grouped by form stage.
pub fn print_employee(employee: &Employee) -> Result<()> {
    let record = serde_json::to_value(employee)?;

    println!(
        "{} {}",
        employee.employee_name.bold(),
        format!("(id {}, created {})", employee.id, employee.created_at).bright_black()
    );
    for stage in WizardStage::iter() {
        println!();
        heading(stage.title());
        for field in FormField::on_stage(stage) {
            if field.is_secret() {
                continue;
            }
            let value = record.get(field.key()).and_then(|v| v.as_str());
            println!("  {:<24} {}", field.label().cyan(), display_value(field, value));
        }
    }
    Ok(())
}
