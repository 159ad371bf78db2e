use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use hrdesk_application::AppContext;
use hrdesk_core::employee::Employee;
use hrdesk_core::session::Role;

use super::utils::{print_employee, success};

pub async fn list(ctx: &AppContext) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    let rows = ctx.directory.rows().await?;

    if rows.is_empty() {
        println!("{}", "No employees yet. Add one with `hrdesk employees add`.".bright_black());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:<15} {:<3} {:<24} {:<20} {:<20} {:<28} {}",
            "ID", "", "NAME", "USERNAME", "DESIGNATION", "EMAIL", "PHONE"
        )
        .bold()
    );
    for row in &rows {
        let initial = row.initial.map(String::from).unwrap_or_default();
        println!(
            "{:<15} {:<3} {:<24} {:<20} {:<20} {:<28} {}",
            row.id,
            initial.cyan(),
            row.name,
            row.username,
            row.designation,
            row.email,
            row.phone
        );
    }
    println!("{}", format!("{} employee(s)", rows.len()).bright_black());
    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    let employee = ctx.directory.get(id).await?;
    print_employee(&employee)
}

pub async fn delete(ctx: &AppContext, id: &str, reason: &str) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    let removed = ctx.directory.delete(id, reason).await?;
    success(&format!("Deleted {} ({})", removed.employee_name, removed.id));
    Ok(())
}

/// Reads a full employee record for `id` from a JSON file.
///
/// The file may leave `id` out; when present it must equal `id`.
fn read_replacement(path: &Path, id: &str) -> Result<Employee> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let mut employee: Employee = serde_json::from_str(&content)
        .with_context(|| format!("{:?} is not an employee record", path))?;

    if employee.id.is_empty() {
        employee.id = id.to_string();
    } else if employee.id != id {
        anyhow::bail!(
            "{:?} holds employee '{}', not '{}'",
            path,
            employee.id,
            id
        );
    }
    Ok(employee)
}

/// Replaces the stored record wholesale; fields missing from the file end
/// up empty, `passwordHash` included.
pub async fn replace(ctx: &AppContext, id: &str, file: &Path) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    let employee = read_replacement(file, id)?;
    ctx.directory.overwrite(&employee).await?;
    success(&format!("Replaced {} ({})", employee.employee_name, employee.id));
    Ok(())
}
