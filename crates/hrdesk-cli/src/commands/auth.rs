use anyhow::Result;
use colored::Colorize;

use hrdesk_application::AppContext;
use hrdesk_core::session::Role;

use super::utils::{print_employee, prompt_password, success};

pub async fn login(
    ctx: &AppContext,
    role: Role,
    username: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let user = ctx.auth.login_as(role, username, &password).await?;
    success(&format!("Signed in as {} ({})", user.username, user.role));
    if user.is_hr() {
        let profile = ctx.settings.profile().await?;
        let name = profile.display_name();
        if !name.is_empty() {
            println!("Welcome back, {}.", name.bold());
        }
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth.logout().await?;
    success("Signed out");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    match ctx.auth.current_user().await? {
        Some(user) => {
            println!("{} {}", user.username.bold(), format!("[{}]", user.role).cyan());
            if let Some(employee_id) = &user.employee_id {
                println!("employee id: {}", employee_id);
            }
        }
        None => println!("{}", "Not signed in".bright_black()),
    }
    Ok(())
}

/// The signed-in employee's own record.
pub async fn me(ctx: &AppContext) -> Result<()> {
    let user = ctx.auth.require_role(Role::Employee).await?;
    let employee = ctx.directory.own_profile(&user).await?;
    print_employee(&employee)
}
