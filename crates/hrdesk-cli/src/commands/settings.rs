use anyhow::Result;
use colored::Colorize;

use hrdesk_application::{AppContext, ProfileUpdate};
use hrdesk_core::hr_profile::HrProfile;
use hrdesk_core::session::Role;

use super::utils::{heading, notice, success};

fn print_profile(profile: &HrProfile) {
    heading("HR Profile");
    let rows = [
        ("First Name", profile.first_name.as_str()),
        ("Last Name", profile.last_name.as_str()),
        ("Mobile Number", profile.mobile_number.as_str()),
        ("Designation", profile.designation.as_str()),
    ];
    for (label, value) in rows {
        let value = if value.is_empty() {
            "-".bright_black().to_string()
        } else {
            value.to_string()
        };
        println!("  {:<16} {}", label.cyan(), value);
    }
    let photo = if profile.profile_photo.is_some() { "set" } else { "-" };
    println!("  {:<16} {}", "Profile Photo".cyan(), photo);
}

pub async fn show(ctx: &AppContext) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    print_profile(&ctx.settings.profile().await?);
    Ok(())
}

pub async fn set(ctx: &AppContext, update: ProfileUpdate) -> Result<()> {
    ctx.auth.require_role(Role::Hr).await?;
    if update.is_empty() {
        notice("Nothing to change; pass at least one field flag.");
        return Ok(());
    }
    let profile = ctx.settings.update_profile(update).await?;
    success("Profile saved");
    print_profile(&profile);
    Ok(())
}
