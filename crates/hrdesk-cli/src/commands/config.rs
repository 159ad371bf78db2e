use anyhow::{Context, Result};

use hrdesk_core::config::RootConfig;
use hrdesk_core::credential::CredentialHasher;
use hrdesk_infrastructure::Argon2CredentialHasher;
use hrdesk_infrastructure::storage::ConfigStorage;

use super::utils::{notice, prompt_password, success};

/// Writes a default `config.toml`, leaving an existing one alone.
pub fn init(storage: &ConfigStorage) -> Result<()> {
    if storage.exists() {
        notice(&format!("{} already exists", storage.path().display()));
        return Ok(());
    }
    storage
        .save(&RootConfig::default())
        .with_context(|| format!("Failed to write {:?}", storage.path()))?;
    success(&format!("Wrote {}", storage.path().display()));
    Ok(())
}

/// Prints an Argon2 PHC string for `[hr] password_hash`.
pub fn hash_password() -> Result<()> {
    let password = prompt_password("New password: ")?;
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }
    let confirm = prompt_password("Repeat password: ")?;
    if password != confirm {
        anyhow::bail!("passwords do not match");
    }

    let hash = Argon2CredentialHasher::new().hash(&password)?;
    println!("password_hash = \"{}\"", hash);
    Ok(())
}
