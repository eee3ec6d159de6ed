//! Create-user command handler

use crate::config::Config;
use crate::db::{NewUser, Store};

pub async fn cmd_create_user(config: &Config, user: NewUser) -> anyhow::Result<()> {
    if user.username.trim().is_empty() {
        anyhow::bail!("Username cannot be empty");
    }
    if user.password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    let store = Store::new(&config.general.database_path).await?;
    let created = store.create_user(user, Some(&config.security)).await?;

    println!("Created user '{}' (id {})", created.username, created.id);
    if created.is_admin {
        println!("  Role:  admin");
    }
    println!("  Token: {}", created.api_key);
    println!();
    println!("Send it as: Authorization: Token {}", created.api_key);

    Ok(())
}
