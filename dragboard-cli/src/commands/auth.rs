//! login, signup and logout

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use dragboard_client::{auth, BoardClient};
use dragboard_config::ClientConfig;

fn prompt_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("failed to read password"),
    }
}

pub async fn run_login(
    config: &ClientConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()
            .context("failed to read username")?,
    };
    let password = prompt_password(password)?;

    let client = BoardClient::new(config)?;
    let creds = auth::login(&client, &username, &password).await?;
    println!("Logged in as {}", creds.username);
    Ok(())
}

pub async fn run_signup(
    config: &ClientConfig,
    username: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = prompt_password(password)?;
    BoardClient::new(config)?
        .signup(username, email, &password)
        .await?;
    println!("Account '{}' created. Run `dragboard login` to sign in.", username);
    Ok(())
}

pub fn run_logout() -> Result<()> {
    if auth::logout()? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}
