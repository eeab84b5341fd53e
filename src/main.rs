use clap::Parser;
use colored::*;
use std::process;
use std::sync::Arc;

use pawchat::api::{ApiClient, ChatApi, HttpAuthApi, HttpChatApi};
use pawchat::cli::{Args, Command};
use pawchat::config::Config;
use pawchat::models::Role;
use pawchat::router::{Navigation, Router};
use pawchat::storage::FilesystemTokenStore;
use pawchat::store::{AuthStore, ChatStore};
use pawchat::ui::{display_reply, TerminalAlerts};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[pawchat] API base URL: {:?}", config.api_base_url).dimmed()
        );
    }

    let alerts = Arc::new(TerminalAlerts);
    let client = match ApiClient::new(&config.api_base_url, alerts) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let auth_store = AuthStore::new(
        Arc::new(HttpAuthApi::new(client.clone())),
        Arc::new(FilesystemTokenStore::new()),
    );
    let chat_api: Arc<dyn ChatApi> = Arc::new(HttpChatApi::new(client));
    let chat_store = ChatStore::new(chat_api.clone());

    match args.command {
        Command::Login { username, password } => match auth_store.login(&username, &password).await
        {
            Ok(()) => println!("{}", format!("Logged in as {}.", username).green()),
            Err(e) => {
                eprintln!("{} {}", "Login failed:".red(), e);
                process::exit(1);
            }
        },

        Command::Register {
            username,
            password,
            password_confirm,
        } => {
            let confirm = password_confirm.unwrap_or_else(|| password.clone());
            match auth_store.register(&username, &password, &confirm).await {
                Ok(()) => println!(
                    "{}",
                    format!("Registered and logged in as {}.", username).green()
                ),
                Err(e) => {
                    eprintln!("{} {}", "Registration failed:".red(), e);
                    process::exit(1);
                }
            }
        }

        Command::Logout => {
            auth_store.logout();
            println!("{}", "Logged out.".green());
        }

        Command::Status => {
            let authenticated = auth_store.is_authenticated();
            if authenticated {
                println!("{}", "Session active.".green());
            } else {
                println!("{}", "Not logged in.".yellow());
            }

            let router = Router::new();
            println!("Pages:");
            for route in router.routes() {
                match router.resolve(route.path, authenticated) {
                    Navigation::Proceed(_) => {
                        println!("  {} {}", "ok".green(), route.path);
                    }
                    Navigation::Redirect(target) => {
                        println!(
                            "  {} {} (redirects to {})",
                            "--".yellow(),
                            route.path,
                            target
                        );
                    }
                    Navigation::NotFound => {}
                }
            }
        }

        Command::Ask { image_url, prompt } => {
            let prompt = prompt.join(" ");
            chat_store.open_drawer(&image_url).await;
            if let Some(error) = chat_store.snapshot().error {
                eprintln!("{} {}", "Error:".red(), error);
                process::exit(1);
            }

            chat_store.send_message(&prompt).await;
            let state = chat_store.snapshot();
            if let Some(error) = state.error {
                eprintln!("{} {}", "Error:".red(), error);
                process::exit(1);
            }
            if let Some(reply) = state.messages.last() {
                display_reply(reply);
            }
        }

        Command::History { image_url } => {
            chat_store.open_drawer(&image_url).await;
            let state = chat_store.snapshot();
            if let Some(error) = state.error {
                eprintln!("{} {}", "Error:".red(), error);
                process::exit(1);
            }
            if state.messages.is_empty() {
                println!("{}", "No conversation yet.".dimmed());
            }
            for message in &state.messages {
                let prefix = match message.role {
                    Role::User => "You:".cyan().bold(),
                    Role::Model => "AI:".green().bold(),
                };
                println!("{} {}", prefix, message.content);
            }
        }

        Command::Clear { image_url } => {
            chat_store.open_drawer(&image_url).await;
            chat_store.clear_current_history().await;
            let state = chat_store.snapshot();
            if let Some(error) = state.error {
                eprintln!("{} {}", "Error:".red(), error);
                process::exit(1);
            }
            println!("{}", "Conversation cleared.".green());
        }

        Command::Sessions => match chat_api.get_all_sessions().await {
            Ok(sessions) => {
                if sessions.is_empty() {
                    println!("{}", "No chat sessions.".dimmed());
                }
                for session in sessions {
                    println!(
                        "{}  {}",
                        session
                            .created_at
                            .format("%Y-%m-%d %H:%M")
                            .to_string()
                            .dimmed(),
                        session.image_url
                    );
                }
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        },

        Command::ClearAll => match chat_api.delete_all_sessions().await {
            Ok(()) => println!("{}", "All chat sessions cleared.".green()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        },
    }
}
