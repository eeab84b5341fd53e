use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pawchat")]
#[command(about = "Chat with an AI about dog pictures", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-base-url",
        help = "Backend base URL (e.g., http://localhost:8000)",
        global = true
    )]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        username: String,
        #[arg(short, long)]
        password: String,
        #[arg(long = "confirm", help = "Password confirmation (defaults to --password)")]
        password_confirm: Option<String>,
    },
    /// Drop the stored session
    Logout,
    /// Show whether a session is active
    Status,
    /// Ask a question about a dog image
    Ask {
        image_url: String,
        #[arg(help = "Question to send", trailing_var_arg = true, required = true)]
        prompt: Vec<String>,
    },
    /// Show the conversation history for an image
    History { image_url: String },
    /// Erase the conversation for an image
    Clear { image_url: String },
    /// List all chat sessions
    Sessions,
    /// Erase every chat session
    ClearAll,
}
