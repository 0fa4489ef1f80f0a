use std::path::PathBuf;

use cbol_core::models::user::{Position, Role};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cbol", version, about = "CBOL admin console")]
pub struct Cli {
    /// Backend base URL, e.g. http://127.0.0.1:8080/api
    #[arg(long, global = true, env = "CBOL_API_BASE_URL")]
    pub api_url: Option<String>,

    /// File holding the session token
    #[arg(long, global = true, env = "CBOL_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Answer "yes" to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short, env = "CBOL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show who the stored token belongs to
    Whoami,
    /// Your own profile
    #[command(subcommand)]
    Me(MeCommand),
    /// Staff directory management
    #[command(subcommand)]
    Users(UsersCommand),
    /// Print the version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum MeCommand {
    /// Show your profile
    Show {
        /// Re-check this password before showing the profile
        #[arg(long, env = "CBOL_VERIFY_PASSWORD", hide_env_values = true)]
        verify: Option<String>,
    },
    /// Edit your profile; unset flags keep their current value
    Edit(ProfileArgs),
    /// Change your password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Delete your account
    Delete,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub english_name: Option<String>,
    /// Also changes the email to <username>@cbol.com
    #[arg(long)]
    pub username: Option<String>,
    /// Full number, e.g. 010-1234-5678
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List every account
    List,
    /// Register a new account with the initial password
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        english_name: String,
        #[arg(long)]
        username: String,
        /// Full number, e.g. 010-1234-5678
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        role: Role,
        /// Rank label (e.g. 사원) or its english variant name (e.g. staff)
        #[arg(long)]
        position: Option<Position>,
    },
    /// Change an account's role or position
    Edit {
        username: String,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        position: Option<Position>,
    },
    /// Deactivate one or more accounts
    Delete {
        #[arg(required = true)]
        usernames: Vec<String>,
    },
}
