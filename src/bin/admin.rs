//! CLI administration tool for employee-login.
//!
//! Exercises the same directory and sign-in path as the HTTP service, which
//! helps when diagnosing why a particular employee cannot log in.
//!
//! # Usage
//!
//! ```bash
//! # Resolve an employee code to its email
//! cargo run --bin admin -- lookup E1024
//!
//! # Run the full login flow (prompts for the password)
//! cargo run --bin admin -- sign-in E1024
//!
//! # Validate configuration
//! cargo run --bin admin -- config check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `SUPABASE_URL` and `SUPABASE_SERVICE_ROLE_KEY` are required.

use employee_login::config::{self, Config, mask_secret};
use employee_login::domain::entities::Credentials;
use employee_login::state::build_login_service;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Password;
use secrecy::ExposeSecret;

/// CLI tool for managing employee-login.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve an employee code to the email in the directory
    Lookup { employee_code: String },

    /// Sign in with an employee code and print the session payload
    SignIn {
        employee_code: String,

        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    match cli.command {
        Commands::Lookup { employee_code } => lookup(&config, &employee_code).await?,
        Commands::SignIn {
            employee_code,
            password,
        } => sign_in(&config, employee_code, password).await?,
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config(&config),
        },
    }

    Ok(())
}

/// Resolves an employee code and prints the email, or the client-facing error.
async fn lookup(config: &Config, employee_code: &str) -> Result<()> {
    println!("{}", "🔎 Employee Lookup".bright_blue().bold());
    println!();

    let service = build_login_service(config)?;

    match service.resolve_email(employee_code).await {
        Ok(email) => {
            println!("  Code:  {}", employee_code.cyan());
            println!("  Email: {}", email.bright_green().bold());
        }
        Err(e) => {
            println!("  Code:  {}", employee_code.cyan());
            println!("  {}", e.to_string().red());
        }
    }
    println!();

    Ok(())
}

/// Runs the full login flow and prints the payload the HTTP client would receive.
async fn sign_in(config: &Config, employee_code: String, password: Option<String>) -> Result<()> {
    println!("{}", "🔑 Employee Sign-In".bright_blue().bold());
    println!();

    let password = match password {
        Some(p) => {
            println!("{}", "⚠️  Password given on the command line".yellow());
            p
        }
        None => Password::new().with_prompt("Password").interact()?,
    };

    let service = build_login_service(config)?;

    match service
        .login(Credentials::new(employee_code, password))
        .await
    {
        Ok(session) => {
            println!("{}", "✅ Signed in".green().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        Err(e) => {
            println!(
                "{} {}",
                format!("❌ {} error:", e.kind()).red().bold(),
                e.to_string().red()
            );
        }
    }
    println!();

    Ok(())
}

/// Prints the validated configuration without secrets.
fn check_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Listen:           {}", config.listen_addr.cyan());
    println!("  Supabase URL:     {}", config.supabase_url.cyan());
    println!(
        "  Service role key: {}",
        mask_secret(config.service_role_key.expose_secret()).bright_black()
    );
    println!("  Employees table:  {}", config.employees_table.cyan());
    println!("  CORS origin:      {}", config.cors.allow_origin.cyan());
    println!("  Log format:       {}", config.log_format.cyan());
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
    println!();
}
