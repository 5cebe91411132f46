//! Account CLI commands
//!
//! Sign up, sign in and out, and show who is signed in.

use clap::Subcommand;

use crate::crypto::SecureString;
use crate::error::{BillError, BillResult};
use crate::services::{AuthService, SignUp};
use crate::storage::Storage;

/// Environment variable consulted when `--password` is not given
pub const PASSWORD_ENV: &str = "BILLTRACK_PASSWORD";

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    Signup {
        /// Email address used to sign in
        #[arg(short, long)]
        email: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },
    /// Sign in to an existing account
    Signin {
        #[arg(short, long)]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },
    /// Sign out
    Signout,
    /// Show the signed-in account
    Whoami,
}

/// Handle an auth command
pub fn handle_auth_command(storage: &Storage, cmd: AuthCommands) -> BillResult<()> {
    let service = AuthService::new(storage);

    match cmd {
        AuthCommands::Signup {
            email,
            first_name,
            last_name,
            password,
        } => {
            let password = resolve_password(password)?;
            let user = service.sign_up(SignUp {
                email,
                password: password.to_string(),
                first_name,
                last_name,
            })?;

            println!("Account created for {}", user.email);
            println!("Signed in as {}", user.display_name());
        }

        AuthCommands::Signin { email, password } => {
            let password = resolve_password(password)?;
            let user = service.sign_in(&email, &password)?;
            println!("Signed in as {}", user.display_name());
        }

        AuthCommands::Signout => {
            if service.sign_out()? {
                println!("Signed out.");
            } else {
                println!("Not signed in.");
            }
        }

        AuthCommands::Whoami => match service.current_user()? {
            Some(user) => {
                println!("{}", user.display_name());
                println!("  Email:  {}", user.email);
                println!("  ID:     {}", user.id);
            }
            None => println!("Not signed in."),
        },
    }

    Ok(())
}

/// Use the given password, or prompt for one without echo
fn resolve_password(given: Option<String>) -> BillResult<SecureString> {
    match given {
        Some(password) => Ok(SecureString::new(password)),
        None => rpassword::prompt_password("Password: ")
            .map(SecureString::new)
            .map_err(|e| BillError::Io(format!("Failed to read password: {}", e))),
    }
}
