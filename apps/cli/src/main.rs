use std::process::ExitCode;

use clap::{Parser, Subcommand};

use goalsaver_cli::{build_state, commands, config::Config, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "goalsaver")]
#[command(about = "Create savings goals from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store the user id and access token used for later requests.
    Login {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        token: String,
    },
    /// Forget the stored user.
    Logout,
    /// List the available goal types.
    Types,
    /// Create a savings goal.
    Create {
        /// Goal name.
        #[arg(long, default_value = "")]
        name: String,
        /// Target amount.
        #[arg(long, default_value = "")]
        amount: String,
        /// Target date (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        date: String,
        /// Goal type key, see `goalsaver types`.
        #[arg(long = "type", default_value = "")]
        goal_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    match cli.command {
        Command::Login { user_id, token } => {
            commands::login(&state, &user_id, &token)?;
            println!("Signed in as {}", user_id);
        }
        Command::Logout => {
            commands::logout(&state)?;
            println!("Signed out");
        }
        Command::Types => print!("{}", commands::render_goal_types()),
        Command::Create {
            name,
            amount,
            date,
            goal_type,
        } => {
            let draft = commands::build_draft(&name, &amount, &date, &goal_type);
            let outcome = commands::create_goal(&state, &draft).await;
            println!("{}", commands::render_outcome(&outcome));
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
