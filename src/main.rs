//! SecurePass: generate random passwords and keep a history of saved ones.
//!
//! This binary only parses arguments, wires up logging and dispatches to the
//! library. Files (`passwords.json`, `config.json`) live in the current
//! working directory.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use securepass::app::App;
use securepass::services::password_generator::PasswordGeneratorTrait;
use securepass::services::password_store::PasswordStoreTrait;
use securepass::services::settings_engine::SettingsEngineTrait;
use securepass::types::password::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};

#[derive(Parser)]
#[command(
    name = "securepass",
    version,
    about = "Generate random passwords and keep a history of saved ones",
    long_about = r#"
SecurePass generates random passwords from the character classes you pick
and can save them, with the time of saving, to passwords.json in the
current directory.

Typical usage:
  securepass generate --length 16
  securepass generate --no-special --save
  securepass list

Saved passwords are stored in plain text.
"#
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random password
    ///
    /// By default, generates a 12-character password using uppercase,
    /// lowercase, digits, and punctuation.
    Generate(GenerateArgs),

    /// Save a password to the history
    Save {
        /// Password to save
        password: String,
    },

    /// Show saved passwords, oldest first
    List,

    /// Show or change settings
    Settings {
        /// Turn dark mode on or off
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Length of the generated password
    #[arg(
        short,
        long,
        default_value_t = 12,
        value_parser = clap::value_parser!(u8).range((MIN_LENGTH as i64)..=(MAX_LENGTH as i64))
    )]
    length: u8,

    /// Exclude uppercase characters (A-Z)
    #[arg(long)]
    no_upper: bool,

    /// Exclude lowercase characters (a-z)
    #[arg(long)]
    no_lower: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    no_digits: bool,

    /// Exclude punctuation (e.g. !@#$%)
    #[arg(long)]
    no_special: bool,

    /// Also save the generated password to the history
    #[arg(short, long)]
    save: bool,
}

impl From<&GenerateArgs> for GenerationOptions {
    fn from(args: &GenerateArgs) -> Self {
        GenerationOptions {
            length: args.length as usize,
            use_upper: !args.no_upper,
            use_lower: !args.no_lower,
            use_digits: !args.no_digits,
            use_special: !args.no_special,
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(".");

    match cli.command {
        Commands::Generate(args) => {
            let password = app.generator.generate(&GenerationOptions::from(&args))?;
            println!("{}", password);
            if args.save {
                app.password_store.append(&password)?;
                eprintln!("Password saved successfully!");
            }
        }
        Commands::Save { password } => {
            app.password_store.append(&password)?;
            println!("Password saved successfully!");
        }
        Commands::List => {
            for line in app.password_store.load_history().display_lines() {
                println!("{}", line);
            }
        }
        Commands::Settings { dark_mode } => {
            if let Some(dark_mode) = dark_mode {
                app.settings_engine.set_dark_mode(dark_mode)?;
            }
            println!("dark_mode = {}", app.settings_engine.settings().dark_mode);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install log subscriber");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
