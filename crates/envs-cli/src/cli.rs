use clap::Parser;
use clap_complete::Shell;

use envs_core::VERSION;

/// Envs - run a command with variables from plain or encrypted env files
#[derive(Parser, Debug)]
#[command(name = "envs")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(
    after_help = "Set ENVS_PASSWORD to supply the password without a prompt.\n\nExamples:\n  envs -f .env -f secrets.env -- ./server\n  envs -e -f secrets.env < plain.env\n  eval \"$(envs -p -f .env)\""
)]
pub struct Cli {
    /// Env file to load; repeat to load several, later files win
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<String>,

    /// Encrypt env text from stdin into FILE (or stdout when FILE is - or omitted)
    #[arg(short, long)]
    pub encrypt: bool,

    /// Include the surrounding environment
    #[arg(short, long)]
    pub include_env: bool,

    /// Print variables as `export KEY=VALUE` lines suitable for eval
    #[arg(short, long)]
    pub print: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub command: Vec<String>,
}
