//! Envs CLI - run a command with variables from plain or encrypted env files
//!
//! This is the command-line interface for Envs. It reads env files (asking
//! for a password when one is encrypted), composes the variables in command
//! order, and either prints them or hands them to a child process.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use crate::app::{load_files, resolve_files};
use crate::cli::Cli;
use crate::commands::{encrypt, exec, print};
use crate::config::load_config;
use crate::constants::env_vars;
use crate::errors::CliError;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if let Some(cli_err) = e.downcast_ref::<CliError>() {
                cli_err.exit();
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(env_vars::LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns the process exit code: 0, or the child's code when a command ran.
fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "envs", &mut std::io::stdout());
        return Ok(0);
    }

    let config = load_config()?;

    let encrypted = if cli.encrypt {
        Some(encrypt::handle_encrypt(cli)?)
    } else {
        None
    };

    if !cli.print && cli.command.is_empty() {
        return Ok(0);
    }

    let assignments = match encrypted {
        Some(assignments) => assignments,
        None => load_files(&resolve_files(cli, &config))?,
    };

    if cli.print {
        print::handle_print(&assignments)?;
    }

    match cli.command.split_first() {
        Some((program, args)) => {
            let include_env = cli.include_env || config.defaults.include_env;
            exec::run_command(program, args, &assignments, include_env)
        }
        None => Ok(0),
    }
}
