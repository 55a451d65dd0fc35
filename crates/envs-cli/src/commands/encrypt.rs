use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use envs_core::envfile;
use envs_core::fs::write_atomic;
use envs_core::Assignment;
use zeroize::Zeroizing;

use crate::app::read_new_password;
use crate::cli::Cli;
use crate::errors::CliError;

/// Where an encrypted env file is written.
#[derive(Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    File(&'a str),
}

/// Pick the output for `-e`: the single `-f` file, or stdout for `-` or no file.
pub fn destination(files: &[String]) -> anyhow::Result<Destination<'_>> {
    match files {
        [] => Ok(Destination::Stdout),
        [file] if file == "-" => Ok(Destination::Stdout),
        [file] => Ok(Destination::File(file)),
        _ => Err(CliError::invalid_input("only one file can be encrypted at a time").into()),
    }
}

/// Read env text from stdin, encrypt it, and write the container.
///
/// Returns the assignments that were encrypted so they can be printed or
/// applied to a command in the same invocation.
pub fn handle_encrypt(cli: &Cli) -> anyhow::Result<Vec<Assignment>> {
    let destination = destination(&cli.files)?;

    let mut plaintext = Zeroizing::new(Vec::new());
    io::stdin()
        .read_to_end(&mut plaintext)
        .context("reading environment from stdin")?;

    let password = read_new_password()?;
    if password.is_empty() {
        return Err(CliError::invalid_input("Password cannot be empty").into());
    }

    let (assignments, sealed) =
        envfile::seal(&plaintext, &password).map_err(|e| CliError::from_core("stdin", e))?;

    match destination {
        Destination::File(path) => {
            write_atomic(Path::new(path), &sealed)
                .with_context(|| format!("writing encrypted file {}", path))?;
            tracing::info!(file = path, count = assignments.len(), "wrote encrypted env file");
        }
        Destination::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(&sealed)
                .and_then(|_| out.flush())
                .context("writing encrypted data to stdout")?;
        }
    }

    Ok(assignments)
}
