use std::io::{self, Write};

use envs_core::Assignment;

/// Render assignments as `export KEY=VALUE` lines for `eval`.
///
/// Values are written verbatim, the same bytes that went into the file.
pub fn render_exports(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(|a| format!("export {}\n", a))
        .collect()
}

pub fn handle_print(assignments: &[Assignment]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(render_exports(assignments).as_bytes())?;
    out.flush()?;
    Ok(())
}
