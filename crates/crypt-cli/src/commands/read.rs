use std::io::{self, IsTerminal, Write};

use crate::app::{AppContext, TerminalOperator};
use crate::cli::ReadArgs;

/// Print the plaintext exactly as stored.
pub fn handle_read(ctx: &AppContext, args: &ReadArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault(ctx.settings()?)?;
    let mut operator = TerminalOperator::from_env();
    let plaintext = vault.read(&args.name, &mut operator)?;

    let is_tty = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    stdout.write_all(&plaintext)?;
    // Keep the shell prompt off the last line
    if is_tty && !plaintext.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
