use crypt_core::ops::UpgradeOutcome;
use crypt_core::Scheme;

use crate::app::{AppContext, TerminalOperator};
use crate::cli::UpgradeArgs;
use crate::ui::{print, receipt};

pub fn handle_upgrade(ctx: &AppContext, args: &UpgradeArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault(ctx.settings()?)?;
    let mut operator = TerminalOperator::from_env();
    let outcome = vault.upgrade(&args.name, &mut operator)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let current = Scheme::CURRENT.to_string();
    let message = match outcome {
        UpgradeOutcome::Upgraded { from } => receipt(
            &ui,
            &format!("Upgraded {} from {} to {}", args.name, from, current),
            &[("Name", args.name.as_str()), ("Scheme", current.as_str())],
        ),
        UpgradeOutcome::AlreadyCurrent => receipt(
            &ui,
            &format!("{} already uses {}", args.name, current),
            &[("Name", args.name.as_str()), ("Scheme", current.as_str())],
        ),
    };
    print(&ui, &message);
    Ok(())
}
