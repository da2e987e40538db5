use crypt_core::ops::RenamePolicy;

use crate::app::{AppContext, TerminalOperator};
use crate::cli::RenameArgs;
use crate::ui::{print, receipt, warning};

pub fn handle_rename(ctx: &AppContext, args: &RenameArgs) -> anyhow::Result<()> {
    let mut settings = ctx.settings()?;
    if args.no_clobber {
        settings.rename_policy = RenamePolicy::Refuse;
    }

    let mut vault = ctx.open_vault(settings)?;
    let mut operator = TerminalOperator::from_env();
    let displaced = vault.rename(&args.old, &args.new, &mut operator)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    print(
        &ui,
        &receipt(
            &ui,
            &format!("Successfully moved {} to {}", args.old, args.new),
            &[("From", args.old.as_str()), ("To", args.new.as_str())],
        ),
    );
    if displaced.is_some() {
        print(
            &ui,
            &warning(&ui, &format!("Replaced existing {}", args.new)),
        );
    }
    Ok(())
}
