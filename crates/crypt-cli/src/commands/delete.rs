use crate::app::{AppContext, TerminalOperator};
use crate::cli::DeleteArgs;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault(ctx.settings()?)?;
    let mut operator = TerminalOperator::from_env();
    vault.delete(&args.name, &mut operator)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &receipt(
                &ui,
                &format!("Successfully deleted {}", args.name),
                &[("Name", args.name.as_str())],
            ),
        );
    }
    Ok(())
}
