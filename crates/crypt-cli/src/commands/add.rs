use crypt_core::CryptError;

use crate::app::{AppContext, TerminalOperator};
use crate::cli::AddArgs;
use crate::ui::{print, receipt, warning};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let name = args
        .target()
        .ok_or_else(|| CryptError::InvalidInput("Missing record name".to_string()))?;

    let mut vault = ctx.open_vault(ctx.settings()?)?;
    let scheme = vault.settings().scheme;
    let mut operator = TerminalOperator::from_env();
    let displaced = vault.add_file(&args.input, name, &mut operator)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let source = args.input.display().to_string();
    let scheme = scheme.to_string();
    print(
        &ui,
        &receipt(
            &ui,
            &format!("Successfully encrypted {} and stored in {}", source, name),
            &[("Name", name), ("Source", source.as_str()), ("Scheme", scheme.as_str())],
        ),
    );
    if displaced.is_some() {
        print(&ui, &warning(&ui, &format!("Replaced existing {}", name)));
    }
    Ok(())
}
