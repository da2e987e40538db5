use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::ui::{hint, print, simple_table, Column};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault(ctx.settings()?)?;
    let rows = vault.list();
    let ui = ctx.ui_context(args.json, args.format.as_deref());

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        if ui.mode.is_pretty() && !ctx.quiet() {
            print(&ui, "No files stored yet.");
            print(&ui, &hint(&ui, "crypt enc -i <FILE> <NAME>"));
        }
        return Ok(());
    }

    let columns = [Column::new("Path"), Column::new("Hint")];
    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| vec![row.name, row.hint])
        .collect();
    print(&ui, &simple_table(&ui, &columns, &cells));
    Ok(())
}
