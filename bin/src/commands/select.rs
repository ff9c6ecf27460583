//! Select and deselect command implementations.

use anyhow::{Context, Result};
use fxdash_lib::ITEMS_PER_PAGE;
use inquire::MultiSelect;

use crate::GlobalArgs;
use crate::session::{CliDashboard, open_dashboard};

/// Select the given pairs, or pick interactively when none are given.
pub(crate) async fn select(args: &GlobalArgs, codes: &[String]) -> Result<()> {
    let mut dashboard = open_dashboard(args).await?;

    if codes.is_empty() {
        return pick(&mut dashboard);
    }

    let changed = apply(&mut dashboard, codes, true)?;
    report(&dashboard, changed);
    Ok(())
}

/// Deselect the given pairs.
pub(crate) async fn deselect(args: &GlobalArgs, codes: &[String]) -> Result<()> {
    let mut dashboard = open_dashboard(args).await?;
    let changed = apply(&mut dashboard, codes, false)?;
    report(&dashboard, changed);
    Ok(())
}

fn apply(dashboard: &mut CliDashboard, codes: &[String], selected: bool) -> Result<usize> {
    let mut changed = 0;
    for code in codes {
        if dashboard
            .toggle(code, selected)
            .with_context(|| format!("Failed to update {code}"))?
        {
            changed += 1;
        }
    }
    Ok(changed)
}

/// Interactive multi-select over the catalog, selected pairs first.
fn pick(dashboard: &mut CliDashboard) -> Result<()> {
    let selected: Vec<String> = dashboard
        .selection()
        .iter()
        .map(|p| p.code().to_string())
        .collect();

    let (codes, options): (Vec<String>, Vec<String>) = dashboard
        .catalog()
        .ordered_for_selection(&selected)
        .into_iter()
        .map(|p| (p.code.clone(), p.to_string()))
        .unzip();

    if options.is_empty() {
        println!("The rate API lists no supported pairs.");
        return Ok(());
    }

    let defaults: Vec<usize> = (0..selected.len().min(options.len())).collect();
    let chosen = MultiSelect::new("Select currency pairs:", options)
        .with_default(&defaults)
        .with_page_size(ITEMS_PER_PAGE)
        .raw_prompt()
        .context("Selection cancelled")?;

    let wanted = selection_flags(codes.len(), chosen.iter().map(|option| option.index));

    let mut changed = 0;
    for (code, selected) in codes.iter().zip(wanted) {
        if dashboard.toggle(code, selected)? {
            changed += 1;
        }
    }

    report(dashboard, changed);
    Ok(())
}

/// One flag per option, set for the chosen indices.
fn selection_flags(len: usize, chosen: impl IntoIterator<Item = usize>) -> Vec<bool> {
    let mut flags = vec![false; len];
    for index in chosen {
        if let Some(flag) = flags.get_mut(index) {
            *flag = true;
        }
    }
    flags
}

fn report(dashboard: &CliDashboard, changed: usize) {
    let codes: Vec<&str> = dashboard.selection().iter().map(|p| p.code()).collect();
    println!("Updated {changed} pair(s).");
    if codes.is_empty() {
        println!("No pairs selected.");
    } else {
        println!("Selected: {}", codes.join(", "));
    }
}
