//! Preference commands that work without the rate API.

use anyhow::{Context, Result};
use fxdash_lib::{Timeframe, ViewTab};
use fxdash_prefs::keys;

use crate::GlobalArgs;
use crate::session::preferences;

/// Saves the timeframe.
pub(crate) fn set_timeframe(args: &GlobalArgs, timeframe: Timeframe) -> Result<()> {
    let mut prefs = preferences(args)?;
    prefs
        .set_timeframe(timeframe)
        .context("Failed to save timeframe")?;
    println!("Timeframe set to {timeframe}");
    Ok(())
}

/// Saves the active view.
pub(crate) fn set_view(args: &GlobalArgs, view: ViewTab) -> Result<()> {
    let mut prefs = preferences(args)?;
    prefs.set_tab(view).context("Failed to save view")?;
    println!("View set to {view}");
    Ok(())
}

/// Prints the saved preferences.
pub(crate) fn status(args: &GlobalArgs) -> Result<()> {
    let prefs = preferences(args)?;
    let store = prefs.store();

    let selected: Vec<&str> = store
        .entries()
        .iter()
        .filter(|(_, value)| value.as_str() == "true")
        .filter_map(|(key, _)| keys::currency_code(key))
        .collect();

    println!("Preferences: {}", store.path().display());
    println!("Timeframe:   {}", prefs.timeframe());
    println!("View:        {}", prefs.view_tab());
    if selected.is_empty() {
        println!("Selected:    (none)");
    } else {
        println!("Selected:    {}", selected.join(", "));
    }

    Ok(())
}
