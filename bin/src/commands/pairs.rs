//! Pairs command implementation.
//!
//! Lists the supported pairs, selected ones first, one page at a time.

use anyhow::Result;
use fxdash_lib::{ITEMS_PER_PAGE, paginate};

use crate::GlobalArgs;
use crate::display::print_pairs_page;
use crate::session::open_dashboard;

/// List supported pairs with an optional search term.
pub(crate) async fn list_pairs(args: &GlobalArgs, search: Option<&str>, page: usize) -> Result<()> {
    let dashboard = open_dashboard(args).await?;

    let selected: Vec<&str> = dashboard.selection().iter().map(|p| p.code()).collect();
    let matches = dashboard
        .catalog()
        .filtered_for_selection(&selected, search.unwrap_or_default());

    let page = paginate(&matches, page, ITEMS_PER_PAGE);
    print_pairs_page(&page, |code| dashboard.is_selected(code));
    Ok(())
}
