//! Plain-text rendering of a [`CatalogView`] for `--print` mode.

use std::io::{self, Write};

use crate::{
    model::{
        catalog_view::{CatalogView, LoadState},
        style::StyleTag,
    },
    view::components::placeholder::{
        LOAD_ERROR_MESSAGE, LOAD_ERROR_TITLE, NO_RESULTS_MESSAGE, NO_RESULTS_TITLE,
    },
};

/// Writes the counters, then one block per visible entry (or the matching
/// placeholder text).
pub fn print_view<W: Write>(view: &CatalogView, out: &mut W) -> io::Result<()> {
    let counters = view.counters();

    if let LoadState::Failed(_) = view.load_state() {
        writeln!(out, "{LOAD_ERROR_TITLE}")?;
        writeln!(out, "{LOAD_ERROR_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{} | {}", counters.count_label(), counters.summary())?;
    writeln!(out)?;

    if view.visible().is_empty() {
        writeln!(out, "{NO_RESULTS_TITLE}")?;
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    for entry in view.visible_entries() {
        let class = StyleTag::for_category(&entry.category).class_name();
        if class.is_empty() {
            writeln!(out, "{} [{}]", entry.name, entry.category)?;
        } else {
            writeln!(out, "{} [{}] ({class})", entry.name, entry.category)?;
        }
        writeln!(out, "    {}", entry.description)?;
        writeln!(out, "    {}", entry.url)?;
        writeln!(out)?;
    }

    out.flush()
}
