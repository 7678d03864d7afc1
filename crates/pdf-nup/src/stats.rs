use crate::options::{ComposeOptions, DuplicateOptions};
use crate::types::*;
use lopdf::Document;

/// Statistics for a duplication run, without producing the document
pub fn duplicate_statistics(
    document: &Document,
    options: &DuplicateOptions,
) -> Result<DuplicateStatistics> {
    options.validate()?;

    let source_pages = document.get_pages().len();
    if source_pages == 0 {
        return Err(NupError::NoPages);
    }

    Ok(DuplicateStatistics {
        source_pages,
        copies: options.copies,
        output_pages: source_pages * options.copies,
    })
}

/// Statistics for a composition run, without producing the document
pub fn compose_statistics(
    document: &Document,
    options: &ComposeOptions,
) -> Result<ComposeStatistics> {
    options.validate()?;

    let source_pages = document.get_pages().len();
    if source_pages == 0 {
        return Err(NupError::NoPages);
    }

    // One sheet per source page, slot_count copies on each
    Ok(ComposeStatistics {
        source_pages,
        slots_per_sheet: options.mode.slot_count(),
        output_pages: source_pages,
    })
}
