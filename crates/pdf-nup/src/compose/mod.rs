//! N-up composition - drawing source pages onto fresh sheets
//!
//! The composition pipeline:
//! 1. Read source page geometry
//! 2. Compute slot placements for the configured arrangement
//! 3. Render one output sheet per source page

mod io;

pub use io::{derive_output_path, load_pdf, save_pdf, validate_input_path};

use crate::layout::compute_placements;
use crate::options::ComposeOptions;
use crate::render::{build_page_tree, get_page_dimensions, render_sheet};
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Compose every source page onto its own N-up output sheet.
///
/// PDF assembly is CPU-bound, so the work runs on a blocking task.
pub async fn compose(document: &Document, options: &ComposeOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = *options;

    tokio::task::spawn_blocking(move || compose_sync(&document, &options)).await?
}

fn compose_sync(source: &Document, options: &ComposeOptions) -> Result<Document> {
    let pages = source.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();
    compose_pages(source, &page_ids, options)
}

/// Compose the given source pages, one output sheet each.
///
/// Placements are recomputed for every sheet rather than cached.
pub(crate) fn compose_pages(
    source: &Document,
    page_ids: &[ObjectId],
    options: &ComposeOptions,
) -> Result<Document> {
    if page_ids.is_empty() {
        return Err(NupError::NoPages);
    }

    let (sheet_width_pt, sheet_height_pt) = options.sheet_dimensions_pt();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for &page_id in page_ids {
        let (source_width, source_height) = get_page_dimensions(source, page_id)?;

        let placements = compute_placements(
            options.mode,
            sheet_width_pt,
            sheet_height_pt,
            source_width,
            source_height,
            options.rotate_grid,
        )?;

        let sheet_id = render_sheet(
            &mut output,
            source,
            page_id,
            &placements,
            sheet_width_pt,
            sheet_height_pt,
            pages_tree_id,
        )?;
        page_refs.push(Object::Reference(sheet_id));
    }

    build_page_tree(&mut output, pages_tree_id, page_refs);

    Ok(output)
}
