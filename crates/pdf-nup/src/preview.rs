use crate::compose::compose_pages;
use crate::options::ComposeOptions;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Compose only the first `max_sheets` source pages.
///
/// Useful for showing the effect of an arrangement without processing a
/// large document.
pub async fn generate_preview(
    document: &Document,
    options: &ComposeOptions,
    max_sheets: usize,
) -> Result<Document> {
    options.validate()?;
    if max_sheets == 0 {
        return Err(NupError::InvalidArgument(
            "Preview needs at least one sheet".to_string(),
        ));
    }

    let document = document.clone();
    let options = *options;

    tokio::task::spawn_blocking(move || {
        let pages = document.get_pages();
        let page_ids: Vec<ObjectId> = pages.values().copied().take(max_sheets).collect();
        compose_pages(&document, &page_ids, &options)
    })
    .await?
}
