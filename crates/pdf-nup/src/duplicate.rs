//! Page duplication
//!
//! Replicates every page N times in place: original page, then its copies,
//! consecutively, preserving the original page order. No geometry is
//! involved; copies of a page share one deep-copied content stream and
//! resource dictionary in the output.

use crate::options::DuplicateOptions;
use crate::render::{build_page_tree, copy_object_deep, default_media_box};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Expand a page count into the duplicated page-index sequence.
///
/// For `copies` = N, each index in 0..page_count appears N times
/// consecutively. `copies` < 1 is rejected.
pub fn duplicate_order(page_count: usize, copies: usize) -> Result<Vec<usize>> {
    if copies < 1 {
        return Err(NupError::InvalidArgument(
            "Copy count must be at least 1".to_string(),
        ));
    }

    let mut order = Vec::with_capacity(page_count * copies);
    for index in 0..page_count {
        for _ in 0..copies {
            order.push(index);
        }
    }
    Ok(order)
}

/// Build a new document with every source page duplicated.
pub async fn duplicate(document: &Document, options: &DuplicateOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = *options;

    tokio::task::spawn_blocking(move || duplicate_sync(&document, &options)).await?
}

fn duplicate_sync(source: &Document, options: &DuplicateOptions) -> Result<Document> {
    let pages = source.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();
    if page_ids.is_empty() {
        return Err(NupError::NoPages);
    }

    let order = duplicate_order(page_ids.len(), options.copies)?;

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    // Copy each distinct page body once; the copies reference it.
    let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    let mut bodies = Vec::with_capacity(page_ids.len());
    for &page_id in &page_ids {
        bodies.push(copy_page_body(&mut output, source, page_id, &mut cache)?);
    }

    let mut page_refs = Vec::with_capacity(order.len());
    for index in order {
        let page_id = materialize_page(&mut output, &bodies[index], pages_tree_id);
        page_refs.push(Object::Reference(page_id));
    }

    build_page_tree(&mut output, pages_tree_id, page_refs);

    Ok(output)
}

/// The parts of a page dictionary that survive into each copy
struct PageBody {
    media_box: Vec<Object>,
    contents: Option<Object>,
    resources: Option<Object>,
    rotate: Option<Object>,
}

fn copy_page_body(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<PageBody> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(default_media_box);

    let contents = page_dict
        .get(b"Contents")
        .ok()
        .map(|obj| copy_object_deep(output, source, obj, cache))
        .transpose()?;

    let resources = page_dict
        .get(b"Resources")
        .ok()
        .map(|obj| copy_object_deep(output, source, obj, cache))
        .transpose()?;

    let rotate = page_dict.get(b"Rotate").ok().cloned();

    Ok(PageBody {
        media_box,
        contents,
        resources,
        rotate,
    })
}

fn materialize_page(output: &mut Document, body: &PageBody, parent_id: ObjectId) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(body.media_box.clone()));
    if let Some(contents) = &body.contents {
        page_dict.set("Contents", contents.clone());
    }
    if let Some(resources) = &body.resources {
        page_dict.set("Resources", resources.clone());
    }
    if let Some(rotate) = &body.rotate {
        page_dict.set("Rotate", rotate.clone());
    }
    output.add_object(page_dict)
}
