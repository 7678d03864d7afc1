//! XObject creation and object copying
//!
//! A source page becomes a Form XObject in the output document, which the
//! sheet renderer then draws with a transformation matrix. Each XObject
//! carries its own deep copy of the page's resources so that copies placed
//! in different slots share no mutable render state.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{NupError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The XObject's BBox is the source page's MediaBox and its content is the
/// page's content stream(s). Resources are deep-copied into the output
/// document; `cache` deduplicates objects within one copy operation.
pub(crate) fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(default_media_box);

    let content_data = page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Ok(resources) = page_dict.get(b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// MediaBox for US Letter, used when a source page carries none
pub(crate) fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.0 as i64),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.1 as i64),
    ]
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Collect a page's content stream bytes, concatenating stream arrays.
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // no content = blank page
    };

    match contents {
        Object::Reference(id) => stream_bytes(doc, *id),
        Object::Array(refs) => {
            let mut result = Vec::new();
            for obj in refs {
                if let Object::Reference(id) = obj {
                    result.extend_from_slice(&stream_bytes(doc, *id)?);
                    result.push(b'\n');
                }
            }
            Ok(result)
        }
        _ => Ok(Vec::new()),
    }
}

/// Bytes of one content stream, decompressed when possible.
fn stream_bytes(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    match doc.get_object(id)?.as_stream() {
        Ok(stream) => Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone())),
        Err(_) => Ok(Vec::new()),
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// `cache` maps already-copied source object ids to their output ids, so
/// shared objects (fonts, images) are copied once per cache lifetime.
pub(crate) fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;

            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Source page dimensions (width, height) in points.
///
/// Derived from the MediaBox corner coordinates. A page whose MediaBox
/// collapses to zero or negative extent is rejected as an invalid document.
pub(crate) fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let page_dict = doc.get_dictionary(page_id)?;

    let (width, height) = match page_dict.get(b"MediaBox").and_then(|obj| obj.as_array()) {
        Ok(mb) if mb.len() >= 4 => {
            let llx = as_number(&mb[0]).unwrap_or(0.0);
            let lly = as_number(&mb[1]).unwrap_or(0.0);
            let urx = as_number(&mb[2]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.0);
            let ury = as_number(&mb[3]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.1);
            (urx - llx, ury - lly)
        }
        _ => DEFAULT_PAGE_DIMENSIONS,
    };

    if width <= 0.0 || height <= 0.0 {
        return Err(NupError::InvalidDocument(format!(
            "Page {} {} has non-positive dimensions {}x{}",
            page_id.0, page_id.1, width, height
        )));
    }

    Ok((width, height))
}

/// Numeric value of a PDF object
fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
