//! Output sheet rendering

use crate::layout::Placement;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::create_page_xobject;

/// Render one output sheet: a fresh page of the target size with one copy of
/// the source page drawn per placement.
///
/// Each placement gets its own XObject with a fresh copy cache, so the slots
/// share no objects and draw order cannot affect the result.
pub(crate) fn render_sheet(
    output: &mut Document,
    source: &Document,
    source_page_id: ObjectId,
    placements: &[Placement],
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for (idx, placement) in placements.iter().enumerate() {
        let xobject_name = format!("P{}", idx);

        // Independent copy per slot
        let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
        let xobject_id = create_page_xobject(output, source, source_page_id, &mut cache)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(placement_command(&xobject_name, placement));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream command that draws one placement.
///
/// The 90° case uses the counter-clockwise quarter-turn matrix about the
/// content origin; the placement's x operand already compensates for it.
fn placement_command(xobject_name: &str, placement: &Placement) -> String {
    let scale = placement.scale;
    if placement.is_rotated() {
        format!(
            "q 0 {} {} 0 {} {} cm /{} Do Q\n",
            scale, -scale, placement.x, placement.y, xobject_name
        )
    } else {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            scale, scale, placement.x, placement.y, xobject_name
        )
    }
}

/// Attach the collected page references to `pages_tree_id` and install the
/// document catalog.
pub(crate) fn build_page_tree(
    output: &mut Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
