//! PDF rendering glue
//!
//! Everything lopdf-specific lives here: turning source pages into Form
//! XObjects, deep-copying objects between documents, emitting the content
//! stream commands that draw a placement, and assembling the output page
//! tree. The geometry itself comes from [`crate::layout`].

mod page;
mod xobject;

pub(crate) use page::{build_page_tree, render_sheet};
pub(crate) use xobject::{copy_object_deep, default_media_box, get_page_dimensions};
