//! Host-facing node adapters.
//!
//! [`PixtralNode`] is the outermost boundary: it always yields a string.
//! [`combine_images`] and [`preview_text`] are its sibling nodes.

mod multi_images;
mod pixtral;
mod preview;

pub use multi_images::combine_images;
pub use pixtral::{display_result, PixtralInputs, PixtralNode};
pub use preview::{preview_text, PreviewOutput, PreviewUi, TextInput};

/// Category under which the nodes are listed by the host.
pub const NODE_CATEGORY: &str = "ComfyUI/Pixtral";
