#[macro_use]
pub mod macros;
pub mod attrs;
pub mod error;
pub mod escape;
pub mod model;
pub mod render;

pub use attrs::{is_valid_attr_name, is_valid_tag_name, is_void_tag, serialize_attrs, VOID_TAGS};
pub use error::Error;
pub use escape::escape;
pub use model::{Component, Element, Props};
pub use render::html::render_to_html;
pub use render::json::render_to_json;
pub use render::MAX_DEPTH;
