use indexmap::IndexMap;

pub mod element;
pub mod node;

pub use element::{Component, Element};

pub type Props = IndexMap<String, Element>;

/// Reserved prop carrying pre-rendered HTML to splice in verbatim.
pub const RAW_HTML: &str = "rawHtml";

/// Reserved prop naming a component's children when they are passed
/// inside the props map instead of positionally.
pub const CHILDREN: &str = "children";
