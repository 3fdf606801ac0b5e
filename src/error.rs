use thiserror::Error;

/// Errors raised while validating or rendering an element tree. Rendering
/// is all-or-nothing: any error aborts the whole render with no partial
/// output.
#[derive(Debug, Error)]
pub enum Error {
  #[error("element must be a non-empty array")]
  EmptyElement,

  #[error("element[0] must be a string, function, or fragment marker")]
  InvalidHead,

  #[error("element must be a scalar or an array")]
  InvalidElement,

  #[error("invalid tag name: {0}")]
  InvalidTagName(String),

  #[error("illegal attribute name: {0}")]
  InvalidAttrName(String),

  #[error("attribute '{0}' must be a string, number, boolean, or null")]
  NonScalarAttr(String),

  #[error("void tag <{0}> can't have children")]
  VoidTagChildren(String),

  #[error("void tag <{0}> can't have a 'rawHtml' prop")]
  VoidTagRawHtml(String),

  #[error("'rawHtml' and children must not be used together")]
  RawHtmlWithChildren,

  #[error("'rawHtml' must be a string")]
  RawHtmlNotString,

  #[error("include children within or after props, but not both")]
  ChildrenConflict,

  #[error("the 'children' prop must be an array of elements")]
  ChildrenNotList,

  #[error("fragment must not have any props")]
  FragmentProps,

  #[error("element tree is nested deeper than {0} levels")]
  TooDeep(usize),

  #[error("JSON serialization failed: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Fmt(#[from] std::fmt::Error),
}
