use crate::error::Error;
use crate::escape::escape;
use crate::model::{Element, Props};
use std::fmt::Write;

/// Void tags take no children and no closing tag, e.g. `<br>`.
pub static VOID_TAGS: &[&str] = &[
  "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link", "meta",
  "param", "source", "track", "wbr",
];

/// Custom-element names reserved by SVG and MathML.
static RESERVED_NAMES: &[&str] = &[
  "annotation-xml",
  "color-profile",
  "font-face",
  "font-face-src",
  "font-face-uri",
  "font-face-format",
  "font-face-name",
  "missing-glyph",
];

pub fn is_void_tag(name: &str) -> bool {
  VOID_TAGS.contains(&name)
}

/// An attribute name is legal when it is non-empty and avoids the
/// characters the HTML syntax reserves: space, quotes, `>`, `/`, `=`,
/// `\`, ASCII controls, and the Unicode noncharacters.
pub fn is_valid_attr_name(name: &str) -> bool {
  !name.is_empty()
    && !name.chars().any(|ch| {
      matches!(ch, ' ' | '"' | '\'' | '>' | '/' | '=' | '\\')
        || ch <= '\u{001F}'
        || ('\u{FDD0}'..='\u{FDEF}').contains(&ch)
        || matches!(ch, '\u{FFFE}' | '\u{FFFF}')
    })
}

/// A tag name is legal when it is a plain HTML name (ASCII letter then
/// letters/digits) or a valid custom-element name per the WHATWG Custom
/// Elements spec.
pub fn is_valid_tag_name(name: &str) -> bool {
  is_plain_tag_name(name) || is_custom_element_name(name)
}

fn is_plain_tag_name(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) if first.is_ascii_alphabetic() => chars.all(|ch| ch.is_ascii_alphanumeric()),
    _ => false,
  }
}

fn is_custom_element_name(name: &str) -> bool {
  let mut chars = name.chars();
  let starts_lowercase = matches!(chars.next(), Some('a'..='z'));

  starts_lowercase
    && name.contains('-')
    && chars.all(is_pcen_char)
    && !RESERVED_NAMES.contains(&name)
}

// PotentialCustomElementNameChar from the WHATWG HTML spec.
fn is_pcen_char(ch: char) -> bool {
  matches!(ch,
    '-' | '.' | '_'
    | '0'..='9'
    | 'a'..='z'
    | '\u{B7}'
    | '\u{C0}'..='\u{D6}'
    | '\u{D8}'..='\u{F6}'
    | '\u{F8}'..='\u{37D}'
    | '\u{37F}'..='\u{1FFF}'
    | '\u{200C}'..='\u{200D}'
    | '\u{203F}'..='\u{2040}'
    | '\u{2070}'..='\u{218F}'
    | '\u{2C00}'..='\u{2FEF}'
    | '\u{3001}'..='\u{D7FF}'
    | '\u{F900}'..='\u{FDCF}'
    | '\u{FDF0}'..='\u{FFFD}'
    | '\u{10000}'..='\u{EFFFF}')
}

/// Serializes a props map to an attribute string, one leading space per
/// attribute, in insertion order. `Null` and `false` values drop the
/// attribute entirely; `true` emits a bare name; strings and numbers are
/// stringified and escaped.
pub fn serialize_attrs(props: &Props) -> Result<String, Error> {
  let mut output = String::new();

  for (name, value) in props {
    if matches!(value, Element::Null | Element::Bool(false)) {
      continue;
    }

    if !is_valid_attr_name(name) {
      return Err(Error::InvalidAttrName(name.clone()));
    }

    match value {
      Element::Bool(true) => write!(output, " {}", name)?,
      Element::Text(text) => write!(output, " {}=\"{}\"", name, escape(text))?,
      Element::Int(num) => write!(output, " {}=\"{}\"", name, escape(&num.to_string()))?,
      Element::Float(num) => write!(output, " {}=\"{}\"", name, escape(&num.to_string()))?,
      _ => return Err(Error::NonScalarAttr(name.clone())),
    }
  }

  Ok(output)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn attr_names() {
    assert!(is_valid_attr_name("class"));
    assert!(is_valid_attr_name("data-role"));
    assert!(is_valid_attr_name("@click"));

    assert!(!is_valid_attr_name(""));
    assert!(!is_valid_attr_name("bad name"));
    assert!(!is_valid_attr_name("bad\"name"));
    assert!(!is_valid_attr_name("bad'name"));
    assert!(!is_valid_attr_name("bad>name"));
    assert!(!is_valid_attr_name("bad/name"));
    assert!(!is_valid_attr_name("bad=name"));
    assert!(!is_valid_attr_name("bad\\name"));
    assert!(!is_valid_attr_name("bad\u{0001}name"));
    assert!(!is_valid_attr_name("bad\u{FDD0}name"));
    assert!(!is_valid_attr_name("bad\u{FFFE}name"));
  }

  #[test]
  fn plain_tag_names() {
    assert!(is_valid_tag_name("div"));
    assert!(is_valid_tag_name("SPAN"));
    assert!(is_valid_tag_name("h1"));

    assert!(!is_valid_tag_name(""));
    assert!(!is_valid_tag_name("1div"));
    assert!(!is_valid_tag_name("di v"));
    assert!(!is_valid_tag_name("<div>"));
  }

  #[test]
  fn custom_element_names() {
    assert!(is_valid_tag_name("my-widget"));
    assert!(is_valid_tag_name("x-ü"));
    assert!(is_valid_tag_name("math-α"));

    assert!(!is_valid_tag_name("My-widget"));
    assert!(!is_valid_tag_name("x-Y"));
    assert!(!is_valid_tag_name("my_widget"));
    assert!(!is_valid_tag_name("font-face"));
  }

  #[test]
  fn serializes_mixed_value_types_in_order() {
    let props = attrs!(
      class = "btn primary",
      disabled = true,
      id = "submit-btn",
      onClick = "alert(\"clicked\")",
      dataRole = Element::Null,
      style = Element::Null,
      draggable = false,
      height = 34
    );

    assert_eq!(
      serialize_attrs(&props).unwrap(),
      " class=\"btn primary\" disabled id=\"submit-btn\" onClick=\"alert(&quot;clicked&quot;)\" height=\"34\""
    );
  }

  #[test]
  fn empty_props_serialize_to_nothing() {
    assert_eq!(serialize_attrs(&Props::new()).unwrap(), "");
  }

  #[test]
  fn illegal_names_report_the_offender() {
    let props = attrs!("illegal>attr" = "value");
    match serialize_attrs(&props) {
      Err(Error::InvalidAttrName(name)) => assert_eq!(name, "illegal>attr"),
      other => panic!("expected InvalidAttrName, got {:?}", other),
    }
  }

  #[test]
  fn dropped_values_skip_name_validation() {
    let props = attrs!("illegal>attr" = Element::Null);
    assert_eq!(serialize_attrs(&props).unwrap(), "");
  }

  #[test]
  fn non_scalar_values_are_rejected() {
    let props = attrs!(items = element!["li"]);
    assert!(matches!(
      serialize_attrs(&props),
      Err(Error::NonScalarAttr(_))
    ));
  }
}
