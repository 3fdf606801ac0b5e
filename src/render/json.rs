use super::MAX_DEPTH;
use crate::error::Error;
use crate::model::node::{destructure, invoke, Head};
use crate::model::Element;
use serde_json::Value;

/// Renders an element tree to a JSON value: components are expanded,
/// fragments pass through opaquely, and HTML tags stay as data. No
/// escaping or HTML validation happens on this path; the output is meant
/// for a later consumer, not direct emission.
pub fn render_to_json(element: &Element) -> Result<Value, Error> {
  let resolved = resolve(element, 0)?;
  Ok(serde_json::to_value(resolved)?)
}

fn resolve(element: &Element, depth: usize) -> Result<Element, Error> {
  if depth > MAX_DEPTH {
    return Err(Error::TooDeep(MAX_DEPTH));
  }

  let Element::List(items) = element else {
    return Ok(element.clone());
  };

  let node = destructure(items)?;
  match node.head {
    Head::Tag(_) => {
      let mut output = Vec::with_capacity(items.len());
      output.push(items[0].clone());
      if let Some(props) = node.props {
        output.push(Element::Map(props.clone()));
      }
      for child in node.children {
        output.push(resolve(child, depth + 1)?);
      }
      Ok(Element::List(output))
    }
    Head::Component(func) => {
      let expanded = invoke(func, node.props, node.children)?;
      resolve(&expanded, depth + 1)
    }
    Head::Fragment => Ok(element.clone()),
  }
}
