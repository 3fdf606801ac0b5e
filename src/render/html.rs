use super::MAX_DEPTH;
use crate::attrs::{is_valid_tag_name, is_void_tag, serialize_attrs};
use crate::error::Error;
use crate::escape::escape;
use crate::model::node::{destructure, invoke, Head, Node};
use crate::model::{Element, Props, RAW_HTML};
use std::fmt::Write;

/// Renders an element tree to an HTML string. Pure and synchronous; any
/// invalid subtree fails the whole render.
pub fn render_to_html(element: &Element) -> Result<String, Error> {
  let mut output = String::new();
  render(element, &mut output, 0)?;
  Ok(output)
}

fn render<W: Write>(element: &Element, writer: &mut W, depth: usize) -> Result<(), Error> {
  if depth > MAX_DEPTH {
    return Err(Error::TooDeep(MAX_DEPTH));
  }

  match element {
    Element::Null | Element::Bool(false) => Ok(()),
    Element::Bool(true) => Ok(writer.write_str("true")?),
    Element::Int(value) => Ok(write!(writer, "{}", value)?),
    Element::Float(value) => Ok(write!(writer, "{}", value)?),
    Element::Text(value) => Ok(writer.write_str(&escape(value))?),
    Element::List(items) => {
      let node = destructure(items)?;
      match node.head {
        Head::Tag(tag) => render_tag(tag, &node, writer, depth),
        Head::Component(func) => {
          let expanded = invoke(func, node.props, node.children)?;
          render(&expanded, writer, depth + 1)
        }
        Head::Fragment => render_fragment(&node, writer, depth),
      }
    }
    Element::Map(_) | Element::Component(_) => Err(Error::InvalidElement),
  }
}

fn render_tag<W: Write>(tag: &str, node: &Node, writer: &mut W, depth: usize) -> Result<(), Error> {
  if !is_valid_tag_name(tag) {
    return Err(Error::InvalidTagName(tag.into()));
  }

  let (raw_html, attrs) = match node.props {
    None => (None, String::new()),
    Some(props) => {
      let rest: Props = props
        .iter()
        .filter(|(name, _)| name.as_str() != RAW_HTML)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
      (props.get(RAW_HTML), serialize_attrs(&rest)?)
    }
  };

  if is_void_tag(tag) {
    if !node.children.is_empty() {
      return Err(Error::VoidTagChildren(tag.into()));
    }
    if raw_html.is_some() {
      return Err(Error::VoidTagRawHtml(tag.into()));
    }
    write!(writer, "<{}{}>", tag, attrs)?;
    return Ok(());
  }

  write!(writer, "<{}{}>", tag, attrs)?;

  if let Some(raw) = raw_html {
    if !node.children.is_empty() {
      return Err(Error::RawHtmlWithChildren);
    }
    let Element::Text(raw) = raw else {
      return Err(Error::RawHtmlNotString);
    };
    writer.write_str(raw)?;
  } else {
    for child in node.children {
      render(child, writer, depth + 1)?;
    }
  }

  write!(writer, "</{}>", tag)?;
  Ok(())
}

fn render_fragment<W: Write>(node: &Node, writer: &mut W, depth: usize) -> Result<(), Error> {
  let raw_html = match node.props {
    None => None,
    Some(props) => {
      if props.keys().any(|name| name != RAW_HTML) {
        return Err(Error::FragmentProps);
      }
      props.get(RAW_HTML)
    }
  };

  if let Some(raw) = raw_html {
    if !node.children.is_empty() {
      return Err(Error::RawHtmlWithChildren);
    }
    let Element::Text(raw) = raw else {
      return Err(Error::RawHtmlNotString);
    };
    writer.write_str(raw)?;
    return Ok(());
  }

  for child in node.children {
    render(child, writer, depth + 1)?;
  }
  Ok(())
}
