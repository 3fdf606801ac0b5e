use super::element::{Component, Element};
use super::{Props, CHILDREN};
use crate::error::Error;

/// The first entry of a node, resolved once during destructuring.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Head<'a> {
  Tag(&'a str),
  Component(Component),
  Fragment,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Node<'a> {
  pub head: Head<'a>,
  pub props: Option<&'a Props>,
  pub children: &'a [Element],
}

/// Normalizes a raw node sequence into head, props, and children. The
/// second entry is props iff it is a map; anything else after the head
/// is a child.
pub fn destructure(items: &[Element]) -> Result<Node, Error> {
  let (first, rest) = items.split_first().ok_or(Error::EmptyElement)?;

  let head = match first {
    Element::Text(tag) if tag.is_empty() => Head::Fragment,
    Element::Text(tag) => Head::Tag(tag),
    Element::List(marker) if marker.is_empty() => Head::Fragment,
    Element::Component(func) => Head::Component(*func),
    _ => return Err(Error::InvalidHead),
  };

  match rest {
    [Element::Map(props), children @ ..] => Ok(Node {
      head,
      props: Some(props),
      children,
    }),
    children => Ok(Node {
      head,
      props: None,
      children,
    }),
  }
}

/// Invokes a component, merging props-declared and positional children.
/// Declaring both is an error.
pub fn invoke(func: Component, props: Option<&Props>, children: &[Element]) -> Result<Element, Error> {
  let props = match props {
    Some(props) => props,
    None => return Ok(func(&Props::new(), children)),
  };

  match props.get(CHILDREN) {
    None => Ok(func(props, children)),
    Some(declared) => {
      if !children.is_empty() {
        return Err(Error::ChildrenConflict);
      }
      let Element::List(declared) = declared else {
        return Err(Error::ChildrenNotList);
      };
      let mut rest = props.clone();
      rest.shift_remove(CHILDREN);
      Ok(func(&rest, declared))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn splits_props_from_children() {
    let items = vec![
      "div".into(),
      Element::Map(attrs!(id = "a")),
      "one".into(),
      "two".into(),
    ];
    let node = destructure(&items).unwrap();

    assert_eq!(node.head, Head::Tag("div"));
    assert_eq!(node.props, Some(&attrs!(id = "a")));
    assert_eq!(
      node.children,
      vec![Element::from("one"), Element::from("two")].as_slice()
    );
  }

  #[test]
  fn folds_missing_props_into_children() {
    let items = vec!["div".into(), "one".into()];
    let node = destructure(&items).unwrap();

    assert_eq!(node.props, None);
    assert_eq!(node.children, vec![Element::from("one")].as_slice());
  }

  #[test]
  fn element_shaped_second_entry_is_a_child() {
    let items = vec!["div".into(), element!["span", "x"]];
    let node = destructure(&items).unwrap();

    assert_eq!(node.props, None);
    assert_eq!(node.children.len(), 1);
  }

  #[test]
  fn recognizes_fragment_markers() {
    assert_eq!(destructure(&["".into()]).unwrap().head, Head::Fragment);
    assert_eq!(
      destructure(&[Element::List(vec![])]).unwrap().head,
      Head::Fragment
    );
  }

  #[test]
  fn rejects_empty_and_bad_heads() {
    assert!(matches!(destructure(&[]), Err(Error::EmptyElement)));
    assert!(matches!(
      destructure(&[Element::Int(1)]),
      Err(Error::InvalidHead)
    ));
    assert!(matches!(
      destructure(&[element!["div"]]),
      Err(Error::InvalidHead)
    ));
  }

  #[test]
  fn invoke_merges_children_from_props() {
    fn take(props: &Props, children: &[Element]) -> Element {
      assert!(props.get(CHILDREN).is_none());
      Element::Int(children.len() as i64)
    }

    let props = attrs!(children = element!["a", "b"]);
    assert_eq!(invoke(take, Some(&props), &[]).unwrap(), Element::Int(2));
  }

  #[test]
  fn invoke_rejects_children_in_both_places() {
    fn noop(_props: &Props, _children: &[Element]) -> Element {
      Element::Null
    }

    let props = attrs!(children = element!["a"]);
    let positional = ["b".into()];
    assert!(matches!(
      invoke(noop, Some(&props), &positional),
      Err(Error::ChildrenConflict)
    ));
  }
}
