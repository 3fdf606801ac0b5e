use super::Props;
use serde::ser::{Error, SerializeSeq};
use serde::{Serialize, Serializer};

/// A function component: receives its props and children, returns the
/// element to render in its place.
pub type Component = fn(&Props, &[Element]) -> Element;

#[derive(PartialEq, Clone, Debug)]
pub enum Element {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Text(String),
  List(Vec<Element>),
  Map(Props),
  Component(Component),
}

impl Element {
  /// Wraps a function component, coercing a plain `fn` item.
  pub fn component(func: Component) -> Element {
    Element::Component(func)
  }
}

impl From<&str> for Element {
  fn from(value: &str) -> Element {
    Element::Text(value.into())
  }
}

impl From<String> for Element {
  fn from(value: String) -> Element {
    Element::Text(value)
  }
}

impl From<bool> for Element {
  fn from(value: bool) -> Element {
    Element::Bool(value)
  }
}

impl From<i32> for Element {
  fn from(value: i32) -> Element {
    Element::Int(value.into())
  }
}

impl From<i64> for Element {
  fn from(value: i64) -> Element {
    Element::Int(value)
  }
}

impl From<f64> for Element {
  fn from(value: f64) -> Element {
    Element::Float(value)
  }
}

impl From<Vec<Element>> for Element {
  fn from(value: Vec<Element>) -> Element {
    Element::List(value)
  }
}

impl From<Props> for Element {
  fn from(value: Props) -> Element {
    Element::Map(value)
  }
}

impl From<Component> for Element {
  fn from(value: Component) -> Element {
    Element::Component(value)
  }
}

impl<T: Into<Element>> From<Option<T>> for Element {
  fn from(value: Option<T>) -> Element {
    match value {
      Some(value) => value.into(),
      None => Element::Null,
    }
  }
}

impl Serialize for Element {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Element::Null => serializer.serialize_unit(),
      Element::Bool(value) => serializer.serialize_bool(*value),
      Element::Int(value) => serializer.serialize_i64(*value),
      Element::Float(value) => serializer.serialize_f64(*value),
      Element::Text(value) => serializer.serialize_str(value),
      Element::List(items) => {
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
          seq.serialize_element(item)?;
        }
        seq.end()
      }
      Element::Map(props) => props.serialize(serializer),
      Element::Component(_) => Err(S::Error::custom(
        "function components must be resolved before serialization",
      )),
    }
  }
}
