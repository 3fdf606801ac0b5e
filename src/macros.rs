#[macro_export]
macro_rules! attrs {
  () => { $crate::model::Props::new() };

  ($($key:tt = $value:expr),+ $(,)?) => {
    $crate::model::Props::from_iter([
      $(($crate::attrs!(@key $key).to_string(), $crate::model::Element::from($value)),)+
    ])
  };

  (@key $key:ident) => { stringify!($key) };
  (@key $key:literal) => { $key };
}

#[macro_export]
macro_rules! element {
  ($($item:expr),* $(,)?) => {
    $crate::model::Element::List(vec![$($crate::model::Element::from($item)),*])
  };
}
