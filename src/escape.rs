/// Escapes `&`, `<`, `>`, `"`, and `'` for safe inclusion in HTML text or
/// attribute values. Everything else, Unicode included, passes through.
/// Applying it twice double-escapes `&`; callers escape exactly once.
pub fn escape(text: &str) -> String {
  let mut output = String::with_capacity(text.len());

  for ch in text.chars() {
    match ch {
      '&' => output.push_str("&amp;"),
      '<' => output.push_str("&lt;"),
      '>' => output.push_str("&gt;"),
      '"' => output.push_str("&quot;"),
      '\'' => output.push_str("&#39;"),
      _ => output.push(ch),
    }
  }

  output
}
