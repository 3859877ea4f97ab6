// Substitutes `words` into each `%s` of `template`, left to right. `%%` renders a single `%`.
// Placeholders beyond the supplied words are left as written and extra words are dropped.
pub fn render(template: &str, words: &[&str]) -> String {
  let mut out = String::with_capacity(template.len() + words.iter().map(|w| w.len()).sum::<usize>());
  let mut words = words.iter();
  let mut chars = template.chars().peekable();

  while let Some(c) = chars.next() {
    if c != '%' {
      out.push(c);
      continue;
    }

    match chars.peek() {
      Some('s') => {
        chars.next();
        match words.next() {
          Some(word) => out.push_str(word),
          None => out.push_str("%s"),
        }
      }
      Some('%') => {
        chars.next();
        out.push('%');
      }
      _ => out.push('%'),
    }
  }

  out
}
