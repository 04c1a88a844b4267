use super::*;

/// Trims `text` and condenses every run of whitespace to a single space.
///
/// Normalizing already-normalized text returns it unchanged.
#[must_use]
pub fn normalize(text: &str) -> String {
  WHITESPACE_RUNS.replace_all(text.trim(), " ").into_owned()
}

/// Character count of `text` after [`normalize`].
#[must_use]
pub fn normalized_length(text: &str) -> usize {
  normalize(text).chars().count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn condenses_and_trims() {
    assert_eq!(normalize("  a \n\t b   c  "), "a b c");
  }

  #[test]
  fn normalization_is_idempotent() {
    let once = normalize("\n  The   quick\tbrown  fox\n");

    assert_eq!(normalize(&once), once);
    assert_eq!(normalized_length(&once), once.chars().count());
  }

  #[test]
  fn length_matches_normalized_string() {
    for input in ["", "   ", "a", " a  b ", "héllo\u{a0} wörld", "x\n\ny"] {
      assert_eq!(
        normalized_length(input),
        normalize(input).chars().count(),
        "{input:?}"
      );
    }
  }
}
