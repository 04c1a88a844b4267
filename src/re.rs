use super::*;

pub(crate) static ATTRIBUTE_TOKEN_SEPARATORS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[\s\-_0-9]+").unwrap());

pub(crate) static DIMENSION_VALUE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\s*(\d+)(?:\.\d*)?\s*(?:px)?\s*$").unwrap());

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());
