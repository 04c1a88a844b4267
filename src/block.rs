use super::*;

/// Blocks of one document, in document order.
///
/// The order is load-bearing: a block's `parent` always points at an
/// earlier entry.
pub type BlockDataset<N> = Vec<Block<N>>;

/// A candidate content container and the features derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block<N> {
  #[serde(skip)]
  pub element: N,
  /// Position of the element in a pre-order enumeration of every element
  /// in the document.
  pub element_index: usize,
  /// Index of the closest enclosing block.
  pub parent: Option<usize>,
  pub element_type: String,
  pub depth: usize,
  pub text_length: usize,
  pub anchor_text_length: usize,
  pub list_item_count: usize,
  pub paragraph_count: usize,
  pub field_count: usize,
  pub line_count: usize,
  pub image_area: u64,
  pub attribute_tokens: Vec<String>,
  pub score: f64,
}

impl<N> Block<N> {
  /// Tag names that start a block. Lists and `code` are scored through the
  /// block that contains them.
  pub const ELEMENT_TYPES: &'static [&'static str] = &[
    "article",
    "aside",
    "blockquote",
    "center",
    "div",
    "figure",
    "footer",
    "header",
    "layer",
    "main",
    "multicol",
    "nav",
    "picture",
    "pre",
    "section",
    "table",
    "td",
    "tr",
  ];

  #[must_use]
  pub fn is_block_type(tag: &str) -> bool {
    Self::ELEMENT_TYPES.contains(&tag)
  }

  /// Features start zeroed and the score neutral until the later stages
  /// fill them in.
  pub fn new(
    element: N,
    element_index: usize,
    parent: Option<usize>,
    element_type: impl Into<String>,
  ) -> Self {
    Self {
      element,
      element_index,
      parent,
      element_type: element_type.into(),
      depth: 0,
      text_length: 0,
      anchor_text_length: 0,
      list_item_count: 0,
      paragraph_count: 0,
      field_count: 0,
      line_count: 1,
      image_area: 0,
      attribute_tokens: Vec::new(),
      score: NEUTRAL_SCORE,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_and_code_are_not_blocks() {
    for tag in ["ul", "ol", "dl", "li", "code", "p", "span"] {
      assert!(!Block::<()>::is_block_type(tag), "{tag}");
    }

    for tag in ["div", "article", "td", "center"] {
      assert!(Block::<()>::is_block_type(tag), "{tag}");
    }
  }

  #[test]
  fn serialization_skips_element_handle() {
    let block = Block::new((), 3, Some(0), "div");

    let value = serde_json::to_value(&block).unwrap();

    assert!(value.get("element").is_none());
    assert_eq!(value["element_index"], 3);
    assert_eq!(value["parent"], 0);
    assert_eq!(value["score"], 50.0);
  }
}
