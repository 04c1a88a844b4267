use super::*;

/// Per-document values shared by every block score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentInfo {
  /// Nominal pixel area used to normalize image area.
  pub area: f64,
  pub element_count: usize,
  /// Element indices above this fall into the document tail.
  pub end_min: usize,
  /// Element indices below this fall into the document head.
  pub front_max: usize,
  /// Normalized text length of the body.
  pub text_length: usize,
}

impl DocumentInfo {
  #[must_use]
  pub fn new(
    text_length: usize,
    element_count: usize,
    tail_size: f64,
    area: f64,
  ) -> Self {
    let front_max = (tail_size * element_count as f64).floor() as usize;

    Self {
      area,
      element_count,
      end_min: element_count.saturating_sub(front_max),
      front_max,
      text_length,
    }
  }

  /// Computes the document information for `tree`. A tree without a body
  /// has no text.
  pub fn from_tree<T: Tree>(tree: &T, options: &ClassifierOptions) -> Self {
    let text_length = tree
      .body()
      .map_or(0, |body| normalized_length(&tree.text(body)));

    let element_count = tree.elements(tree.root()).len();

    Self::new(
      text_length,
      element_count,
      options.tail_size,
      options.document_area,
    )
  }

  /// Whether `element_index` falls in the head or tail of the document.
  #[must_use]
  pub fn is_peripheral(&self, element_index: usize) -> bool {
    element_index < self.front_max || element_index > self.end_min
  }
}
