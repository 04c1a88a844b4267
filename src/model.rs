use super::*;

/// Assigns a score in `[0, 100]` to a block.
///
/// Scores below [`NEUTRAL_SCORE`] mark likely boilerplate. Any
/// `Fn(&Block<N>, &DocumentInfo) -> f64` is a model.
pub trait ScoringModel<N> {
  fn score(&self, block: &Block<N>, info: &DocumentInfo) -> f64;
}

impl<N, F> ScoringModel<N> for F
where
  F: Fn(&Block<N>, &DocumentInfo) -> f64,
{
  fn score(&self, block: &Block<N>, info: &DocumentInfo) -> f64 {
    self(block, info)
  }
}

/// The stock additive model: the neutral score plus a set of independent
/// bias terms, clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultModel;

impl<N> ScoringModel<N> for DefaultModel {
  fn score(&self, block: &Block<N>, info: &DocumentInfo) -> f64 {
    let score = NEUTRAL_SCORE
      + Self::depth_bias(block.depth)
      + Self::element_type_bias(&block.element_type)
      + Self::text_length_bias(block.text_length, info.text_length)
      + Self::line_density_bias(block.text_length, block.line_count)
      + Self::anchor_density_bias(
        block.anchor_text_length,
        block.text_length,
      )
      + Self::list_bias(&block.element_type, block.list_item_count)
      + Self::paragraph_bias(block.paragraph_count)
      + Self::field_bias(block.field_count)
      + Self::image_bias(block.image_area, info.area)
      + Self::position_bias(block.element_index, info)
      + Self::attribute_bias(&block.attribute_tokens);

    score.clamp(0.0, 100.0)
  }
}

impl DefaultModel {
  const MAX_DEPTH_BIAS: f64 = 5.0;
  const MAX_IMAGE_BIAS: f64 = 70.0;
  const MAX_LIST_PENALTY: f64 = 20.0;
  const MAX_PARAGRAPH_BIAS: f64 = 20.0;
  const MAX_TEXT_LENGTH_BIAS: f64 = 5.0;

  const LIST_CONTAINERS: &'static [&'static str] = &["dl", "ol", "ul"];

  /// Higher ratios of link text look more like navigation.
  fn anchor_density_bias(anchor_text_length: usize, text_length: usize) -> f64 {
    let ratio = anchor_text_length as f64 / text_length.max(1) as f64;

    if ratio > 0.9 {
      -40.0
    } else if ratio > 0.5 {
      -20.0
    } else if ratio > 0.25 {
      -10.0
    } else {
      0.0
    }
  }

  fn attribute_bias(tokens: &[String]) -> f64 {
    tokens
      .iter()
      .map(|token| weights::attribute_token_weight(token))
      .sum()
  }

  /// Favors shallow blocks, saturating after a few levels either way.
  fn depth_bias(depth: usize) -> f64 {
    (8.0 - 2.0 * depth as f64)
      .clamp(-Self::MAX_DEPTH_BIAS, Self::MAX_DEPTH_BIAS)
  }

  fn element_type_bias(element_type: &str) -> f64 {
    weights::element_type_weight(element_type)
  }

  /// A stray subscribe or search field is the common case; forms proper
  /// carry many fields.
  fn field_bias(field_count: usize) -> f64 {
    match field_count {
      0 => 0.0,
      1..=3 => -10.0,
      4..=9 => -5.0,
      _ => -2.0,
    }
  }

  fn image_bias(image_area: u64, document_area: f64) -> f64 {
    if document_area <= 0.0 {
      return 0.0;
    }

    (100.0 * image_area as f64 / document_area).min(Self::MAX_IMAGE_BIAS)
  }

  fn line_density_bias(text_length: usize, line_count: usize) -> f64 {
    if text_length == 0 {
      return 0.0;
    }

    let average = text_length as f64 / line_count.max(1) as f64;

    if average >= 100.0 {
      5.0
    } else if average >= 50.0 {
      2.0
    } else if average < 10.0 {
      -10.0
    } else if average < 20.0 {
      -5.0
    } else {
      0.0
    }
  }

  fn list_bias(element_type: &str, list_item_count: usize) -> f64 {
    if Self::LIST_CONTAINERS.contains(&element_type) {
      return 0.0;
    }

    -(2.0 * list_item_count as f64).min(Self::MAX_LIST_PENALTY)
  }

  fn paragraph_bias(paragraph_count: usize) -> f64 {
    (5.0 * paragraph_count as f64).min(Self::MAX_PARAGRAPH_BIAS)
  }

  fn position_bias(element_index: usize, info: &DocumentInfo) -> f64 {
    if info.is_peripheral(element_index) {
      -5.0
    } else {
      0.0
    }
  }

  fn text_length_bias(text_length: usize, document_text_length: usize) -> f64 {
    if document_text_length == 0 {
      return 0.0;
    }

    (100.0 * text_length as f64 / document_text_length as f64)
      .min(Self::MAX_TEXT_LENGTH_BIAS)
  }
}
