use super::*;

/// Boilerplate likelihood bands used to annotate blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
  /// Score of 75 or more.
  Lowest,
  /// Score of 50 or more.
  Low,
  /// Score of 25 or more.
  High,
  Highest,
}

impl Tier {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Lowest => "lowest",
      Self::Low => "low",
      Self::High => "high",
      Self::Highest => "highest",
    }
  }

  #[must_use]
  pub fn from_score(score: f64) -> Self {
    if score >= 75.0 {
      Self::Lowest
    } else if score >= NEUTRAL_SCORE {
      Self::Low
    } else if score >= 25.0 {
      Self::High
    } else {
      Self::Highest
    }
  }
}

impl Display for Tier {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

/// Final scores for every block of a document.
///
/// Nothing in the document is changed by classification; callers decide
/// whether to drop, hide or label the boilerplate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Classification<N> {
  adjustment: Adjustment,
  blocks: BlockDataset<N>,
  info: DocumentInfo,
}

impl<N> Classification<N> {
  #[must_use]
  pub fn adjustment(&self) -> Adjustment {
    self.adjustment
  }

  /// Every block scored below the neutral score.
  pub fn boilerplate(&self) -> impl Iterator<Item = &Block<N>> {
    self
      .blocks
      .iter()
      .filter(|block| !Self::is_content(block.score))
  }

  #[must_use]
  pub fn blocks(&self) -> &[Block<N>] {
    &self.blocks
  }

  /// Every block scored at or above the neutral score.
  pub fn content(&self) -> impl Iterator<Item = &Block<N>> {
    self
      .blocks
      .iter()
      .filter(|block| Self::is_content(block.score))
  }

  #[must_use]
  pub fn info(&self) -> &DocumentInfo {
    &self.info
  }

  #[must_use]
  pub fn into_blocks(self) -> BlockDataset<N> {
    self.blocks
  }

  #[must_use]
  pub fn is_content(score: f64) -> bool {
    score >= NEUTRAL_SCORE
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }

  pub(crate) fn new(
    blocks: BlockDataset<N>,
    info: DocumentInfo,
    adjustment: Adjustment,
  ) -> Self {
    Self {
      adjustment,
      blocks,
      info,
    }
  }
}

impl<N: Copy> Classification<N> {
  /// Tier label for each block's element, in document order.
  pub fn annotations(&self) -> impl Iterator<Item = (N, Tier)> + '_ {
    self
      .blocks
      .iter()
      .map(|block| (block.element, Tier::from_score(block.score)))
  }

  /// Elements the caller should remove to strip boilerplate.
  ///
  /// A removed element takes its subtree with it, so content blocks nested
  /// in boilerplate go too.
  pub fn boilerplate_elements(&self) -> impl Iterator<Item = N> + '_ {
    self.boilerplate().map(|block| block.element)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn classification(scores: &[f64]) -> Classification<usize> {
    let blocks = scores
      .iter()
      .enumerate()
      .map(|(index, &score)| {
        let mut block = Block::new(index, index, None, "div");
        block.score = score;
        block
      })
      .collect();

    Classification::new(
      blocks,
      DocumentInfo::new(0, 0, 0.2, 1.0),
      Adjustment::default(),
    )
  }

  #[test]
  fn tier_boundaries() {
    assert_eq!(Tier::from_score(100.0), Tier::Lowest);
    assert_eq!(Tier::from_score(75.0), Tier::Lowest);
    assert_eq!(Tier::from_score(74.0), Tier::Low);
    assert_eq!(Tier::from_score(50.0), Tier::Low);
    assert_eq!(Tier::from_score(49.5), Tier::High);
    assert_eq!(Tier::from_score(49.0), Tier::High);
    assert_eq!(Tier::from_score(25.0), Tier::High);
    assert_eq!(Tier::from_score(24.0), Tier::Highest);
    assert_eq!(Tier::from_score(0.0), Tier::Highest);
  }

  #[test]
  fn tier_display_matches_serialization() {
    for tier in [Tier::Lowest, Tier::Low, Tier::High, Tier::Highest] {
      assert_eq!(
        serde_json::to_value(tier).unwrap(),
        serde_json::Value::String(tier.to_string())
      );
    }
  }

  #[test]
  fn neutral_score_is_content() {
    let classification = classification(&[50.0, 49.5, 80.0, 10.0]);

    assert_eq!(
      classification
        .content()
        .map(|block| block.element)
        .collect::<Vec<_>>(),
      vec![0, 2]
    );

    assert_eq!(
      classification.boilerplate_elements().collect::<Vec<_>>(),
      vec![1, 3]
    );
  }

  #[test]
  fn annotations_follow_document_order() {
    let classification = classification(&[90.0, 30.0, 60.0]);

    assert_eq!(
      classification.annotations().collect::<Vec<_>>(),
      vec![(0, Tier::Lowest), (1, Tier::High), (2, Tier::Low)]
    );
  }
}
