use super::*;

/// Outcome of the score adjustment loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Adjustment {
  /// Number of passes that raised at least one score.
  pub passes: usize,
  /// Visible content ratio after the last pass.
  pub ratio: f64,
}

/// Raises below-threshold scores until enough of the document is visible.
pub struct AdjustScoresStage;

impl<T: Tree> Stage<T> for AdjustScoresStage {
  fn run(&mut self, context: &mut Context<'_, T>) -> Result {
    let options = context.options();

    let document_length = context
      .info()
      .ok_or(Error::MissingDocumentInfo)?
      .text_length;

    let adjustment = adjust_scores(
      context.blocks_mut(),
      document_length,
      options.adjustment_delta,
      options.max_adjustment_passes,
      NEUTRAL_SCORE,
      options.target_ratio(),
    )?;

    debug!(
      passes = adjustment.passes,
      ratio = adjustment.ratio,
      target = options.target_ratio(),
      "adjusted scores"
    );

    context.set_adjustment(adjustment);

    Ok(())
  }
}

/// Adds `delta` to every block scored below `threshold`, one pass at a time,
/// until the visible content ratio reaches `target_ratio`, no block is left
/// below the threshold, or `max_passes` passes have run.
///
/// A block is visible when it and every block enclosing it score at least
/// `threshold`. Scores are only ever raised. Running out of passes before
/// reaching the target is not an error; the returned [`Adjustment`] reports
/// where the loop stopped.
///
/// `delta` must be finite and positive, `threshold` a score in `[0, 100]` and
/// `target_ratio` a fraction in `[0, 1]`.
pub fn adjust_scores<N>(
  blocks: &mut [Block<N>],
  document_length: usize,
  delta: f64,
  max_passes: usize,
  threshold: f64,
  target_ratio: f64,
) -> Result<Adjustment> {
  if !delta.is_finite() || delta <= 0.0 {
    return Err(Error::InvalidAdjustmentDelta { value: delta });
  }

  if !(0.0..=100.0).contains(&threshold) {
    return Err(Error::InvalidAdjustmentThreshold { value: threshold });
  }

  if !(0.0..=1.0).contains(&target_ratio) {
    return Err(Error::InvalidAdjustmentTarget {
      value: target_ratio,
    });
  }

  if document_length == 0 {
    return Ok(Adjustment::default());
  }

  let ratio_of = |blocks: &[Block<N>]| {
    visible_length(blocks, threshold) as f64 / document_length as f64
  };

  let mut ratio = ratio_of(blocks);
  let mut passes = 0;

  while ratio < target_ratio && passes < max_passes {
    let mut total = 0.0;

    for block in blocks.iter_mut() {
      if block.score < threshold {
        block.score += delta;
        total += delta;
      }
    }

    if total == 0.0 {
      break;
    }

    passes += 1;

    ratio = ratio_of(blocks);

    trace!(passes, ratio, added = total, "adjustment pass");
  }

  Ok(Adjustment { passes, ratio })
}

/// Total text length of blocks that are visible: scored at or above
/// `threshold` with no enclosing block below it.
pub(crate) fn visible_length<N>(blocks: &[Block<N>], threshold: f64) -> usize {
  let mut visible = Vec::with_capacity(blocks.len());
  let mut length = 0;

  for block in blocks {
    let is_visible = block.score >= threshold
      && block.parent.is_none_or(|parent| visible[parent]);

    if is_visible {
      length += block.text_length;
    }

    visible.push(is_visible);
  }

  length
}

#[cfg(test)]
mod tests {
  use super::*;

  fn block(parent: Option<usize>, text_length: usize, score: f64) -> Block<()> {
    let mut block = Block::new((), 0, parent, "div");
    block.text_length = text_length;
    block.score = score;
    block
  }

  #[test]
  fn boilerplate_ancestor_hides_descendants() {
    let blocks = vec![block(None, 100, 20.0), block(Some(0), 80, 90.0)];

    assert_eq!(visible_length(&blocks, NEUTRAL_SCORE), 0);
  }

  #[test]
  fn visibility_follows_the_whole_chain() {
    let blocks = vec![
      block(None, 10, 60.0),
      block(Some(0), 20, 40.0),
      block(Some(1), 30, 70.0),
      block(Some(0), 40, 50.0),
    ];

    assert_eq!(visible_length(&blocks, NEUTRAL_SCORE), 50);
  }

  #[test]
  fn satisfied_ratio_needs_no_passes() {
    let mut blocks = vec![block(None, 100, NEUTRAL_SCORE)];

    let adjustment =
      adjust_scores(&mut blocks, 100, 2.0, 20, NEUTRAL_SCORE, 0.2).unwrap();

    assert_eq!(adjustment, Adjustment {
      passes: 0,
      ratio: 1.0
    });
    assert_eq!(blocks[0].score, NEUTRAL_SCORE);
  }

  #[test]
  fn empty_document_is_left_alone() {
    let mut blocks = vec![block(None, 0, 10.0)];

    let adjustment =
      adjust_scores(&mut blocks, 0, 2.0, 20, NEUTRAL_SCORE, 0.2).unwrap();

    assert_eq!(adjustment.passes, 0);
    assert_eq!(blocks[0].score, 10.0);
  }

  #[test]
  fn promotes_until_target_is_met() {
    let mut blocks = vec![block(None, 80, 45.0), block(None, 20, 49.0)];

    let adjustment =
      adjust_scores(&mut blocks, 100, 2.0, 20, NEUTRAL_SCORE, 0.5).unwrap();

    // Pass 1 lifts the short block over the line, pass 2 and 3 the long one.
    assert_eq!(adjustment.passes, 3);
    assert_eq!(adjustment.ratio, 1.0);
    assert_eq!(blocks[0].score, 51.0);
    assert_eq!(blocks[1].score, 51.0);
  }

  #[test]
  fn gives_up_after_max_passes() {
    let mut blocks = vec![block(None, 100, 0.0)];

    let adjustment =
      adjust_scores(&mut blocks, 100, 1.0, 5, NEUTRAL_SCORE, 0.2).unwrap();

    assert_eq!(adjustment.passes, 5);
    assert_eq!(adjustment.ratio, 0.0);
    assert_eq!(blocks[0].score, 5.0);
  }

  #[test]
  fn rejects_delta_that_would_lower_scores() {
    for delta in [-2.0, 0.0, f64::NAN, f64::INFINITY] {
      let mut blocks = vec![block(None, 100, 40.0)];

      assert!(matches!(
        adjust_scores(&mut blocks, 100, delta, 20, NEUTRAL_SCORE, 0.5),
        Err(Error::InvalidAdjustmentDelta { .. })
      ));

      assert_eq!(blocks[0].score, 40.0);
    }
  }

  #[test]
  fn rejects_out_of_range_threshold_and_target() {
    let mut blocks = vec![block(None, 100, 40.0)];

    assert!(matches!(
      adjust_scores(&mut blocks, 100, 2.0, 20, 150.0, 0.5),
      Err(Error::InvalidAdjustmentThreshold { value }) if value == 150.0
    ));

    assert!(matches!(
      adjust_scores(&mut blocks, 100, 2.0, 20, f64::NAN, 0.5),
      Err(Error::InvalidAdjustmentThreshold { .. })
    ));

    assert!(matches!(
      adjust_scores(&mut blocks, 100, 2.0, 20, NEUTRAL_SCORE, 1.5),
      Err(Error::InvalidAdjustmentTarget { value }) if value == 1.5
    ));

    assert!(matches!(
      adjust_scores(&mut blocks, 100, 2.0, 20, NEUTRAL_SCORE, -0.1),
      Err(Error::InvalidAdjustmentTarget { .. })
    ));

    assert_eq!(blocks[0].score, 40.0);
  }

  #[test]
  fn stops_when_nothing_is_below_threshold() {
    // Only part of the document text lives in blocks, so the target can
    // never be reached by promotion alone.
    let mut blocks = vec![block(None, 10, 48.0)];

    let adjustment =
      adjust_scores(&mut blocks, 100, 2.0, 20, NEUTRAL_SCORE, 0.5).unwrap();

    assert_eq!(adjustment.passes, 1);
    assert_eq!(adjustment.ratio, 0.1);
  }

  #[test]
  fn ratio_and_scores_never_decrease() {
    let initial = vec![
      block(None, 30, 10.0),
      block(Some(0), 50, 45.0),
      block(Some(1), 15, 80.0),
      block(None, 5, 30.0),
    ];

    let mut previous_ratio = 0.0;
    let mut previous_scores =
      initial.iter().map(|block| block.score).collect::<Vec<_>>();

    for max_passes in 0..30 {
      let mut blocks = initial.clone();

      let adjustment =
        adjust_scores(&mut blocks, 100, 2.0, max_passes, NEUTRAL_SCORE, 0.9)
          .unwrap();

      assert!(adjustment.passes <= max_passes);
      assert!(adjustment.ratio >= previous_ratio);

      for (block, previous) in blocks.iter().zip(&previous_scores) {
        assert!(block.score >= *previous);
      }

      previous_ratio = adjustment.ratio;
      previous_scores = blocks.iter().map(|block| block.score).collect();
    }
  }
}
