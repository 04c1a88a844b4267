use super::*;

/// Replaces every block's score with the model's verdict, clamped to
/// `[0, 100]`. A non-finite verdict is an error.
pub struct ScoreBlocksStage<'a, M: ?Sized> {
  pub(crate) model: &'a M,
}

impl<T, M> Stage<T> for ScoreBlocksStage<'_, M>
where
  T: Tree,
  M: ScoringModel<T::Node> + ?Sized,
{
  fn run(&mut self, context: &mut Context<'_, T>) -> Result {
    let info = *context.info().ok_or(Error::MissingDocumentInfo)?;

    for (index, block) in context.blocks_mut().iter_mut().enumerate() {
      let score = self.model.score(block, &info);

      if !score.is_finite() {
        return Err(Error::NonFiniteScore { index, score });
      }

      block.score = score.clamp(0.0, 100.0);

      trace!(
        index,
        element_type = %block.element_type,
        score = block.score,
        "scored block"
      );
    }

    Ok(())
  }
}
