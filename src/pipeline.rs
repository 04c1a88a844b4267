use super::*;

pub(crate) struct Pipeline<'a, T: Tree> {
  context: Context<'a, T>,
  stages: Vec<Box<dyn Stage<T> + 'a>>,
}

impl<'a, T: Tree> Pipeline<'a, T> {
  fn add_stage(&mut self, stage: Box<dyn Stage<T> + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a, T>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a, T>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  pub(crate) fn with_default_stages<M>(
    context: Context<'a, T>,
    model: &'a M,
  ) -> Self
  where
    M: ScoringModel<T::Node> + ?Sized,
  {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(ExtractBlocksStage));
    pipeline.add_stage(Box::new(ExtractFeaturesStage));
    pipeline.add_stage(Box::new(DocumentInfoStage));
    pipeline.add_stage(Box::new(ScoreBlocksStage { model }));
    pipeline.add_stage(Box::new(AdjustScoresStage));

    pipeline
  }
}
