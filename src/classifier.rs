use super::*;

/// Runs block extraction, feature extraction, scoring and score adjustment
/// over a document.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
  options: ClassifierOptions,
}

impl Classifier {
  /// Classifies `tree` with the [`DefaultModel`].
  pub fn classify<T: Tree>(&self, tree: &T) -> Result<Classification<T::Node>> {
    self.classify_with(tree, &DefaultModel)
  }

  /// Classifies `tree`, scoring blocks with `model`.
  ///
  /// A document without a body or without blocks yields an empty
  /// classification.
  pub fn classify_with<T, M>(
    &self,
    tree: &T,
    model: &M,
  ) -> Result<Classification<T::Node>>
  where
    T: Tree,
    M: ScoringModel<T::Node> + ?Sized,
  {
    let context =
      Pipeline::with_default_stages(Context::new(tree, &self.options), model)
        .run()?;

    let classification = context.into_classification()?;

    debug!(
      blocks = classification.blocks().len(),
      boilerplate = classification.boilerplate().count(),
      "classified document"
    );

    Ok(classification)
  }

  /// Validates `options` and builds a classifier from them.
  pub fn new(options: ClassifierOptions) -> Result<Self> {
    options.validate()?;

    Ok(Self { options })
  }

  #[must_use]
  pub fn options(&self) -> &ClassifierOptions {
    &self.options
  }
}
