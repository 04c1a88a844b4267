#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("adjustment delta must be finite and positive (got {value})")]
  InvalidAdjustmentDelta { value: f64 },
  #[error("document area must be finite and positive (got {value})")]
  InvalidDocumentArea { value: f64 },
  #[error("adjustment target ratio must be in [0, 1] (got {value})")]
  InvalidAdjustmentTarget { value: f64 },
  #[error("adjustment threshold must be a score in [0, 100] (got {value})")]
  InvalidAdjustmentThreshold { value: f64 },
  #[error("maximum token length must be at least 1")]
  InvalidMaxTokenLength,
  #[error(
    "minimum content threshold must be a percentage in [0, 100] (got {value})"
  )]
  InvalidMinimumContentThreshold { value: f64 },
  #[error("tail size must be in [0, 0.5) (got {value})")]
  InvalidTailSize { value: f64 },
  #[error("document information was not computed before scoring")]
  MissingDocumentInfo,
  #[error("scoring model returned {score} for block {index}")]
  NonFiniteScore { index: usize, score: f64 },
}
