use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassifierOptions {
  /// Score added to every below-threshold block on each adjustment pass.
  pub adjustment_delta: f64,
  /// Nominal document pixel area used to normalize image area.
  pub document_area: f64,
  pub max_adjustment_passes: usize,
  /// Longest attribute token kept; `None` keeps every token.
  pub max_token_length: Option<usize>,
  /// Percentage of the document text that should remain visible as content.
  pub minimum_content_threshold: f64,
  /// Fraction of the element sequence treated as head, and again as tail,
  /// for the position penalty.
  pub tail_size: f64,
}

impl Default for ClassifierOptions {
  fn default() -> Self {
    Self {
      adjustment_delta: 2.0,
      document_area: 1500.0 * 2000.0,
      max_adjustment_passes: 20,
      max_token_length: Some(15),
      minimum_content_threshold: 20.0,
      tail_size: 0.2,
    }
  }
}

impl ClassifierOptions {
  #[must_use]
  pub fn builder() -> ClassifierOptionsBuilder {
    ClassifierOptionsBuilder::default()
  }

  /// Fraction of document text the score adjuster aims to keep visible.
  #[must_use]
  pub fn target_ratio(&self) -> f64 {
    self.minimum_content_threshold / 100.0
  }

  pub fn validate(&self) -> Result {
    if !(0.0..0.5).contains(&self.tail_size) {
      return Err(Error::InvalidTailSize {
        value: self.tail_size,
      });
    }

    if !self.document_area.is_finite() || self.document_area <= 0.0 {
      return Err(Error::InvalidDocumentArea {
        value: self.document_area,
      });
    }

    if !(0.0..=100.0).contains(&self.minimum_content_threshold) {
      return Err(Error::InvalidMinimumContentThreshold {
        value: self.minimum_content_threshold,
      });
    }

    if !self.adjustment_delta.is_finite() || self.adjustment_delta <= 0.0 {
      return Err(Error::InvalidAdjustmentDelta {
        value: self.adjustment_delta,
      });
    }

    if self.max_token_length == Some(0) {
      return Err(Error::InvalidMaxTokenLength);
    }

    Ok(())
  }
}

#[derive(Default)]
pub struct ClassifierOptionsBuilder {
  inner: ClassifierOptions,
}

impl ClassifierOptionsBuilder {
  #[must_use]
  pub fn adjustment_delta(self, adjustment_delta: f64) -> Self {
    Self {
      inner: ClassifierOptions {
        adjustment_delta,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ClassifierOptions {
    self.inner
  }

  #[must_use]
  pub fn document_area(self, document_area: f64) -> Self {
    Self {
      inner: ClassifierOptions {
        document_area,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_adjustment_passes(self, max_adjustment_passes: usize) -> Self {
    Self {
      inner: ClassifierOptions {
        max_adjustment_passes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_token_length(self, max_token_length: Option<usize>) -> Self {
    Self {
      inner: ClassifierOptions {
        max_token_length,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn minimum_content_threshold(
    self,
    minimum_content_threshold: f64,
  ) -> Self {
    Self {
      inner: ClassifierOptions {
        minimum_content_threshold,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn tail_size(self, tail_size: f64) -> Self {
    Self {
      inner: ClassifierOptions {
        tail_size,
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    assert!(ClassifierOptions::default().validate().is_ok());
  }

  #[test]
  fn builder_overrides_single_fields() {
    let options = ClassifierOptions::builder()
      .tail_size(0.1)
      .max_token_length(None)
      .build();

    assert_eq!(options.tail_size, 0.1);
    assert_eq!(options.max_token_length, None);
    assert_eq!(options.max_adjustment_passes, 20);
  }

  #[test]
  fn rejects_tail_size_of_one_half() {
    let options = ClassifierOptions::builder().tail_size(0.5).build();

    assert!(matches!(
      options.validate(),
      Err(Error::InvalidTailSize { .. })
    ));
  }

  #[test]
  fn rejects_out_of_range_threshold() {
    let options = ClassifierOptions::builder()
      .minimum_content_threshold(120.0)
      .build();

    assert!(matches!(
      options.validate(),
      Err(Error::InvalidMinimumContentThreshold { .. })
    ));
  }

  #[test]
  fn rejects_non_positive_delta_and_area() {
    assert!(matches!(
      ClassifierOptions::builder()
        .adjustment_delta(0.0)
        .build()
        .validate(),
      Err(Error::InvalidAdjustmentDelta { .. })
    ));

    assert!(matches!(
      ClassifierOptions::builder()
        .document_area(f64::NAN)
        .build()
        .validate(),
      Err(Error::InvalidDocumentArea { .. })
    ));
  }

  #[test]
  fn rejects_zero_token_length() {
    let options = ClassifierOptions::builder()
      .max_token_length(Some(0))
      .build();

    assert!(matches!(
      options.validate(),
      Err(Error::InvalidMaxTokenLength)
    ));
  }

  #[test]
  fn deserializes_partial_config() {
    let options: ClassifierOptions = serde_json::from_str(
      r#"{ "tail-size": 0.25, "max-adjustment-passes": 5 }"#,
    )
    .unwrap();

    assert_eq!(options.tail_size, 0.25);
    assert_eq!(options.max_adjustment_passes, 5);
    assert_eq!(options.adjustment_delta, 2.0);
  }
}
