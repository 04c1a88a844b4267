use super::*;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum Format {
  /// One line per block: index, parent, tag, tier and score
  #[default]
  Blocks,
  /// Pruned document with boilerplate blocks removed
  Html,
  /// Full classification as JSON
  Json,
}

#[derive(Parser)]
#[command(name = "boilerplate")]
#[command(
  about = "Score the blocks of an HTML file as content or boilerplate",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(long, value_name = "FILE", help = "JSON file with classifier options")]
  config: Option<PathBuf>,
  #[arg(long, help = "Score added to boilerplate blocks on each pass")]
  delta: Option<f64>,
  #[arg(long, help = "Nominal document area in pixels")]
  document_area: Option<f64>,
  #[arg(long, value_enum, default_value_t, help = "Output format")]
  format: Format,
  #[arg(value_name = "FILE", help = "Path to the HTML file to classify")]
  input: PathBuf,
  #[arg(long, help = "Maximum number of score adjustment passes")]
  max_passes: Option<usize>,
  #[arg(long, help = "Longest attribute token considered (0 keeps all)")]
  max_token_length: Option<usize>,
  #[arg(long, help = "Percentage of text to keep as content")]
  minimum_content_threshold: Option<f64>,
  #[arg(long, help = "Fraction of the document treated as head and tail")]
  tail_size: Option<f64>,
}

impl Arguments {
  fn options(&self) -> Result<ClassifierOptions> {
    let mut options = match &self.config {
      Some(path) => {
        let config = fs::read_to_string(path).with_context(|| {
          format!("failed to read config from `{}`", path.display())
        })?;

        serde_json::from_str(&config).with_context(|| {
          format!("failed to parse config `{}`", path.display())
        })?
      }
      None => ClassifierOptions::default(),
    };

    if let Some(delta) = self.delta {
      options.adjustment_delta = delta;
    }

    if let Some(document_area) = self.document_area {
      options.document_area = document_area;
    }

    if let Some(max_passes) = self.max_passes {
      options.max_adjustment_passes = max_passes;
    }

    if let Some(max_token_length) = self.max_token_length {
      options.max_token_length =
        (max_token_length > 0).then_some(max_token_length);
    }

    if let Some(threshold) = self.minimum_content_threshold {
      options.minimum_content_threshold = threshold;
    }

    if let Some(tail_size) = self.tail_size {
      options.tail_size = tail_size;
    }

    Ok(options)
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let classifier = Classifier::new(self.options()?)
      .context("invalid classifier options")?;

    let document = Document::parse(&html);

    let classification = classifier
      .classify(&document)
      .context("failed to classify document")?;

    match self.format {
      Format::Blocks => {
        for (index, block) in classification.blocks().iter().enumerate() {
          let parent = block
            .parent
            .map_or_else(|| "-".to_string(), |parent| parent.to_string());

          let id = document
            .attribute(block.element, "id")
            .map(|id| format!("#{id}"))
            .unwrap_or_default();

          println!(
            "{index:>4} {parent:>4} {:<12} {:<8} {:>6.1} {id}",
            block.element_type,
            Tier::from_score(block.score),
            block.score,
          );
        }

        let adjustment = classification.adjustment();

        println!(
          "passes: {}, visible ratio: {:.3}",
          adjustment.passes, adjustment.ratio
        );
      }
      Format::Html => println!(
        "{}",
        document
          .prune(&classification)
          .context("failed to serialize pruned document")?
      ),
      Format::Json => println!(
        "{}",
        serde_json::to_string_pretty(&classification)
          .context("failed to serialize classification")?
      ),
    }

    Ok(())
  }
}
