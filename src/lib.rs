//! Block-based boilerplate classification for HTML documents.
//!
//! A document is partitioned into blocks (candidate container elements),
//! each block is described by a handful of features derived from its
//! subtree, scored by an additive heuristic model, and the scores are then
//! nudged upwards until a minimum share of the document text survives as
//! content.
//!
//! ```
//! use boilerplate::{Classifier, ClassifierOptions, Document};
//!
//! let document = Document::parse(
//!   "<html><body><article><p>Hello, world.</p></article></body></html>",
//! );
//!
//! let classification = Classifier::new(ClassifierOptions::default())
//!   .unwrap()
//!   .classify(&document)
//!   .unwrap();
//!
//! assert_eq!(classification.blocks().len(), 1);
//! ```

use {
  context::Context,
  ego_tree::{NodeId, NodeRef, iter::Edge},
  html5ever::serialize::{
    SerializeOpts, Serializer, TraversalScope, serialize,
  },
  pipeline::Pipeline,
  re::{ATTRIBUTE_TOKEN_SEPARATORS, DIMENSION_VALUE, WHITESPACE_RUNS},
  regex::Regex,
  scraper::{Html, Node},
  serde::{Deserialize, Serialize},
  serializable_node::SerializableNode,
  stage::{
    AdjustScoresStage, DocumentInfoStage, ExtractBlocksStage,
    ExtractFeaturesStage, ScoreBlocksStage, Stage,
  },
  std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
    io,
    sync::LazyLock,
  },
  tracing::{debug, trace},
};

pub use crate::{
  block::{Block, BlockDataset},
  classification::{Classification, Tier},
  classifier::Classifier,
  document::Document,
  document_info::DocumentInfo,
  error::Error,
  model::{DefaultModel, ScoringModel},
  options::{ClassifierOptions, ClassifierOptionsBuilder},
  stage::{Adjustment, adjust_scores},
  text::{normalize, normalized_length},
  tree::Tree,
};

mod block;
mod classification;
mod classifier;
mod context;
mod document;
mod document_info;
mod error;
mod model;
mod options;
mod pipeline;
mod re;
mod serializable_node;
mod stage;
mod text;
mod tree;
mod weights;

/// Score every block starts from, and the line separating content from
/// boilerplate.
pub const NEUTRAL_SCORE: f64 = 50.0;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
