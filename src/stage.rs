use super::*;

mod adjust_scores;
mod document_info;
mod extract_blocks;
mod extract_features;
mod score_blocks;

pub use {
  adjust_scores::{AdjustScoresStage, Adjustment, adjust_scores},
  document_info::DocumentInfoStage,
  extract_blocks::ExtractBlocksStage,
  extract_features::ExtractFeaturesStage,
  score_blocks::ScoreBlocksStage,
};

pub(crate) trait Stage<T: Tree> {
  fn run(&mut self, context: &mut Context<'_, T>) -> Result;
}
