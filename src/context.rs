use super::*;

pub(crate) struct Context<'a, T: Tree> {
  adjustment: Adjustment,
  blocks: BlockDataset<T::Node>,
  info: Option<DocumentInfo>,
  options: &'a ClassifierOptions,
  tree: &'a T,
}

impl<'a, T: Tree> Context<'a, T> {
  pub(crate) fn blocks(&self) -> &BlockDataset<T::Node> {
    &self.blocks
  }

  pub(crate) fn blocks_mut(&mut self) -> &mut BlockDataset<T::Node> {
    &mut self.blocks
  }

  pub(crate) fn info(&self) -> Option<&DocumentInfo> {
    self.info.as_ref()
  }

  pub(crate) fn into_classification(self) -> Result<Classification<T::Node>> {
    Ok(Classification::new(
      self.blocks,
      self.info.ok_or(Error::MissingDocumentInfo)?,
      self.adjustment,
    ))
  }

  pub(crate) fn new(tree: &'a T, options: &'a ClassifierOptions) -> Self {
    Self {
      adjustment: Adjustment::default(),
      blocks: Vec::new(),
      info: None,
      options,
      tree,
    }
  }

  pub(crate) fn options(&self) -> &'a ClassifierOptions {
    self.options
  }

  pub(crate) fn set_adjustment(&mut self, adjustment: Adjustment) {
    self.adjustment = adjustment;
  }

  pub(crate) fn set_blocks(&mut self, blocks: BlockDataset<T::Node>) {
    self.blocks = blocks;
  }

  pub(crate) fn set_info(&mut self, info: DocumentInfo) {
    self.info = Some(info);
  }

  pub(crate) fn tree(&self) -> &'a T {
    self.tree
  }
}
