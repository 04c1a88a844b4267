use super::*;

/// Partitions the body into blocks, in document order.
pub struct ExtractBlocksStage;

impl<T: Tree> Stage<T> for ExtractBlocksStage {
  fn run(&mut self, context: &mut Context<'_, T>) -> Result {
    let blocks = Self::extract(context.tree());

    debug!(blocks = blocks.len(), "extracted blocks");

    context.set_blocks(blocks);

    Ok(())
  }
}

impl ExtractBlocksStage {
  fn extract<T: Tree>(tree: &T) -> BlockDataset<T::Node> {
    let Some(body) = tree.body() else {
      return Vec::new();
    };

    let mut blocks: BlockDataset<T::Node> = Vec::new();

    for (element_index, element) in
      tree.elements(tree.root()).into_iter().enumerate()
    {
      let Some(tag) = tree.tag_name(element) else {
        continue;
      };

      if !Block::<T::Node>::is_block_type(tag)
        || !tree.contains(body, element)
      {
        continue;
      }

      let parent = Self::find_parent(tree, &blocks, element);

      blocks.push(Block::new(element, element_index, parent, tag));
    }

    blocks
  }

  /// Scans the blocks added so far, most recent first, for the closest one
  /// whose element contains `element`.
  fn find_parent<T: Tree>(
    tree: &T,
    blocks: &[Block<T::Node>],
    element: T::Node,
  ) -> Option<usize> {
    blocks
      .iter()
      .rposition(|block| tree.contains(block.element, element))
  }
}
