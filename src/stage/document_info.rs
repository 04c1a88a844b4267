use super::*;

pub struct DocumentInfoStage;

impl<T: Tree> Stage<T> for DocumentInfoStage {
  fn run(&mut self, context: &mut Context<'_, T>) -> Result {
    let info = DocumentInfo::from_tree(context.tree(), context.options());

    debug!(
      text_length = info.text_length,
      element_count = info.element_count,
      front_max = info.front_max,
      end_min = info.end_min,
      "computed document info"
    );

    context.set_info(info);

    Ok(())
  }
}
