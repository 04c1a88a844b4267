use super::*;

/// Fills in every block's features from its own subtree.
pub struct ExtractFeaturesStage;

impl<T: Tree> Stage<T> for ExtractFeaturesStage {
  fn run(&mut self, context: &mut Context<'_, T>) -> Result {
    let tree = context.tree();
    let max_token_length = context.options().max_token_length;

    for block in context.blocks_mut() {
      Self::extract(tree, block, max_token_length);
    }

    Ok(())
  }
}

impl ExtractFeaturesStage {
  const ATTRIBUTE_NAMES: &'static [&'static str] =
    &["id", "name", "class", "itemprop", "role"];

  const FIELD_TAGS: &'static [&'static str] =
    &["button", "input", "select", "textarea"];

  const LINE_SPLITTING_TAGS: &'static [&'static str] = &[
    "br", "dd", "dt", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "p",
    "tr",
  ];

  const LIST_ITEM_TAGS: &'static [&'static str] = &["dd", "dt", "li"];

  const PARAGRAPH_TAGS: &'static [&'static str] =
    &["h1", "h2", "h3", "h4", "h5", "h6", "p"];

  const PREFORMATTED_TAGS: &'static [&'static str] = &["code", "pre"];

  /// Lowercase identifying-attribute tokens of `element`, deduplicated in
  /// first-seen order.
  pub(crate) fn attribute_tokens<T: Tree>(
    tree: &T,
    element: T::Node,
    max_token_length: Option<usize>,
  ) -> Vec<String> {
    let joined = Self::ATTRIBUTE_NAMES
      .iter()
      .filter_map(|name| tree.attribute(element, name))
      .collect::<Vec<_>>()
      .join(" ")
      .to_lowercase();

    let mut seen = HashSet::new();

    ATTRIBUTE_TOKEN_SEPARATORS
      .split(&joined)
      .filter(|token| !token.is_empty())
      .filter(|token| {
        max_token_length.is_none_or(|max| token.chars().count() <= max)
      })
      .filter(|token| seen.insert(*token))
      .map(str::to_string)
      .collect()
  }

  fn extract<T: Tree>(
    tree: &T,
    block: &mut Block<T::Node>,
    max_token_length: Option<usize>,
  ) {
    let element = block.element;

    let text = tree.text(element);

    block.depth = tree.depth(element);
    block.text_length = normalized_length(&text);
    block.attribute_tokens =
      Self::attribute_tokens(tree, element, max_token_length);

    block.paragraph_count = tree
      .children(element)
      .filter(|&child| {
        tree
          .tag_name(child)
          .is_some_and(|tag| Self::PARAGRAPH_TAGS.contains(&tag))
      })
      .count();

    let mut anchor_text_length = 0;
    let mut field_count = 0;
    let mut image_area = 0u64;
    let mut line_count = 0;
    let mut list_item_count = 0;

    for descendant in tree.elements(element) {
      let Some(tag) = tree.tag_name(descendant) else {
        continue;
      };

      if tag == "a" && tree.attribute(descendant, "href").is_some() {
        anchor_text_length += normalized_length(&tree.text(descendant));
      }

      if tag == "img"
        && let Some((width, height)) = tree.image_dimensions(descendant)
      {
        image_area =
          image_area.saturating_add(u64::from(width) * u64::from(height));
      }

      if Self::FIELD_TAGS.contains(&tag) {
        field_count += 1;
      }

      if Self::LINE_SPLITTING_TAGS.contains(&tag) {
        line_count += 1;
      }

      if Self::LIST_ITEM_TAGS.contains(&tag) {
        list_item_count += 1;
      }
    }

    if Self::PREFORMATTED_TAGS.contains(&block.element_type.as_str()) {
      line_count += text.matches('\n').count();
    }

    block.anchor_text_length = anchor_text_length;
    block.field_count = field_count;
    block.image_area = image_area;
    block.line_count = line_count.max(1);
    block.list_item_count = list_item_count;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn features(markup: &str) -> Block<NodeId> {
    let document = Document::parse(markup);

    let element = document
      .elements(document.body().unwrap())
      .into_iter()
      .find(|&node| {
        document
          .tag_name(node)
          .is_some_and(|tag| Block::<NodeId>::is_block_type(tag))
      })
      .unwrap();

    let tag = document.tag_name(element).unwrap().to_string();

    let mut block = Block::new(element, 0, None, tag);

    ExtractFeaturesStage::extract(&document, &mut block, Some(15));

    block
  }

  #[test]
  fn text_length_is_normalized() {
    let block = features(
      "<html><body><div>\n   Hello,\n\n   <b>world</b>!   </div></body></html>",
    );

    assert_eq!(block.text_length, "Hello, world!".len());
    assert_eq!(block.depth, 2);
  }

  #[test]
  fn anchor_text_requires_href() {
    let block = features(
      r#"<html><body><div><a href="/a">one  two</a> <a name="x">anchor</a> rest</div></body></html>"#,
    );

    assert_eq!(block.anchor_text_length, "one two".len());
  }

  #[test]
  fn paragraph_count_is_shallow() {
    let block = features(
      "<html><body><div><p>a</p><h2>b</h2><span><p>nested</p></span></div></body></html>",
    );

    assert_eq!(block.paragraph_count, 2);
  }

  #[test]
  fn counts_list_items_fields_and_lines() {
    let block = features(
      r#"
      <html><body><div>
        <ul><li>one</li><li>two</li></ul>
        <dl><dt>term</dt><dd>definition</dd></dl>
        <form><input type="text"><select></select><button>go</button></form>
        <p>text<br>more</p>
      </div></body></html>
      "#,
    );

    assert_eq!(block.list_item_count, 4);
    assert_eq!(block.field_count, 3);
    // li x2, dt, dd, p, br
    assert_eq!(block.line_count, 6);
  }

  #[test]
  fn preformatted_blocks_count_newlines() {
    let block =
      features("<html><body><pre>one\ntwo\nthree</pre></body></html>");

    assert_eq!(block.line_count, 2);
  }

  #[test]
  fn line_count_is_at_least_one() {
    let block = features("<html><body><div></div></body></html>");

    assert_eq!(block.line_count, 1);
    assert_eq!(block.text_length, 0);
  }

  #[test]
  fn image_area_sums_known_dimensions() {
    let block = features(
      r#"<html><body><figure><img width="100" height="50"><img src="x.png"><picture><img width="10" height="10"></picture></figure></body></html>"#,
    );

    assert_eq!(block.image_area, 5_100);
  }

  #[test]
  fn attribute_tokens_are_split_and_deduplicated() {
    let block = features(
      r#"<html><body><div id="main-content" class="post_body Post2 content extraordinarilylongtoken" role="main">x</div></body></html>"#,
    );

    assert_eq!(block.attribute_tokens, vec!["main", "content", "post", "body"]);
  }

  #[test]
  fn attribute_tokens_without_limit_keep_long_tokens() {
    let document = Document::parse(
      r#"<html><body><div class="extraordinarilylongtoken">x</div></body></html>"#,
    );

    let div = document.elements(document.body().unwrap())[0];

    assert_eq!(
      ExtractFeaturesStage::attribute_tokens(&document, div, None),
      vec!["extraordinarilylongtoken"]
    );
  }
}
