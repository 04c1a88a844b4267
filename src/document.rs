use super::*;

/// An HTML document parsed by `scraper`, exposed to the classifier through
/// [`Tree`].
#[derive(Debug, Clone)]
pub struct Document {
  html: Html,
}

impl Document {
  #[must_use]
  pub fn element_count(&self) -> usize {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_element())
      .count()
  }

  #[must_use]
  pub fn html(&self) -> &Html {
    &self.html
  }

  fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(id)
  }

  #[must_use]
  pub fn parse(markup: &str) -> Self {
    Self {
      html: Html::parse_document(markup),
    }
  }

  /// Serializes the document with the subtree of every boilerplate block
  /// left out. The document itself is not modified.
  pub fn prune(
    &self,
    classification: &Classification<NodeId>,
  ) -> io::Result<String> {
    let removed =
      classification.boilerplate_elements().collect::<HashSet<_>>();

    debug!(removed = removed.len(), "pruning boilerplate blocks");

    let opts = SerializeOpts {
      scripting_enabled: false,
      traversal_scope: TraversalScope::IncludeNode,
      create_missing_parent: false,
    };

    let mut buffer = Vec::new();

    let serializer = SerializableNode {
      node: self.html.tree.root(),
      removed: &removed,
    };

    serialize(&mut buffer, &serializer, opts)?;

    String::from_utf8(buffer)
      .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
  }
}

impl From<Html> for Document {
  fn from(html: Html) -> Self {
    Self { html }
  }
}

impl Tree for Document {
  type Node = NodeId;

  fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
    self.node(node)?.value().as_element()?.attr(name)
  }

  fn body(&self) -> Option<NodeId> {
    let html = self.html.tree.root().children().find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == "html"),
    )?;

    html
      .children()
      .find(|child| {
        matches!(child.value(), Node::Element(el) if el.name() == "body")
      })
      .map(|body| body.id())
  }

  fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
    self
      .node(node)
      .into_iter()
      .flat_map(|node| node.children())
      .map(|child| child.id())
  }

  fn parent(&self, node: NodeId) -> Option<NodeId> {
    self.node(node)?.parent().map(|parent| parent.id())
  }

  fn root(&self) -> NodeId {
    self.html.tree.root().id()
  }

  fn tag_name(&self, node: NodeId) -> Option<&str> {
    self
      .node(node)?
      .value()
      .as_element()
      .map(|element| element.name())
  }

  fn text(&self, node: NodeId) -> String {
    let Some(node) = self.node(node) else {
      return String::new();
    };

    let mut text = String::new();

    for descendant in node.descendants() {
      if let Node::Text(value) = descendant.value() {
        text.push_str(value);
      }
    }

    text
  }
}
