use {super::*, html5ever::serialize::Serialize};

/// Serializes a subtree while skipping every node in `removed` along with
/// its descendants.
pub(crate) struct SerializableNode<'a> {
  pub(crate) node: NodeRef<'a, Node>,
  pub(crate) removed: &'a HashSet<NodeId>,
}

impl Serialize for SerializableNode<'_> {
  fn serialize<S: Serializer>(
    &self,
    serializer: &mut S,
    traversal_scope: TraversalScope,
  ) -> io::Result<()> {
    let mut skipping: Option<NodeId> = None;

    for edge in self.node.traverse() {
      match edge {
        Edge::Open(node) => {
          if skipping.is_some() {
            continue;
          }

          if self.removed.contains(&node.id()) {
            skipping = Some(node.id());
            continue;
          }

          if node == self.node
            && traversal_scope == TraversalScope::ChildrenOnly(None)
          {
            continue;
          }

          match node.value() {
            Node::Doctype(doctype) => {
              serializer.write_doctype(doctype.name())?
            }
            Node::Comment(comment) => serializer.write_comment(comment)?,
            Node::Text(text) => serializer.write_text(text)?,
            Node::Element(element) => {
              serializer.start_elem(
                element.name.clone(),
                element.attrs.iter().map(|(name, value)| (name, &value[..])),
              )?;
            }
            _ => {}
          }
        }
        Edge::Close(node) => {
          if let Some(skipped) = skipping {
            if skipped == node.id() {
              skipping = None;
            }

            continue;
          }

          if node == self.node
            && traversal_scope == TraversalScope::ChildrenOnly(None)
          {
            continue;
          }

          if let Some(element) = node.value().as_element() {
            serializer.end_elem(element.name.clone())?;
          }
        }
      }
    }

    Ok(())
  }
}
