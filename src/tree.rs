use super::*;

/// Read-only view of a document tree.
///
/// This is everything the classifier needs from an HTML parser. Node handles
/// are cheap copies that stay valid for as long as the tree they came from.
pub trait Tree {
  type Node: Copy + Eq;

  /// Attribute value by (lowercase) name. `None` for non-elements.
  fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

  /// The `<body>` element, if the document has one.
  fn body(&self) -> Option<Self::Node>;

  fn children(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;

  fn parent(&self, node: Self::Node) -> Option<Self::Node>;

  fn root(&self) -> Self::Node;

  /// Lowercase tag name, or `None` when `node` is not an element.
  fn tag_name(&self, node: Self::Node) -> Option<&str>;

  /// Raw, unnormalized text content of the subtree rooted at `node`.
  fn text(&self, node: Self::Node) -> String;

  /// Whether `ancestor` is a proper ancestor of `node`.
  fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
    let mut current = self.parent(node);

    while let Some(parent) = current {
      if parent == ancestor {
        return true;
      }

      current = self.parent(parent);
    }

    false
  }

  /// Number of ancestors of `node`, not counting the document root.
  fn depth(&self, node: Self::Node) -> usize {
    let root = self.root();

    let mut depth = 0;
    let mut current = self.parent(node);

    while let Some(parent) = current {
      if parent == root {
        break;
      }

      depth += 1;
      current = self.parent(parent);
    }

    depth
  }

  /// All nodes below `node` in document order, excluding `node` itself.
  fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
    let mut descendants = Vec::new();

    let mut stack = self.children(node).collect::<Vec<_>>();
    stack.reverse();

    while let Some(current) = stack.pop() {
      descendants.push(current);

      let start = stack.len();
      stack.extend(self.children(current));
      stack[start..].reverse();
    }

    descendants
  }

  /// Element descendants of `node` in document order.
  fn elements(&self, node: Self::Node) -> Vec<Self::Node> {
    self
      .descendants(node)
      .into_iter()
      .filter(|&descendant| self.tag_name(descendant).is_some())
      .collect()
  }

  /// Pixel dimensions of an image element, if already known.
  ///
  /// The default reads the `width` and `height` attributes. Trees that
  /// resolve sizes some other way can override this.
  fn image_dimensions(&self, node: Self::Node) -> Option<(u32, u32)> {
    let parse = |name: &str| {
      DIMENSION_VALUE
        .captures(self.attribute(node, name)?)?
        .get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
    };

    Some((parse("width")?, parse("height")?))
  }
}
