// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
A read-only SVG node tree.

Unlike `roxmltree`, it contains only elements from the SVG namespace (or without one)
and their character data. Element names are kept as is, so unsupported elements
are still present and the converter decides what to do with them.
*/

use std::num::NonZeroU32;
use std::ops::Range;
use std::str::FromStr;

mod parse;

/// An SVG tree container.
///
/// Nodes are stored in a flat list and reference each other by index.
/// Parent links are used only for lookups.
pub struct Document<'input> {
    nodes: Vec<NodeData<'input>>,
    attrs: Vec<Attribute<'input>>,
}

impl<'input> Document<'input> {
    /// Returns the root node.
    #[inline]
    pub fn root<'a>(&'a self) -> SvgNode<'a, 'input> {
        self.node(NodeId::new(0))
    }

    /// Returns the root element.
    ///
    /// Returns `None` when the document has no elements.
    #[inline]
    pub fn root_element<'a>(&'a self) -> Option<SvgNode<'a, 'input>> {
        self.root().first_element_child()
    }

    #[inline]
    fn node<'a>(&'a self, id: NodeId) -> SvgNode<'a, 'input> {
        SvgNode { id, doc: self }
    }
}

impl std::fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("attributes", &self.attrs.len())
            .finish()
    }
}

/// A node index. Never zero, so `Option<NodeId>` takes no extra space.
#[derive(Clone, Copy, PartialEq, Debug)]
struct NodeId(NonZeroU32);

impl NodeId {
    #[inline]
    fn new(index: usize) -> Self {
        // The number of nodes is limited during parsing.
        debug_assert!(index < u32::MAX as usize);
        NodeId(NonZeroU32::MIN.saturating_add(index as u32))
    }

    #[inline]
    fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

enum NodeKind<'input> {
    Root,
    Element {
        tag_name: &'input str,
        attrs: Range<usize>,
    },
    Text(String),
}

struct NodeData<'input> {
    parent: Option<NodeId>,
    next_sibling: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    kind: NodeKind<'input>,
}

/// An attribute.
///
/// Names are stored exactly as in the markup, without a namespace prefix.
#[derive(Clone)]
pub struct Attribute<'input> {
    /// Attribute's name.
    pub name: &'input str,
    /// Attribute's value.
    pub value: roxmltree::StringStorage<'input>,
}

impl std::fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}={:?}", self.name, self.value.as_str())
    }
}

/// An SVG node.
#[derive(Clone, Copy)]
pub struct SvgNode<'a, 'input: 'a> {
    id: NodeId,
    doc: &'a Document<'input>,
}

impl<'a, 'input: 'a> SvgNode<'a, 'input> {
    #[inline]
    fn data(&self) -> &'a NodeData<'input> {
        &self.doc.nodes[self.id.index()]
    }

    /// Checks if the current node is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data().kind, NodeKind::Element { .. })
    }

    /// Returns element's tag name, unless the current node is text.
    #[inline]
    pub fn tag_name(&self) -> Option<&'input str> {
        match self.data().kind {
            NodeKind::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Returns text node's content.
    ///
    /// Elements have no text of their own.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        match self.data().kind {
            NodeKind::Text(ref text) => Some(text),
            _ => None,
        }
    }

    /// Returns a list of all element's attributes in the document order.
    #[inline]
    pub fn attributes(&self) -> &'a [Attribute<'input>] {
        match self.data().kind {
            NodeKind::Element { ref attrs, .. } => &self.doc.attrs[attrs.clone()],
            _ => &[],
        }
    }

    /// Checks if an attribute is present.
    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes().iter().any(|a| a.name == name)
    }

    /// Parses an attribute value.
    ///
    /// Logs a warning when the value is present but cannot be parsed.
    pub fn attribute<T: FromValue<'a, 'input>>(&self, name: &str) -> Option<T> {
        let value = self
            .attributes()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())?;

        let parsed = T::parse(*self, name, value);
        if parsed.is_none() {
            log::warn!("Failed to parse {} value: '{}'.", name, value);
        }

        parsed
    }

    /// Returns a parent node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.doc.node(id))
    }

    /// Returns the first child element.
    #[inline]
    pub fn first_element_child(&self) -> Option<Self> {
        self.children().find(|n| n.is_element())
    }

    /// Returns an iterator over ancestor nodes starting at this node.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'a, 'input> {
        Ancestors(Some(*self))
    }

    /// Returns an iterator over children nodes.
    #[inline]
    pub fn children(&self) -> Children<'a, 'input> {
        Children(self.data().first_child.map(|id| self.doc.node(id)))
    }
}

impl std::fmt::Debug for SvgNode<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.data().kind {
            NodeKind::Root => write!(f, "Root"),
            NodeKind::Element { tag_name, .. } => {
                write!(f, "Element({} {:?})", tag_name, self.attributes())
            }
            NodeKind::Text(ref text) => write!(f, "Text({:?})", text),
        }
    }
}

/// An iterator over ancestor nodes.
#[derive(Clone, Debug)]
pub struct Ancestors<'a, 'input: 'a>(Option<SvgNode<'a, 'input>>);

impl<'a, 'input: 'a> Iterator for Ancestors<'a, 'input> {
    type Item = SvgNode<'a, 'input>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0.take()?;
        self.0 = node.parent();
        Some(node)
    }
}

/// An iterator over children nodes.
#[derive(Clone, Debug)]
pub struct Children<'a, 'input: 'a>(Option<SvgNode<'a, 'input>>);

impl<'a, 'input: 'a> Iterator for Children<'a, 'input> {
    type Item = SvgNode<'a, 'input>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0.take()?;
        self.0 = node.data().next_sibling.map(|id| node.doc.node(id));
        Some(node)
    }
}

/// A trait for parsing attribute values.
pub trait FromValue<'a, 'input: 'a>: Sized {
    /// Parses an attribute value.
    ///
    /// When `None` is returned, the attribute value will be logged as a parsing failure.
    fn parse(node: SvgNode<'a, 'input>, name: &str, value: &'a str) -> Option<Self>;
}

impl<'a, 'input: 'a> FromValue<'a, 'input> for &'a str {
    #[inline]
    fn parse(_: SvgNode, _: &str, value: &'a str) -> Option<Self> {
        Some(value)
    }
}

impl<'a, 'input: 'a> FromValue<'a, 'input> for svgtypes::Length {
    fn parse(_: SvgNode, _: &str, value: &str) -> Option<Self> {
        svgtypes::Length::from_str(value).ok()
    }
}
