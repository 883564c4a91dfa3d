// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
A scene graph representation.

A scene is produced once by the parser and never modified afterwards.
*/

use crate::{AId, EId};

/// A scene tree.
///
/// The root is always an `svg` element, unless the tree was built
/// using [`Tree::from_element`].
#[derive(Clone, PartialEq, Debug)]
pub struct Tree {
    pub(crate) root: Element,
}

impl Tree {
    /// Creates a tree from an already built element.
    pub fn from_element(root: Element) -> Self {
        Tree { root }
    }

    /// Returns the root element.
    #[inline]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Returns an iterator over all elements in the tree, in document order.
    ///
    /// Includes the root element.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        self.root.descendants()
    }
}

/// A scene node.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    /// A supported element.
    Element(Element),
    /// A character data.
    ///
    /// Present only inside `text` and `tspan` elements.
    Text(String),
}

impl Node {
    /// Returns the element, unless it's a text node.
    #[inline]
    pub fn element(&self) -> Option<&Element> {
        match self {
            Node::Element(ref e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Returns the text, unless it's an element.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Element(_) => None,
            Node::Text(ref text) => Some(text),
        }
    }

    /// Returns the element kind, unless it's a text node.
    #[inline]
    pub fn kind(&self) -> Option<EId> {
        self.element().map(Element::kind)
    }
}

/// A supported element.
#[derive(Clone, PartialEq, Debug)]
pub struct Element {
    pub(crate) kind: EId,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Element's kind.
    #[inline]
    pub fn kind(&self) -> EId {
        self.kind
    }

    /// Element's attributes.
    ///
    /// Contains only attributes permitted for this kind.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// A shorthand for `attributes().get()`.
    #[inline]
    pub fn attribute(&self, aid: AId) -> Option<&str> {
        self.attributes.get(aid)
    }

    /// Element's children.
    ///
    /// Never contains whitespace-only text nodes.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns an iterator over child elements.
    #[inline]
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(Node::element)
    }

    /// Returns the first child element.
    #[inline]
    pub fn first_element_child(&self) -> Option<&Element> {
        self.child_elements().next()
    }

    /// Returns an iterator over this element and all of its descendant elements.
    pub fn descendants(&self) -> Descendants {
        Descendants { stack: vec![self] }
    }

    /// Returns the concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut s = String::new();
        collect_text(self, &mut s);
        s
    }
}

fn collect_text(element: &Element, s: &mut String) {
    for child in &element.children {
        match child {
            Node::Element(ref e) => collect_text(e, s),
            Node::Text(ref text) => s.push_str(text),
        }
    }
}

/// An iterator over descendant elements.
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Reversed, so the first child is popped first.
        self.stack.extend(element.child_elements().rev());
        Some(element)
    }
}

/// An insertion-ordered attributes list.
///
/// Each attribute is present only once.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Attributes(Vec<(AId, String)>);

impl Attributes {
    /// Returns an attribute value.
    #[inline]
    pub fn get(&self, aid: AId) -> Option<&str> {
        self.0
            .iter()
            .find(|(id, _)| *id == aid)
            .map(|(_, value)| value.as_str())
    }

    /// Checks that an attribute is present.
    #[inline]
    pub fn contains(&self, aid: AId) -> bool {
        self.0.iter().any(|(id, _)| *id == aid)
    }

    /// Returns an iterator over attributes in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (AId, &str)> {
        self.0.iter().map(|(aid, value)| (*aid, value.as_str()))
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks that there are no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets an attribute.
    ///
    /// An existing value is replaced in place.
    pub(crate) fn insert(&mut self, aid: AId, value: String) {
        match self.0.iter_mut().find(|(id, _)| *id == aid) {
            Some(item) => item.1 = value,
            None => self.0.push((aid, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: EId, children: Vec<Node>) -> Element {
        Element {
            kind,
            attributes: Attributes::default(),
            children,
        }
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut attrs = Attributes::default();
        attrs.insert(AId::Fill, "red".to_string());
        attrs.insert(AId::Width, "10".to_string());
        attrs.insert(AId::Fill, "blue".to_string());

        let list: Vec<_> = attrs.iter().collect();
        assert_eq!(list, [(AId::Fill, "blue"), (AId::Width, "10")]);
    }

    #[test]
    fn descendants_in_document_order() {
        let root = element(
            EId::Svg,
            vec![
                Node::Element(element(EId::G, vec![Node::Element(element(EId::Rect, vec![]))])),
                Node::Element(element(EId::Circle, vec![])),
            ],
        );

        let kinds: Vec<_> = root.descendants().map(Element::kind).collect();
        assert_eq!(kinds, [EId::Svg, EId::G, EId::Rect, EId::Circle]);
    }

    #[test]
    fn child_elements_skip_text_both_ways() {
        let root = element(
            EId::Text,
            vec![
                Node::Element(element(EId::Tspan, vec![])),
                Node::Text("a".to_string()),
                Node::Element(element(EId::Use, vec![])),
            ],
        );

        let kinds: Vec<_> = root.child_elements().rev().map(Element::kind).collect();
        assert_eq!(kinds, [EId::Use, EId::Tspan]);

        let kinds: Vec<_> = root.descendants().map(Element::kind).collect();
        assert_eq!(kinds, [EId::Text, EId::Tspan, EId::Use]);
    }

    #[test]
    fn text_content() {
        let root = element(
            EId::Text,
            vec![
                Node::Text("Hello ".to_string()),
                Node::Element(element(EId::Tspan, vec![Node::Text("World".to_string())])),
            ],
        );

        assert_eq!(root.text_content(), "Hello World");
    }
}
