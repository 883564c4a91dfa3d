// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use roxmltree::Error;

use super::{Attribute, Document, NodeData, NodeId, NodeKind};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const XML_NAMESPACE_NS: &str = "http://www.w3.org/XML/1998/namespace";

const NODES_LIMIT: usize = 1_000_000;
const DEPTH_LIMIT: u32 = 1024;

impl<'input> Document<'input> {
    /// Parses a [`Document`] from a string.
    pub fn parse_str(text: &'input str) -> Result<Document<'input>, Error> {
        let xml = roxmltree::Document::parse(text)?;
        parse(&xml)
    }

    /// Parses a [`Document`] from a [`roxmltree::Document`].
    pub fn parse_tree(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
        parse(xml)
    }

    fn push_node(&mut self, parent: Option<NodeId>, kind: NodeKind<'input>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData {
            parent,
            next_sibling: None,
            first_child: None,
            last_child: None,
            kind,
        });

        if let Some(parent) = parent {
            match self.nodes[parent.index()].last_child {
                Some(prev) => self.nodes[prev.index()].next_sibling = Some(id),
                None => self.nodes[parent.index()].first_child = Some(id),
            }
            self.nodes[parent.index()].last_child = Some(id);
        }

        id
    }
}

fn parse<'input>(xml: &roxmltree::Document<'input>) -> Result<Document<'input>, Error> {
    let mut doc = Document {
        nodes: Vec::new(),
        attrs: Vec::new(),
    };

    let root = doc.push_node(None, NodeKind::Root);
    parse_xml_node_children(xml.root(), root, 0, &mut doc)?;

    if doc.root_element().is_none() {
        return Err(Error::NoRootNode);
    }

    Ok(doc)
}

fn parse_tag_name<'input>(node: roxmltree::Node<'_, 'input>) -> Option<&'input str> {
    if !node.is_element() {
        return None;
    }

    // Markup intended for a host renderer often omits `xmlns` completely.
    match node.tag_name().namespace() {
        None | Some(SVG_NS) => Some(node.tag_name().name()),
        Some(_) => None,
    }
}

fn parse_xml_node_children<'input>(
    parent: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document<'input>,
) -> Result<(), Error> {
    for node in parent.children() {
        parse_xml_node(node, parent_id, depth, doc)?;
    }

    Ok(())
}

fn parse_xml_node<'input>(
    node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    depth: u32,
    doc: &mut Document<'input>,
) -> Result<(), Error> {
    if depth > DEPTH_LIMIT {
        return Err(Error::NodesLimitReached);
    }

    if node.is_text() {
        if let Some(text) = node.text() {
            doc.push_node(Some(parent_id), NodeKind::Text(text.to_string()));
        }

        return Ok(());
    }

    let tag_name = match parse_tag_name(node) {
        Some(name) => name,
        None => return Ok(()),
    };

    let node_id = parse_svg_element(node, parent_id, tag_name, doc)?;
    parse_xml_node_children(node, node_id, depth + 1, doc)
}

fn parse_svg_element<'input>(
    xml_node: roxmltree::Node<'_, 'input>,
    parent_id: NodeId,
    tag_name: &'input str,
    doc: &mut Document<'input>,
) -> Result<NodeId, Error> {
    if doc.nodes.len() >= NODES_LIMIT {
        return Err(Error::NodesLimitReached);
    }

    let start = doc.attrs.len();
    let attrs = xml_node.attributes().filter(|attr| {
        matches!(
            attr.namespace(),
            None | Some(SVG_NS) | Some(XLINK_NS) | Some(XML_NAMESPACE_NS)
        )
    });
    for attr in attrs {
        doc.attrs.push(Attribute {
            name: attr.name(),
            value: attr.value_storage().clone(),
        });
    }

    let kind = NodeKind::Element {
        tag_name,
        attrs: start..doc.attrs.len(),
    };
    Ok(doc.push_node(Some(parent_id), kind))
}
