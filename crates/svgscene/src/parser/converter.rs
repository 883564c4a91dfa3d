// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::svgtree::{self, SvgNode};
use super::whitelist::{self, NodeClass};
use super::{fill, schema, style, switch, text, Error, Options};
use crate::{AId, Attributes, EId, Element, Node, Tree};

pub(crate) struct State<'a> {
    pub(crate) opt: &'a Options,
}

/// Converts an input document into a [`Tree`].
pub(crate) fn convert_doc(svg_doc: &svgtree::Document, opt: &Options) -> Result<Tree, Error> {
    let svg = svg_doc.root_element().ok_or(Error::NoSupportedRoot)?;

    let state = State { opt };

    let mut root = match convert_element(svg, &state) {
        Some(Node::Element(e)) => e,
        _ => return Err(Error::NoSupportedRoot),
    };

    if root.kind == EId::Svg {
        apply_size_override(&mut root.attributes, opt);
    }

    Ok(Tree { root })
}

fn apply_size_override(attrs: &mut Attributes, opt: &Options) {
    if let Some(ref width) = opt.width {
        attrs.insert(AId::Width, width.clone());
    }

    if let Some(ref height) = opt.height {
        attrs.insert(AId::Height, height.clone());
    }
}

/// Converts a single raw node.
///
/// Returns `None` for unsupported elements, exhausted `switch` elements
/// and text nodes.
pub(crate) fn convert_element(node: SvgNode, state: &State) -> Option<Node> {
    let tag_name = node.tag_name()?;

    match whitelist::classify(tag_name) {
        NodeClass::Supported(eid) => Some(Node::Element(convert_supported(node, eid, state))),
        NodeClass::Switch => switch::convert(node, state),
        NodeClass::Ignored => {
            log::debug!("Unsupported element '{}'. Skipped.", tag_name);
            None
        }
    }
}

fn convert_supported(node: SvgNode, eid: EId, state: &State) -> Element {
    let mut children = convert_children(node, eid, state);
    whitelist::trim_whitespace_children(&mut children);

    Element {
        kind: eid,
        attributes: resolve_attributes(node, eid, state),
        children,
    }
}

fn convert_children(parent: SvgNode, eid: EId, state: &State) -> Vec<Node> {
    let mut children = Vec::new();
    for node in parent.children() {
        if let Some(text) = node.text() {
            if eid.accepts_text() {
                children.push(Node::Text(text.to_string()));
            }

            continue;
        }

        if let Some(child) = convert_element(node, state) {
            children.push(child);
        }
    }

    children
}

/// Collects element's attributes.
///
/// Presentation attributes go first, followed by the `style` declarations,
/// which override them. Everything outside of the element's schema is skipped.
fn resolve_attributes(node: SvgNode, eid: EId, state: &State) -> Attributes {
    let opt = state.opt;
    let mut attrs = Attributes::default();

    for attr in node.attributes() {
        if attr.name == "style" {
            continue;
        }

        let name = style::camel_case(attr.name);
        let aid = match schema::permitted_attribute(eid, &name) {
            Some(v) => v,
            None => continue,
        };

        let value = style::strip_px(attr.value.as_str());
        attrs.insert(aid, fill::resolve_fill(aid, &value, opt).into_owned());
    }

    if let Some(text) = node.attribute::<&str>("style") {
        for decl in style::parse_style(text) {
            let aid = match schema::permitted_attribute(eid, &decl.name) {
                Some(v) => v,
                None => continue,
            };

            attrs.insert(aid, fill::resolve_fill(aid, &decl.value, opt).into_owned());
        }
    }

    if eid == EId::Tspan {
        if let Some(y) = attrs.get(AId::Y) {
            let y = text::fix_baseline(y, node);
            attrs.insert(AId::Y, y);
        }
    }

    fill::inject_fill(&mut attrs, opt);

    attrs
}
