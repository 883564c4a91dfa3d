// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{EId, Node};

/// A raw element classification.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NodeClass {
    /// A supported element.
    Supported(EId),
    /// A `switch` element that requires a fallback child selection.
    Switch,
    /// Anything else. Dropped together with its subtree.
    Ignored,
}

/// Checks that an element name is a part of the whitelist.
#[inline]
pub fn is_admissible(tag_name: &str) -> bool {
    EId::from_str(tag_name).is_some()
}

/// Classifies an element by its name.
pub fn classify(tag_name: &str) -> NodeClass {
    if let Some(eid) = EId::from_str(tag_name) {
        return NodeClass::Supported(eid);
    }

    if tag_name == "switch" {
        NodeClass::Switch
    } else {
        NodeClass::Ignored
    }
}

/// Removes text nodes that contain only whitespaces.
///
/// Other text is preserved as is, without trimming.
pub fn trim_whitespace_children(children: &mut Vec<Node>) {
    children.retain(|node| match node {
        Node::Text(ref text) => !text.trim().is_empty(),
        Node::Element(_) => true,
    });
}
