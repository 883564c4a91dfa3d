// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::converter::{self, State};
use super::svgtree::SvgNode;
use super::whitelist;
use crate::Node;

/// Selects a `switch` child.
///
/// Conditional attributes like `requiredFeatures` or `systemLanguage`
/// are not evaluated. Instead, the first supported child that can be
/// converted is selected, so documents that rely on feature detection
/// may be rendered using a different branch than in a browser.
///
/// Unsupported children, text and nested `switch` elements are not candidates.
pub(crate) fn convert(node: SvgNode, state: &State) -> Option<Node> {
    let child = node
        .children()
        .filter(|n| n.tag_name().map_or(false, whitelist::is_admissible))
        .find_map(|n| converter::convert_element(n, state));

    if child.is_none() {
        log::warn!("'switch' has no supported children. Skipped.");
    }

    child
}
