// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::Length;

use super::svgtree::SvgNode;

/// Shifts a `tspan` position by the nearest font size.
///
/// Walks from `node` (inclusive) up to the document root and subtracts
/// the first `font-size` attribute found. Only the nearest one is used,
/// nested sizes are never accumulated.
///
/// `y` can be a list of positions, in which case only the first one is shifted
/// and the rest are kept as is, separated by a space.
///
/// Returns `y` unchanged when no ancestor has a font size
/// or when either value is not a number.
pub fn fix_baseline(y: &str, node: SvgNode) -> String {
    let font_node = match node.ancestors().find(|n| n.has_attribute("font-size")) {
        Some(n) => n,
        None => return y.to_string(),
    };

    let font_size = match font_node.attribute::<Length>("font-size") {
        Some(v) => v.number,
        None => return y.to_string(),
    };

    let first = match svgtypes::LengthListParser::from(y).collect::<Result<Vec<_>, _>>() {
        Ok(list) => list.first().copied(),
        Err(_) => None,
    };

    let first = match first {
        Some(v) => v,
        None => {
            log::warn!("Failed to parse tspan y value: '{}'.", y);
            return y.to_string();
        }
    };

    let mut s = format_number(first.number - font_size);
    let rest = y
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .skip(1);
    for token in rest {
        s.push(' ');
        s.push_str(token);
    }

    s
}

fn format_number(n: f64) -> String {
    // `-0` is a valid number, but looks odd in a scene.
    if n == 0.0 {
        return "0".to_string();
    }

    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::svgtree::Document;

    fn tspan_y(svg: &str, y: &str) -> String {
        let doc = Document::parse_str(svg).unwrap();
        let mut node = doc.root_element().unwrap();
        while node.tag_name() != Some("tspan") {
            node = node.first_element_child().unwrap();
        }

        fix_baseline(y, node)
    }

    #[test]
    fn own_font_size() {
        let svg = "<svg><text font-size='8'><tspan font-size='12' y='20'/></text></svg>";
        assert_eq!(tspan_y(svg, "20"), "8");
    }

    #[test]
    fn parent_font_size() {
        let svg = "<svg><text font-size='8'><tspan y='20'/></text></svg>";
        assert_eq!(tspan_y(svg, "20"), "12");
    }

    #[test]
    fn nearest_font_size_only() {
        let svg = "<svg font-size='100'><g font-size='4'><text><tspan><tspan/></tspan></text></g></svg>";
        assert_eq!(tspan_y(svg, "10"), "6");
    }

    #[test]
    fn no_font_size() {
        let svg = "<svg><text><tspan y='20'/></text></svg>";
        assert_eq!(tspan_y(svg, "20"), "20");
    }

    #[test]
    fn font_size_with_units() {
        let svg = "<svg><text font-size='12px'><tspan/></text></svg>";
        assert_eq!(tspan_y(svg, "20.5"), "8.5");
    }

    #[test]
    fn invalid_y() {
        let svg = "<svg><text font-size='12'><tspan/></text></svg>";
        assert_eq!(tspan_y(svg, "auto"), "auto");
    }

    #[test]
    fn list_shifts_first_only() {
        let svg = "<svg><text font-size='4'><tspan/></text></svg>";
        assert_eq!(tspan_y(svg, "10 20"), "6 20");
        assert_eq!(tspan_y(svg, "10, 20px,30"), "6 20px 30");
    }

    #[test]
    fn invalid_list() {
        let svg = "<svg><text font-size='4'><tspan/></text></svg>";
        assert_eq!(tspan_y(svg, "10 auto"), "10 auto");
        assert_eq!(tspan_y(svg, ""), "");
    }

    #[test]
    fn zero() {
        let svg = "<svg><text font-size='12'><tspan/></text></svg>";
        assert_eq!(tspan_y(svg, "12"), "0");
    }
}
