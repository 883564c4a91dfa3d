// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

/// Converts a hyphenated name into camelCase.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded,
/// so `font-size` becomes `fontSize`, while `x-1` stays as is.
pub fn camel_case(name: &str) -> Cow<str> {
    if !name.contains('-') {
        return Cow::Borrowed(name);
    }

    let mut s = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    s.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }

        s.push(c);
    }

    Cow::Owned(s)
}

/// Removes the `px` unit from numbers.
///
/// `10px` becomes `10` and `5px 2.5px` becomes `5 2.5`.
/// No other units are touched and no conversion is performed.
pub fn strip_px(value: &str) -> Cow<str> {
    if !value.contains("px") {
        return Cow::Borrowed(value);
    }

    let bytes = value.as_bytes();
    let mut s = String::with_capacity(value.len());
    let mut start = 0;
    let mut i = 0;
    while let Some(pos) = value[i..].find("px") {
        let idx = i + pos;
        let after = idx + 2;

        let is_number_before = idx > 0 && matches!(bytes[idx - 1], b'0'..=b'9' | b'.');
        let is_unit_end = after == bytes.len() || !bytes[after].is_ascii_alphanumeric();

        if is_number_before && is_unit_end {
            s.push_str(&value[start..idx]);
            start = after;
        }

        i = after;
    }

    if start == 0 {
        return Cow::Borrowed(value);
    }

    s.push_str(&value[start..]);
    Cow::Owned(s)
}

/// A single `style` attribute declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct Declaration<'a> {
    /// A camelCase property name.
    pub name: Cow<'a, str>,
    /// A property value without `px` units.
    pub value: Cow<'a, str>,
}

/// Splits a `style` attribute into declarations.
///
/// Names are camel-cased and values are stripped from `px`.
/// Empty and malformed declarations are skipped without affecting their neighbours.
/// Later declarations are returned as is, so the caller is responsible
/// for letting them override earlier ones.
pub fn parse_style(text: &str) -> Vec<Declaration> {
    text.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let decl = simplecss::DeclarationTokenizer::from(segment).next();
            if decl.is_none() {
                log::warn!("Invalid style declaration: '{}'. Skipped.", segment);
            }
            decl
        })
        .filter(|d| !d.name.is_empty() && !d.value.is_empty())
        .map(|d| Declaration {
            name: camel_case(d.name),
            value: strip_px(d.value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_camel {
        ($name:ident, $text:expr, $result:expr) => {
            #[test]
            fn $name() {
                assert_eq!(camel_case($text), $result);
            }
        };
    }

    test_camel!(camel_1, "fill", "fill");
    test_camel!(camel_2, "font-size", "fontSize");
    test_camel!(camel_3, "stroke-dash-offset", "strokeDashOffset");
    test_camel!(camel_4, "viewBox", "viewBox");
    test_camel!(camel_5, "x-1", "x-1");
    test_camel!(camel_6, "trailing-", "trailing-");

    macro_rules! test_px {
        ($name:ident, $text:expr, $result:expr) => {
            #[test]
            fn $name() {
                assert_eq!(strip_px($text), $result);
            }
        };
    }

    test_px!(px_1, "10px", "10");
    test_px!(px_2, "10", "10");
    test_px!(px_3, "2.5px", "2.5");
    test_px!(px_4, "5px 10px", "5 10");
    test_px!(px_5, "5px,10px", "5,10");
    test_px!(px_6, "10em", "10em");
    test_px!(px_7, "url(#mypx)", "url(#mypx)");
    test_px!(px_8, "10pxx", "10pxx");

    #[test]
    fn style_1() {
        let list = parse_style("fill:red;stroke-width:2px");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "fill");
        assert_eq!(list[0].value, "red");
        assert_eq!(list[1].name, "strokeWidth");
        assert_eq!(list[1].value, "2");
    }

    #[test]
    fn style_empty_segments() {
        let list = parse_style(";fill: red ;; ;opacity:0.5;");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "fill");
        assert_eq!(list[0].value, "red");
        assert_eq!(list[1].name, "opacity");
        assert_eq!(list[1].value, "0.5");
    }

    #[test]
    fn style_malformed_first() {
        let list = parse_style("foo;fill:red;stroke:blue");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "fill");
        assert_eq!(list[0].value, "red");
        assert_eq!(list[1].name, "stroke");
        assert_eq!(list[1].value, "blue");
    }

    #[test]
    fn style_malformed_middle() {
        let list = parse_style("stroke-width:2px;opacity:;fill:red");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "strokeWidth");
        assert_eq!(list[0].value, "2");
        assert_eq!(list[1].name, "fill");
        assert_eq!(list[1].value, "red");
    }

    #[test]
    fn style_empty() {
        assert!(parse_style("").is_empty());
    }
}
