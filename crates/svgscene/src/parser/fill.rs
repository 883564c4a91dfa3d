// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use super::Options;
use crate::{AId, Attributes};

/// Replaces an explicit `fill` value with the fill override.
///
/// `none` is never replaced: an element that asks for no fill keeps it.
/// All other attributes are returned untouched.
pub fn resolve_fill<'a>(aid: AId, value: &'a str, opt: &'a Options) -> Cow<'a, str> {
    if aid != AId::Fill || is_none(value) {
        return Cow::Borrowed(value);
    }

    match opt.fill_override() {
        Some(fill) => Cow::Borrowed(fill),
        None => Cow::Borrowed(value),
    }
}

/// Forces the fill override onto an element when `Options::fill_all` is set.
///
/// Elements without a `fill` receive one. An explicit `fill="none"` is preserved.
pub(crate) fn inject_fill(attrs: &mut Attributes, opt: &Options) {
    if !opt.fill_all {
        return;
    }

    let fill = match opt.fill_override() {
        Some(v) => v,
        None => return,
    };

    if attrs.get(AId::Fill).map(is_none) == Some(true) {
        return;
    }

    attrs.insert(AId::Fill, fill.to_string());
}

#[inline]
fn is_none(value: &str) -> bool {
    value.trim() == "none"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(fill: Option<&str>, fill_all: bool) -> Options {
        Options {
            fill: fill.map(str::to_string),
            fill_all,
            ..Options::default()
        }
    }

    #[test]
    fn replaces_fill() {
        let opt = opt(Some("#ff0000"), false);
        assert_eq!(resolve_fill(AId::Fill, "blue", &opt), "#ff0000");
    }

    #[test]
    fn keeps_none() {
        let opt = opt(Some("#ff0000"), true);
        assert_eq!(resolve_fill(AId::Fill, "none", &opt), "none");
    }

    #[test]
    fn keeps_other_attributes() {
        let opt = opt(Some("#ff0000"), false);
        assert_eq!(resolve_fill(AId::Stroke, "blue", &opt), "blue");
    }

    #[test]
    fn no_override() {
        let opt = opt(None, true);
        assert_eq!(resolve_fill(AId::Fill, "blue", &opt), "blue");
    }

    #[test]
    fn empty_override() {
        let opt = opt(Some(""), false);
        assert_eq!(resolve_fill(AId::Fill, "blue", &opt), "blue");
    }

    #[test]
    fn inject_missing_fill() {
        let mut attrs = Attributes::default();
        inject_fill(&mut attrs, &opt(Some("#ff0000"), true));
        assert_eq!(attrs.get(AId::Fill), Some("#ff0000"));
    }

    #[test]
    fn inject_requires_fill_all() {
        let mut attrs = Attributes::default();
        inject_fill(&mut attrs, &opt(Some("#ff0000"), false));
        assert_eq!(attrs.get(AId::Fill), None);
    }

    #[test]
    fn inject_keeps_none() {
        let mut attrs = Attributes::default();
        attrs.insert(AId::Fill, "none".to_string());
        inject_fill(&mut attrs, &opt(Some("#ff0000"), true));
        assert_eq!(attrs.get(AId::Fill), Some("none"));
    }
}
