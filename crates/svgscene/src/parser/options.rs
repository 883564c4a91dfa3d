// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Processing options.
#[derive(Clone, Default, Debug)]
pub struct Options {
    /// A fill color override.
    ///
    /// Replaces every explicit `fill`, except `none`.
    /// An empty string is treated as no override.
    ///
    /// Default: `None`
    pub fill: Option<String>,

    /// Apply the fill override to every element.
    ///
    /// Elements without an explicit `fill` will receive one as well.
    /// Has no effect without [`Options::fill`].
    ///
    /// Default: false
    pub fill_all: bool,

    /// Overrides the root `svg` element width.
    ///
    /// Default: `None`
    pub width: Option<String>,

    /// Overrides the root `svg` element height.
    ///
    /// Default: `None`
    pub height: Option<String>,
}

impl Options {
    /// Returns the fill override, if any.
    #[inline]
    pub fn fill_override(&self) -> Option<&str> {
        self.fill.as_deref().filter(|s| !s.is_empty())
    }
}
