// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svgscene` converts an [SVG] document into a small, renderer-ready scene graph.

Only a fixed subset of SVG is supported. Everything else is silently removed,
so a renderer receives a tree it can draw as is, instead of a failure caused
by a single unsupported element.

## Features

- Only whitelisted elements are kept: `svg`, `g`, `path`, `circle`, `rect`, `line`,
  `ellipse`, `polygon`, `polyline`, `linearGradient`, `radialGradient`, `stop`,
  `text`, `tspan`, `use` and `defs`
- Each element keeps only attributes permitted for it
- Attribute names are camel-cased (`fill-rule` becomes `fillRule`)
- `px` units are removed
- Inline `style` declarations are merged and take precedence over attributes
- A fill color override, which never touches `fill="none"`
- `tspan` positions are shifted by the nearest font size
- `switch` is resolved to its first supported child
- Whitespace-only text is removed
- SVGZ input

## Limitations

- No CSS beyond the `style` attribute
- `switch` conditional attributes are not evaluated
- No units conversion, no references resolving

[SVG]: https://en.wikipedia.org/wiki/Scalable_Vector_Graphics
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::inherent_to_string)]

mod names;
mod parser;
pub mod source;
mod tree;
mod writer;

pub use names::{AId, EId};
pub use parser::*;
pub use tree::*;
pub use writer::WriteOptions;

pub use xmlwriter::Indent;
