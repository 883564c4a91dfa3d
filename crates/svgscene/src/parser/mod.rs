// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod converter;
mod fill;
mod markup;
mod options;
mod schema;
mod style;
mod switch;
mod text;
mod whitelist;

pub mod svgtree;

pub use fill::resolve_fill;
pub use markup::{extract_svg_fragment, strip_comments};
pub use options::Options;
pub use schema::COMMON_ATTRIBUTES;
pub use style::{camel_case, parse_style, strip_px, Declaration};
pub use text::fix_baseline;
pub use whitelist::{classify, is_admissible, trim_whitespace_children, NodeClass};

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// The input has no `<svg` tag.
    MissingSvgElement,

    /// We do not allow SVG with more than 1_000_000 elements
    /// or nested deeper than 1024 levels for security reasons.
    ElementsLimitReached,

    /// The root element is not supported and produced no scene.
    NoSupportedRoot,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        match e {
            roxmltree::Error::NodesLimitReached => Error::ElementsLimitReached,
            e => Error::ParsingFailed(e),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::MalformedGZip => {
                write!(f, "provided data has a malformed GZip content")
            }
            Error::MissingSvgElement => {
                write!(f, "provided data has no SVG element")
            }
            Error::ElementsLimitReached => {
                write!(f, "the maximum number of SVG elements has been reached")
            }
            Error::NoSupportedRoot => {
                write!(f, "the root element is not supported")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}

impl crate::Tree {
    /// Parses `Tree` from an SVG data.
    ///
    /// Can contain an SVG string or a gzip compressed data.
    pub fn from_data(data: &[u8], opt: &Options) -> Result<Self, Error> {
        let text = decode_data(data)?;
        Self::from_str(&text, opt)
    }

    /// Parses `Tree` from an SVG string.
    ///
    /// The `<svg>` fragment is extracted first, so the string can contain
    /// an XML declaration or any surrounding markup.
    pub fn from_str(text: &str, opt: &Options) -> Result<Self, Error> {
        let text = markup::extract_svg_fragment(text)?;

        let xml_opt = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };

        let doc = roxmltree::Document::parse_with_options(&text, xml_opt)?;

        Self::from_xmltree(&doc, opt)
    }

    /// Parses `Tree` from `roxmltree::Document`.
    pub fn from_xmltree(doc: &roxmltree::Document, opt: &Options) -> Result<Self, Error> {
        let doc = svgtree::Document::parse_tree(doc)?;
        converter::convert_doc(&doc, opt)
    }
}

/// Converts a single raw node into a scene node.
///
/// Unlike [`Tree::from_xmltree`](crate::Tree::from_xmltree), the root `svg`
/// element is not special-cased, so size overrides are ignored.
///
/// Returns `None` for unsupported nodes, text nodes and `switch` elements
/// without supported children.
pub fn build_scene(node: svgtree::SvgNode, opt: &Options) -> Option<crate::Node> {
    let state = converter::State { opt };
    converter::convert_element(node, &state)
}

/// Converts an SVG string into a scene.
///
/// Errors are logged and `None` is returned instead.
pub fn convert(text: &str, opt: &Options) -> Option<crate::Tree> {
    match crate::Tree::from_str(text, opt) {
        Ok(tree) => Some(tree),
        Err(e) => {
            log::error!("Failed to convert an SVG: {}.", e);
            None
        }
    }
}

/// Decodes an SVG data into a string.
///
/// Gzip compressed data is decompressed first.
pub fn decode_data(data: &[u8]) -> Result<String, Error> {
    if data.starts_with(&[0x1f, 0x8b]) {
        let data = decompress_svgz(data)?;
        String::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)
    } else {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
        Ok(text.to_string())
    }
}

/// Decompresses an SVGZ file.
pub fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut decoded)
        .map_err(|_| Error::MalformedGZip)?;
    Ok(decoded)
}
