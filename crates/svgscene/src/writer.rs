// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xmlwriter::XmlWriter;

use crate::*;

impl Tree {
    /// Writes `svgscene::Tree` back to SVG.
    pub fn to_string(&self, opt: &WriteOptions) -> String {
        convert(self, opt)
    }
}

/// XML writing options.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <rect fill="red"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect fill='red'/>
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// Text elements content is never indented.
    ///
    /// Default: 4 spaces
    pub indent: Indent,

    /// Set XML attributes indention.
    ///
    /// Default: `None`
    pub attributes_indent: Indent,

    /// Write SVG attribute names instead of camelCase ones.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <path fillRule="evenodd"/>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <path fill-rule="evenodd"/>
    /// ```
    ///
    /// Both variants are accepted by the parser.
    ///
    /// Default: disabled
    pub svg_attribute_names: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            use_single_quote: false,
            indent: Indent::Spaces(4),
            attributes_indent: Indent::None,
            svg_attribute_names: false,
        }
    }
}

pub(crate) fn convert(tree: &Tree, opt: &WriteOptions) -> String {
    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    });

    write_element(&tree.root, true, false, opt, &mut xml);

    xml.end_document()
}

fn write_element(
    element: &Element,
    is_root: bool,
    in_text: bool,
    opt: &WriteOptions,
    xml: &mut XmlWriter,
) {
    xml.start_svg_element(element.kind);
    if is_root {
        xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    }

    for (aid, value) in element.attributes.iter() {
        xml.write_scene_attribute(aid, value, opt);
    }

    // Indention inside a text element would become a part of its content.
    let starts_text = !in_text && element.kind.accepts_text();
    if starts_text {
        xml.set_preserve_whitespaces(true);
    }

    for child in &element.children {
        match child {
            Node::Element(ref e) => write_element(e, false, in_text || starts_text, opt, xml),
            Node::Text(ref text) => xml.write_text(&text.replace('&', "&amp;")),
        }
    }

    xml.end_element();

    if starts_text {
        xml.set_preserve_whitespaces(false);
    }
}

trait XmlWriterExt {
    fn start_svg_element(&mut self, id: EId);
    fn write_scene_attribute(&mut self, id: AId, value: &str, opt: &WriteOptions);
}

impl XmlWriterExt for XmlWriter {
    #[inline(never)]
    fn start_svg_element(&mut self, id: EId) {
        self.start_element(id.to_str());
    }

    #[inline(never)]
    fn write_scene_attribute(&mut self, id: AId, value: &str, opt: &WriteOptions) {
        let name = if opt.svg_attribute_names {
            id.to_svg_str()
        } else {
            id.to_str()
        };

        // Only the quote is escaped by the writer.
        if value.contains(|c| c == '&' || c == '<') {
            self.write_attribute(name, &value.replace('&', "&amp;").replace('<', "&lt;"));
        } else {
            self.write_attribute(name, value);
        }
    }
}
