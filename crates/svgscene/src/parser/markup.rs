// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::Error;

const SVG_START: &str = "<svg";
const SVG_END: &str = "</svg>";

/// Extracts the `<svg>` fragment from a markup and removes comments from it.
///
/// The fragment starts at the first `<svg` tag and ends at its matching `</svg>`.
/// Everything else is discarded, which removes XML declarations, doctypes
/// and any surrounding markup, like an HTML page with several images.
/// An unclosed root element keeps the rest of the input.
pub fn extract_svg_fragment(text: &str) -> Result<String, Error> {
    let start = find_svg_start(text, 0).ok_or(Error::MissingSvgElement)?;
    let mut fragment = strip_comments(&text[start..]);
    let end = find_svg_end(&fragment);
    fragment.truncate(end);
    Ok(fragment)
}

fn find_svg_start(text: &str, from: usize) -> Option<usize> {
    let mut offset = from;
    while let Some(idx) = text[offset..].find(SVG_START) {
        let start = offset + idx;
        let after = start + SVG_START.len();
        match text.as_bytes().get(after) {
            Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r') => return Some(start),
            _ => offset = after,
        }
    }

    None
}

/// Returns the end of the `svg` element that `text` starts with.
///
/// Nested `svg` elements are balanced, so the closing tag of an inner one
/// does not end the fragment.
fn find_svg_end(text: &str) -> usize {
    let mut depth = 0u32;
    let mut pos = 0;
    loop {
        let open = find_svg_start(text, pos);
        let close = text[pos..].find(SVG_END).map(|idx| pos + idx);

        match (open, close) {
            (Some(open), close) if close.map_or(true, |close| open < close) => {
                let tag_end = match text[open..].find('>') {
                    Some(idx) => open + idx + 1,
                    None => return text.len(),
                };

                if text.as_bytes()[tag_end - 2] != b'/' {
                    depth += 1;
                } else if depth == 0 {
                    // A self-closing root element.
                    return tag_end;
                }

                pos = tag_end;
            }
            (_, Some(close)) => {
                pos = close + SVG_END.len();
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return pos;
                }
            }
            _ => return text.len(),
        }
    }
}

/// Removes `<!- ... ->` sequences.
///
/// A sequence must be closed on the same line, otherwise it is kept as is.
pub fn strip_comments(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!-") {
        let body = &rest[start + 3..];
        let line_end = body.find(|c| c == '\n' || c == '\r').unwrap_or(body.len());
        match body[..line_end].find("->") {
            Some(end) => {
                s.push_str(&rest[..start]);
                rest = &body[end + 2..];
            }
            None => {
                s.push_str(&rest[..start + 3]);
                rest = body;
            }
        }
    }

    s.push_str(rest);
    s
}
