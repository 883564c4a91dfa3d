// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{AId, EId};

/// Attributes allowed on every element.
pub static COMMON_ATTRIBUTES: &[AId] = &[
    AId::Id,
    AId::Fill,
    AId::FillOpacity,
    AId::Stroke,
    AId::StrokeWidth,
    AId::StrokeOpacity,
    AId::Opacity,
    AId::StrokeLinecap,
    AId::StrokeLinejoin,
    AId::StrokeDasharray,
    AId::StrokeDashoffset,
    AId::X,
    AId::Y,
    AId::Rotate,
    AId::Scale,
    AId::Origin,
    AId::OriginX,
    AId::OriginY,
    AId::Transform,
    AId::ClipPath,
];

static TEXT_ATTRIBUTES: &[AId] = &[AId::FontFamily, AId::FontSize, AId::FontWeight, AId::TextAnchor];

impl EId {
    /// Returns attributes specific to this element.
    ///
    /// See [`COMMON_ATTRIBUTES`] for the rest.
    pub fn specific_attributes(&self) -> &'static [AId] {
        match self {
            EId::Svg => &[AId::ViewBox, AId::Width, AId::Height],
            EId::G => &[AId::Id, AId::Display],
            EId::Path => &[AId::D, AId::FillRule, AId::ClipRule],
            EId::Circle => &[AId::Cx, AId::Cy, AId::R],
            EId::Rect => &[AId::Width, AId::Height],
            EId::Line => &[AId::X1, AId::Y1, AId::X2, AId::Y2],
            EId::LinearGradient => &[
                AId::X1,
                AId::Y1,
                AId::X2,
                AId::Y2,
                AId::Id,
                AId::GradientUnits,
            ],
            EId::RadialGradient => &[AId::Cx, AId::Cy, AId::R, AId::Id, AId::GradientUnits],
            EId::Stop => &[AId::Offset],
            EId::Ellipse => &[AId::Cx, AId::Cy, AId::Rx, AId::Ry],
            EId::Polygon | EId::Polyline => &[AId::Points],
            EId::Text | EId::Tspan => TEXT_ATTRIBUTES,
            EId::Use => &[AId::Href, AId::X, AId::Y],
            EId::Defs => &[],
        }
    }

    /// Checks that an attribute is allowed on this element.
    #[inline]
    pub fn is_permitted(&self, aid: AId) -> bool {
        self.specific_attributes().contains(&aid) || COMMON_ATTRIBUTES.contains(&aid)
    }

    /// Returns an iterator over all attributes allowed on this element.
    ///
    /// Attributes present in both tables are returned once.
    pub fn permitted_attributes(&self) -> impl Iterator<Item = AId> {
        let specific = self.specific_attributes();
        specific.iter().copied().chain(
            COMMON_ATTRIBUTES
                .iter()
                .copied()
                .filter(move |aid| !specific.contains(aid)),
        )
    }
}

/// Resolves a camelCase attribute name allowed on `eid`.
///
/// Returns `None` for unknown names and names outside of the element's schema.
pub(crate) fn permitted_attribute(eid: EId, name: &str) -> Option<AId> {
    let aid = match AId::from_str(name) {
        Some(v) => v,
        None => {
            log::debug!("Unknown attribute '{}' on '{}'. Skipped.", name, eid);
            return None;
        }
    };

    if eid.is_permitted(aid) {
        Some(aid)
    } else {
        log::debug!("'{}' is not allowed on '{}'. Skipped.", name, eid);
        None
    }
}
