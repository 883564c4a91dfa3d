// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A supported element kind.
///
/// Anything that cannot be represented by this enum is not a part of a scene.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EId {
    Circle,
    Defs,
    Ellipse,
    G,
    Line,
    LinearGradient,
    Path,
    Polygon,
    Polyline,
    RadialGradient,
    Rect,
    Stop,
    Svg,
    Text,
    Tspan,
    Use,
}

impl EId {
    /// Parses an element name.
    ///
    /// Names are case-sensitive, like in SVG.
    pub fn from_str(text: &str) -> Option<EId> {
        let id = match text {
            "circle" => EId::Circle,
            "defs" => EId::Defs,
            "ellipse" => EId::Ellipse,
            "g" => EId::G,
            "line" => EId::Line,
            "linearGradient" => EId::LinearGradient,
            "path" => EId::Path,
            "polygon" => EId::Polygon,
            "polyline" => EId::Polyline,
            "radialGradient" => EId::RadialGradient,
            "rect" => EId::Rect,
            "stop" => EId::Stop,
            "svg" => EId::Svg,
            "text" => EId::Text,
            "tspan" => EId::Tspan,
            "use" => EId::Use,
            _ => return None,
        };

        Some(id)
    }

    /// Returns the element name.
    pub fn to_str(&self) -> &'static str {
        match self {
            EId::Circle => "circle",
            EId::Defs => "defs",
            EId::Ellipse => "ellipse",
            EId::G => "g",
            EId::Line => "line",
            EId::LinearGradient => "linearGradient",
            EId::Path => "path",
            EId::Polygon => "polygon",
            EId::Polyline => "polyline",
            EId::RadialGradient => "radialGradient",
            EId::Rect => "rect",
            EId::Stop => "stop",
            EId::Svg => "svg",
            EId::Text => "text",
            EId::Tspan => "tspan",
            EId::Use => "use",
        }
    }

    /// Checks that the element keeps its character data.
    pub fn accepts_text(&self) -> bool {
        matches!(self, EId::Text | EId::Tspan)
    }
}

impl std::fmt::Display for EId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// An attribute that can be present in a scene.
///
/// Scene attributes are named in camelCase, e.g. `fill-rule` becomes `fillRule`.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AId {
    ClipPath,
    ClipRule,
    Cx,
    Cy,
    D,
    Display,
    Fill,
    FillOpacity,
    FillRule,
    FontFamily,
    FontSize,
    FontWeight,
    GradientUnits,
    Height,
    Href,
    Id,
    Offset,
    Opacity,
    Origin,
    OriginX,
    OriginY,
    Points,
    R,
    Rotate,
    Rx,
    Ry,
    Scale,
    Stroke,
    StrokeDasharray,
    StrokeDashoffset,
    StrokeLinecap,
    StrokeLinejoin,
    StrokeOpacity,
    StrokeWidth,
    TextAnchor,
    Transform,
    ViewBox,
    Width,
    X,
    X1,
    X2,
    Y,
    Y1,
    Y2,
}

impl AId {
    /// Parses a camelCase attribute name.
    pub fn from_str(text: &str) -> Option<AId> {
        let id = match text {
            "clipPath" => AId::ClipPath,
            "clipRule" => AId::ClipRule,
            "cx" => AId::Cx,
            "cy" => AId::Cy,
            "d" => AId::D,
            "display" => AId::Display,
            "fill" => AId::Fill,
            "fillOpacity" => AId::FillOpacity,
            "fillRule" => AId::FillRule,
            "fontFamily" => AId::FontFamily,
            "fontSize" => AId::FontSize,
            "fontWeight" => AId::FontWeight,
            "gradientUnits" => AId::GradientUnits,
            "height" => AId::Height,
            "href" => AId::Href,
            "id" => AId::Id,
            "offset" => AId::Offset,
            "opacity" => AId::Opacity,
            "origin" => AId::Origin,
            "originX" => AId::OriginX,
            "originY" => AId::OriginY,
            "points" => AId::Points,
            "r" => AId::R,
            "rotate" => AId::Rotate,
            "rx" => AId::Rx,
            "ry" => AId::Ry,
            "scale" => AId::Scale,
            "stroke" => AId::Stroke,
            "strokeDasharray" => AId::StrokeDasharray,
            "strokeDashoffset" => AId::StrokeDashoffset,
            "strokeLinecap" => AId::StrokeLinecap,
            "strokeLinejoin" => AId::StrokeLinejoin,
            "strokeOpacity" => AId::StrokeOpacity,
            "strokeWidth" => AId::StrokeWidth,
            "textAnchor" => AId::TextAnchor,
            "transform" => AId::Transform,
            "viewBox" => AId::ViewBox,
            "width" => AId::Width,
            "x" => AId::X,
            "x1" => AId::X1,
            "x2" => AId::X2,
            "y" => AId::Y,
            "y1" => AId::Y1,
            "y2" => AId::Y2,
            _ => return None,
        };

        Some(id)
    }

    /// Returns the camelCase attribute name.
    pub fn to_str(&self) -> &'static str {
        match self {
            AId::ClipPath => "clipPath",
            AId::ClipRule => "clipRule",
            AId::Cx => "cx",
            AId::Cy => "cy",
            AId::D => "d",
            AId::Display => "display",
            AId::Fill => "fill",
            AId::FillOpacity => "fillOpacity",
            AId::FillRule => "fillRule",
            AId::FontFamily => "fontFamily",
            AId::FontSize => "fontSize",
            AId::FontWeight => "fontWeight",
            AId::GradientUnits => "gradientUnits",
            AId::Height => "height",
            AId::Href => "href",
            AId::Id => "id",
            AId::Offset => "offset",
            AId::Opacity => "opacity",
            AId::Origin => "origin",
            AId::OriginX => "originX",
            AId::OriginY => "originY",
            AId::Points => "points",
            AId::R => "r",
            AId::Rotate => "rotate",
            AId::Rx => "rx",
            AId::Ry => "ry",
            AId::Scale => "scale",
            AId::Stroke => "stroke",
            AId::StrokeDasharray => "strokeDasharray",
            AId::StrokeDashoffset => "strokeDashoffset",
            AId::StrokeLinecap => "strokeLinecap",
            AId::StrokeLinejoin => "strokeLinejoin",
            AId::StrokeOpacity => "strokeOpacity",
            AId::StrokeWidth => "strokeWidth",
            AId::TextAnchor => "textAnchor",
            AId::Transform => "transform",
            AId::ViewBox => "viewBox",
            AId::Width => "width",
            AId::X => "x",
            AId::X1 => "x1",
            AId::X2 => "x2",
            AId::Y => "y",
            AId::Y1 => "y1",
            AId::Y2 => "y2",
        }
    }

    /// Returns the attribute name as it is spelled in SVG markup.
    ///
    /// Attributes without an SVG counterpart are hyphenated,
    /// so they are still camel-cased back on the next parse.
    pub fn to_svg_str(&self) -> &'static str {
        match self {
            AId::ClipPath => "clip-path",
            AId::ClipRule => "clip-rule",
            AId::FillOpacity => "fill-opacity",
            AId::FillRule => "fill-rule",
            AId::FontFamily => "font-family",
            AId::FontSize => "font-size",
            AId::FontWeight => "font-weight",
            AId::OriginX => "origin-x",
            AId::OriginY => "origin-y",
            AId::StrokeDasharray => "stroke-dasharray",
            AId::StrokeDashoffset => "stroke-dashoffset",
            AId::StrokeLinecap => "stroke-linecap",
            AId::StrokeLinejoin => "stroke-linejoin",
            AId::StrokeOpacity => "stroke-opacity",
            AId::StrokeWidth => "stroke-width",
            AId::TextAnchor => "text-anchor",
            _ => self.to_str(),
        }
    }
}

impl std::fmt::Display for AId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
