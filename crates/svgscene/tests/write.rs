use svgscene::{Indent, Options, Tree, WriteOptions};

fn resave(svg: &str, xml_opt: &WriteOptions) -> String {
    let tree = Tree::from_str(svg, &Options::default()).unwrap();
    tree.to_string(xml_opt)
}

fn compact() -> WriteOptions {
    WriteOptions {
        indent: Indent::None,
        ..WriteOptions::default()
    }
}

fn check_round_trip(svg: &str) {
    let tree = Tree::from_str(svg, &Options::default()).unwrap();

    let opts = [
        WriteOptions::default(),
        compact(),
        WriteOptions {
            svg_attribute_names: true,
            attributes_indent: Indent::Spaces(2),
            ..WriteOptions::default()
        },
    ];

    for xml_opt in &opts {
        let output = tree.to_string(xml_opt);
        let tree2 = Tree::from_str(&output, &Options::default()).unwrap();
        // Do not use `assert_eq` because it produces an unreadable output.
        assert!(tree == tree2, "{}", output);
    }
}

#[test]
fn simple_case() {
    let svg = "<svg width='10px'><rect fill='red'/></svg>";
    assert_eq!(
        resave(svg, &compact()),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\"><rect fill=\"red\"/></svg>"
    );
}

#[test]
fn single_quote() {
    let svg = "<svg><circle r='5'/></svg>";
    let xml_opt = WriteOptions {
        use_single_quote: true,
        ..compact()
    };
    assert_eq!(
        resave(svg, &xml_opt),
        "<svg xmlns='http://www.w3.org/2000/svg'><circle r='5'/></svg>"
    );
}

#[test]
fn camel_case_names() {
    let svg = "<svg><path fill-rule='evenodd' stroke-width='2'/></svg>";
    assert_eq!(
        resave(svg, &compact()),
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\
            <path fillRule=\"evenodd\" strokeWidth=\"2\"/>\
        </svg>"
    );
}

#[test]
fn svg_names() {
    let svg = "<svg><path fill-rule='evenodd' stroke-width='2'/></svg>";
    let xml_opt = WriteOptions {
        svg_attribute_names: true,
        ..compact()
    };
    assert_eq!(
        resave(svg, &xml_opt),
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\
            <path fill-rule=\"evenodd\" stroke-width=\"2\"/>\
        </svg>"
    );
}

#[test]
fn text_is_not_indented() {
    let svg = "<svg><g><text font-size='10'>A <tspan y='20'>B</tspan></text></g></svg>";
    let output = resave(svg, &WriteOptions::default());
    assert!(output.contains("<text fontSize=\"10\">A <tspan y=\"10\">B</tspan></text>"));
}

#[test]
fn ampersand_in_text() {
    let svg = "<svg><text>A &amp; B</text></svg>";
    assert_eq!(
        resave(svg, &compact()),
        "<svg xmlns=\"http://www.w3.org/2000/svg\"><text>A &amp; B</text></svg>"
    );
}

#[test]
fn round_trip_shapes() {
    check_round_trip(
        "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100' width='100' height='100'>
        <defs>
            <linearGradient id='lg1' x1='0' y1='0' x2='1' y2='1'>
                <stop offset='0' style='stroke-opacity:0.5'/>
                <stop offset='1'/>
            </linearGradient>
            <radialGradient id='rg1' cx='5' cy='5' r='5' gradientUnits='userSpaceOnUse'/>
        </defs>
        <g id='g1' transform='translate(10 20)' opacity='0.5'>
            <rect width='10px' height='20' fill='url(#lg1)'/>
            <ellipse cx='1' cy='2' rx='3' ry='4' style='stroke:black;stroke-dasharray:2px 4px'/>
            <polygon points='0,0 10,0 10,10'/>
            <polyline points='0,0 10,0 10,10' fill='none'/>
            <line x1='0' y1='0' x2='10' y2='10' stroke-linecap='round'/>
        </g>
        <use href='#g1' x='50'/>
    </svg>
    ",
    );
}

#[test]
fn round_trip_text() {
    check_round_trip(
        "
    <svg xmlns='http://www.w3.org/2000/svg'>
        <text font-family='Noto Sans' font-size='12' text-anchor='middle'>
            Hello, <tspan font-weight='bold' x='30'>World</tspan>!
        </text>
    </svg>
    ",
    );
}

#[test]
fn tspan_y_round_trip() {
    let svg = "<svg><text font-size='10'><tspan y='30'>A</tspan></text></svg>";
    let tree = Tree::from_str(svg, &Options::default()).unwrap();

    let y = |tree: &Tree| {
        let tspan = tree.descendants().find(|e| e.kind() == svgscene::EId::Tspan).unwrap();
        tspan.attribute(svgscene::AId::Y).map(str::to_string)
    };
    assert_eq!(y(&tree).as_deref(), Some("20"));

    // `fontSize` is not used for the shift, so the default output is stable.
    let tree2 = Tree::from_str(&tree.to_string(&compact()), &Options::default()).unwrap();
    assert_eq!(y(&tree2).as_deref(), Some("20"));
    assert!(tree == tree2);

    let xml_opt = WriteOptions {
        svg_attribute_names: true,
        ..compact()
    };
    let tree3 = Tree::from_str(&tree.to_string(&xml_opt), &Options::default()).unwrap();
    assert_eq!(y(&tree3).as_deref(), Some("10"));
}

#[test]
fn escaped_attribute_value() {
    let svg = "<svg><g id='a&amp;b&lt;c'/></svg>";
    let tree = Tree::from_str(svg, &Options::default()).unwrap();
    let g = tree.root().first_element_child().unwrap();
    assert_eq!(g.attribute(svgscene::AId::Id), Some("a&b<c"));

    let text = tree.to_string(&compact());
    assert!(text.contains("a&amp;b&lt;c"), "{}", text);

    let tree2 = Tree::from_str(&text, &Options::default()).unwrap();
    assert!(tree == tree2);
}

#[test]
fn round_trip_fill_override() {
    let svg = "<svg><rect fill='none'/><circle style='fill:red'/></svg>";
    let opt = Options {
        fill: Some("#ff0000".to_string()),
        fill_all: true,
        ..Options::default()
    };

    let tree = Tree::from_str(svg, &opt).unwrap();
    let output = tree.to_string(&compact());
    let tree2 = Tree::from_str(&output, &opt).unwrap();
    assert!(tree == tree2, "{}", output);
}
