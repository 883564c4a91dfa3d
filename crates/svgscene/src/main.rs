// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use pico_args::Arguments;

use svgscene::source::{FileFetcher, Loader, NoCache};

const HELP: &str = "\
svgscene converts an SVG into a normalized scene of supported shapes.

USAGE:
  svgscene [OPTIONS] <in-svg> <out-svg>  # from file to file
  svgscene [OPTIONS] <in-svg> -c         # from file to stdout
  svgscene [OPTIONS] - <out-svg>         # from stdin to file
  svgscene [OPTIONS] - -c                # from stdin to stdout

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information
  -c                                Prints the output SVG to the stdout

  --fill COLOR                      Replaces every fill color, except 'none'
  --fill-all                        Applies the '--fill' color to every element,
                                    even when it has no fill
  --width LENGTH                    Overrides the root element width
  --height LENGTH                   Overrides the root element height

  --svg-names                       Writes SVG attribute names, like 'fill-rule',
                                    instead of camelCase ones
  --indent INDENT                   Sets the XML nodes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: 4]
  --attrs-indent INDENT             Sets the XML attributes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --quiet                           Disables warnings

ARGS:
  <in-svg>                          Input file
  <out-svg>                         Output file
";

#[derive(Debug)]
struct Args {
    fill: Option<String>,
    fill_all: bool,
    width: Option<String>,
    height: Option<String>,

    svg_names: bool,
    indent: svgscene::Indent,
    attrs_indent: svgscene::Indent,

    quiet: bool,

    input: String,
    output: String,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        fill: input.opt_value_from_str("--fill")?,
        fill_all: input.contains("--fill-all"),
        width: input.opt_value_from_fn("--width", parse_length)?,
        height: input.opt_value_from_fn("--height", parse_length)?,

        svg_names: input.contains("--svg-names"),
        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(svgscene::Indent::Spaces(4)),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)?
            .unwrap_or(svgscene::Indent::None),

        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.free_from_str()?,
    })
}

fn parse_indent(s: &str) -> Result<svgscene::Indent, String> {
    let indent = match s {
        "none" => svgscene::Indent::None,
        "0" => svgscene::Indent::Spaces(0),
        "1" => svgscene::Indent::Spaces(1),
        "2" => svgscene::Indent::Spaces(2),
        "3" => svgscene::Indent::Spaces(3),
        "4" => svgscene::Indent::Spaces(4),
        "tabs" => svgscene::Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

fn parse_length(s: &str) -> Result<String, String> {
    let s = s.trim();
    let length: svgtypes::Length = s.parse().map_err(|_| "invalid LENGTH value")?;

    if length.number > 0.0 {
        Ok(s.to_string())
    } else {
        Err("LENGTH must be positive".to_string())
    }
}

#[derive(Clone, PartialEq, Debug)]
enum InputFrom<'a> {
    Stdin,
    File(&'a str),
}

#[derive(Clone, PartialEq, Debug)]
enum OutputTo<'a> {
    Stdout,
    File(&'a str),
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    let in_svg = match args.input.as_str() {
        "-" => InputFrom::Stdin,
        "-c" => return Err("-c should be set after input".to_string()),
        path => InputFrom::File(path),
    };

    let out_svg = match args.output.as_str() {
        "-c" => OutputTo::Stdout,
        path => OutputTo::File(path),
    };

    let opt = svgscene::Options {
        fill: args.fill,
        fill_all: args.fill_all,
        width: args.width,
        height: args.height,
    };

    let tree = match in_svg {
        InputFrom::Stdin => {
            let data = load_stdin()?;
            svgscene::Tree::from_data(&data, &opt).map_err(|e| e.to_string())?
        }
        InputFrom::File(path) => {
            let mut loader = Loader::new(NoCache, FileFetcher::default());
            let source = svgscene::source::Source::Uri(path.to_string());
            loader.load_tree(&source, &opt).map_err(|e| e.to_string())?
        }
    };

    let xml_opt = svgscene::WriteOptions {
        use_single_quote: false,
        indent: args.indent,
        attributes_indent: args.attrs_indent,
        svg_attribute_names: args.svg_names,
    };

    let s = tree.to_string(&xml_opt);
    match out_svg {
        OutputTo::Stdout => {
            io::stdout()
                .write_all(s.as_bytes())
                .map_err(|_| "failed to write to the stdout".to_string())?;
        }
        OutputTo::File(path) => {
            let mut f =
                File::create(path).map_err(|_| "failed to create the output file".to_string())?;
            f.write_all(s.as_bytes())
                .map_err(|_| "failed to write to the output file".to_string())?;
        }
    }

    Ok(())
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|_| "failed to read from stdin".to_string())?;

    Ok(buf)
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
