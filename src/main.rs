// Fretboard diagram CLI.
//
// Builds one diagram from command-line flags and writes it as SVG, plain
// text or JSON. Without an output path the result goes to stdout. A flag
// with an unusable value is an error and exits with status 1.
//
// Usage:
//   fretboard [output.svg|output.txt|output.json] [--instrument guitar|bass]
//     [--tuning KEY] [--root NOTE] [--scale KEY] [--relative none|minor|major]
//     [--notation standard|latin] [--degrees] [--chords] [--profile compact|full]
//     [--frets N] [--format svg|text|json]
//   fretboard --catalog

use fretlib::{
    build_diagram, catalog_json, diagram_to_json, render_diagram_to_svg, render_diagram_to_text,
    FretError, FretProfile, FretboardRequest, Instrument, Notation, RelativeMode, Result,
    RootInput,
};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Svg,
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Format::Svg),
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err("expected svg, text or json".to_string()),
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let output_path = args.get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str());

    let rendered = match run(&args, output_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &rendered) {
                eprintln!("Failed to write '{path}': {e}");
                std::process::exit(1);
            }
            println!("Wrote {path} ({} bytes)", rendered.len());
        }
        None => print!("{rendered}"),
    }
}

fn run(args: &[String], output_path: Option<&str>) -> Result<String> {
    if has_flag(args, "--catalog") {
        return catalog_json();
    }
    let format = output_format(args, output_path)?;
    let diagram = build_diagram(&request_from_args(args)?)?;
    match format {
        Format::Svg => Ok(render_diagram_to_svg(&diagram)),
        Format::Text => Ok(render_diagram_to_text(&diagram)),
        Format::Json => diagram_to_json(&diagram),
    }
}

/// `--format` wins over the output file's extension; text is the fallback.
fn output_format(args: &[String], output_path: Option<&str>) -> Result<Format> {
    Ok(parse_flag::<Format>(args, "--format")?
        .or_else(|| output_path.and_then(format_from_extension))
        .unwrap_or(Format::Text))
}

fn request_from_args(args: &[String]) -> Result<FretboardRequest> {
    let mut request = FretboardRequest::default();

    if let Some(instrument) = parse_flag::<Instrument>(args, "--instrument")? {
        request.instrument = instrument;
    }
    if let Some(tuning) = parse_flag(args, "--tuning")? {
        request.tuning = tuning;
    }
    if let Some(root) = parse_flag::<String>(args, "--root")? {
        request.root = match root.parse::<i64>() {
            Ok(i) => RootInput::Index(i),
            Err(_) => RootInput::Name(root),
        };
    }
    if let Some(scale) = parse_flag(args, "--scale")? {
        request.scale = scale;
    }
    if let Some(relative) = parse_flag::<RelativeMode>(args, "--relative")? {
        request.relative = relative;
    }
    if let Some(notation) = parse_flag::<Notation>(args, "--notation")? {
        request.notation = notation;
    }
    if let Some(profile) = parse_flag::<FretProfile>(args, "--profile")? {
        request.profile = profile;
    }
    request.fret_count = parse_flag(args, "--frets")?;
    request.show_degrees = has_flag(args, "--degrees");
    request.show_chords = has_flag(args, "--chords");

    Ok(request)
}

fn format_from_extension(path: &str) -> Option<Format> {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("svg") => Some(Format::Svg),
        Some("json") => Some(Format::Json),
        Some("txt") => Some(Format::Text),
        _ => None,
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Value following `flag`, parsed. Absent flag is `None`; a missing or
/// unparsable value is an error naming the flag.
fn parse_flag<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let value = args
        .get(i + 1)
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| FretError::MissingArgument(flag.to_string()))?;
    value.parse().map(Some).map_err(|e: T::Err| FretError::InvalidArgument {
        flag: flag.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })
}
