// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
svg2elm generates Elm gallery modules from SVG icon sets.

USAGE:
  svg2elm [OPTIONS] <module-name> <icon.svg>...

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information
  -c                                Prints the generated module to the stdout

  --tags PATH                       Sets the search tags JSON file
                                    [default: tags.json]
  --keep-aria-hidden                Keeps 'aria-hidden' attributes
                                    in the generated trees
  --indent INDENT                   Sets the generated code indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: 4]
  --quiet                           Disables warnings

ARGS:
  <module-name>                     Name of the generated module.
                                    Also names the output file and the
                                    'Heroicons' namespace the module imports
  <icon.svg>...                     SVG files to include, in order
";

#[derive(Debug)]
struct Args {
    tags_path: PathBuf,
    keep_aria_hidden: bool,
    indent: svg2elm::Indent,
    to_stdout: bool,
    quiet: bool,

    module_name: String,
    files: Vec<PathBuf>,
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

    let tags_path = input
        .opt_value_from_str("--tags")?
        .unwrap_or_else(|| PathBuf::from("tags.json"));
    let keep_aria_hidden = input.contains("--keep-aria-hidden");
    let indent = input
        .opt_value_from_fn("--indent", parse_indent)?
        .unwrap_or(svg2elm::Indent::Spaces(4));
    let to_stdout = input.contains("-c");
    let quiet = input.contains("--quiet");

    let module_name = input.free_from_str()?;
    let files = input.finish().into_iter().map(PathBuf::from).collect();

    Ok(Args {
        tags_path,
        keep_aria_hidden,
        indent,
        to_stdout,
        quiet,
        module_name,
        files,
    })
}

fn parse_indent(s: &str) -> Result<svg2elm::Indent, String> {
    let indent = match s {
        "none" => svg2elm::Indent::None,
        "0" => svg2elm::Indent::Spaces(0),
        "1" => svg2elm::Indent::Spaces(1),
        "2" => svg2elm::Indent::Spaces(2),
        "3" => svg2elm::Indent::Spaces(3),
        "4" => svg2elm::Indent::Spaces(4),
        "tabs" => svg2elm::Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
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
    let tags = svg2elm::Tags::from_file(&args.tags_path).map_err(|e| e.to_string())?;

    let opt = svg2elm::Options {
        attributes: svg2elm::AttributeMap::default(),
        keep_aria_hidden: args.keep_aria_hidden,
    };

    let gallery = svg2elm::Gallery::from_files(&args.module_name, &args.files, &tags, &opt)
        .map_err(|e| e.to_string())?;

    let write_opt = svg2elm::WriteOptions {
        indent: args.indent,
    };

    // The module is fully assembled before the output file is created,
    // so a failed run can never leave a partial file behind.
    let s = gallery.to_string(&write_opt);

    if args.to_stdout {
        io::stdout()
            .write_all(s.as_bytes())
            .map_err(|_| "failed to write to the stdout".to_string())?;
    } else {
        let path = format!("{}.elm", args.module_name);
        let mut f = File::create(path).map_err(|_| "failed to create the output file".to_string())?;
        f.write_all(s.as_bytes())
            .map_err(|_| "failed to write to the output file".to_string())?;
    }

    Ok(())
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
