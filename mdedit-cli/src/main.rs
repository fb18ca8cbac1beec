// Command-line driver for the mdedit synchronization core
//
// The desktop shell is a separate application; this binary stands in for it
// during development. It feeds files through the same pipelines the shell
// uses (render, capture, reduce) and dispatches editor commands against a
// buffer, printing the outcome to stdout.
//
// Usage:
//  mdedit render <input.md> [-o <file>]         - Markdown -> markup
//  mdedit reduce <input.html> [-o <file>]       - markup -> Markdown
//  mdedit roundtrip <input.md> [-o <file>]      - render then reduce (stabilized source)
//  mdedit tree <input.md>                       - captured rich tree as JSON
//  mdedit apply <input.md> -c <id> [--start N] [--end N] [-o <file>]
//  mdedit commands                              - list the buffer command catalog
//
// Configuration:
//
// All subcommands accept --config <PATH> pointing at an mdedit.toml file,
// layered over the embedded defaults (see mdedit-config).

use clap::{Arg, Command, ValueHint};
use mdedit_config::{EditorConfig, Loader};
use mdedit_core::{
    from_markup, reduce, render_markdown, CommandRegistry, Editor, RenderOptions,
};
use std::fs;

fn build_cli() -> Command {
    Command::new("mdedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A driver for the mdedit document synchronization core")
        .long_about(
            "mdedit drives the editor synchronization core from the command line.\n\n\
            Pipelines:\n  \
            - render:    Markdown source to rendered markup\n  \
            - reduce:    rendered markup back to Markdown source\n  \
            - roundtrip: render then reduce (the stabilized form of a document)\n\n\
            Examples:\n  \
            mdedit render notes.md                  # Markup to stdout\n  \
            mdedit roundtrip notes.md               # Normalized Markdown\n  \
            mdedit apply notes.md -c toggle-bold --start 0 --end 4\n  \
            mdedit commands                         # Available command ids",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdedit.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render a Markdown file to markup")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("reduce")
                .about("Reduce a markup file back to Markdown")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Render then reduce, printing the stabilized Markdown")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the captured rich tree of a rendered Markdown file as JSON")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("apply")
                .about("Dispatch an editor command against a Markdown file")
                .long_about(
                    "Open the file in an in-memory editor, set the selection, dispatch\n\
                    the command and print the resulting Markdown source.\n\n\
                    Unknown command ids are a no-op by design; the file content comes\n\
                    back unchanged.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("command")
                        .long("command")
                        .short('c')
                        .help("Command id to dispatch (see 'mdedit commands')")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("Selection start offset (bytes)")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("0"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .help("Selection end offset (bytes, defaults to end of file)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(output_arg()),
        )
        .subcommand(Command::new("commands").about("List the buffer command catalog"))
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let source = read_input(sub_matches.get_one::<String>("input").expect("required"));
            let options: RenderOptions = (&config.render).into();
            let markup = render_markdown(&source, &options);
            write_output(sub_matches.get_one::<String>("output"), &markup);
        }
        Some(("reduce", sub_matches)) => {
            let markup = read_input(sub_matches.get_one::<String>("input").expect("required"));
            let markdown = reduce(&from_markup(&markup));
            write_output(sub_matches.get_one::<String>("output"), &markdown);
        }
        Some(("roundtrip", sub_matches)) => {
            let source = read_input(sub_matches.get_one::<String>("input").expect("required"));
            let options: RenderOptions = (&config.render).into();
            let markdown = reduce(&from_markup(&render_markdown(&source, &options)));
            write_output(sub_matches.get_one::<String>("output"), &markdown);
        }
        Some(("tree", sub_matches)) => {
            let source = read_input(sub_matches.get_one::<String>("input").expect("required"));
            let options: RenderOptions = (&config.render).into();
            let tree = from_markup(&render_markdown(&source, &options));
            let json = serde_json::to_string_pretty(&tree).unwrap_or_else(|e| {
                eprintln!("Error serializing tree: {e}");
                std::process::exit(1);
            });
            write_output(None, &json);
        }
        Some(("apply", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").expect("required");
            let command = sub_matches.get_one::<String>("command").expect("required");
            let source = read_input(input);

            let mut editor = Editor::new((&config).into());
            editor.open(&source);

            let start = *sub_matches.get_one::<usize>("start").expect("defaulted");
            let end = sub_matches
                .get_one::<usize>("end")
                .copied()
                .unwrap_or_else(|| editor.buffer().len());
            editor.buffer_mut().set_selection(start, end);

            editor.dispatch(command);
            write_output(sub_matches.get_one::<String>("output"), editor.buffer().text());
        }
        Some(("commands", _)) => {
            for id in CommandRegistry::with_defaults().list_commands() {
                println!("{id}");
            }
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(path: Option<&str>) -> EditorConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&String>, content: &str) {
    match output {
        Some(path) => fs::write(path, content).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => println!("{content}"),
    }
}
