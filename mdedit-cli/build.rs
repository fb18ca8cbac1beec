use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI defined in src/main.rs. Build scripts can't access src/
// modules, so the shape is duplicated here for completion generation.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath);

    let mut cmd = Command::new("mdedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A driver for the mdedit document synchronization core")
        .subcommand(Command::new("render").about("Render Markdown to markup").arg(input.clone()))
        .subcommand(
            Command::new("reduce")
                .about("Reduce markup back to Markdown")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Render then reduce a Markdown file")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the captured rich tree as JSON")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("apply")
                .about("Dispatch an editor command against a file")
                .arg(input),
        )
        .subcommand(Command::new("commands").about("List the buffer command catalog"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdedit", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdedit", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdedit", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
