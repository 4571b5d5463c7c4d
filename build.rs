// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: entry recipe file
fn recipe_file_arg() -> Arg {
    Arg::new("recipe_file")
        .required(true)
        .value_name("RECIPE_FILE")
        .help("Path to the entry recipe file")
}

/// Common argument: ASCII-only drawing
fn ascii_arg() -> Arg {
    Arg::new("ascii")
        .long("ascii")
        .action(ArgAction::SetTrue)
        .help("Draw with ASCII characters only")
}

fn build_cli() -> Command {
    Command::new("rootball")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Rootball Contributors")
        .about("Validate recipe dependencies and show dependency trees")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging (overridden by RUST_LOG)"),
        )
        .subcommand(
            Command::new("check")
                .about("Check a recipe file and its includes for structural errors")
                .arg(recipe_file_arg())
                .arg(ascii_arg()),
        )
        .subcommand(
            Command::new("tree")
                .about("Show the dependency trees of a recipe file")
                .arg(recipe_file_arg())
                .arg(ascii_arg())
                .arg(
                    Arg::new("root")
                        .long("root")
                        .value_name("ID")
                        .help("Only show the tree below this recipe"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("rootball.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
