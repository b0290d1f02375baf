use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::bail;
use clap::{command, Arg, ArgAction, ArgMatches, Command};
use context::{Context, DEFAULT_SITE_NAME};

mod asset;
mod context;
mod error;
mod generator;
mod metadata;
mod renderer;

fn cli() -> Command {
    command!()
        .subcommand_required(true)
        .arg(
            Arg::new("site_name")
                .long("site-name")
                .help("Name shown in the footer of every page")
                .env("SITE_NAME")
                .global(true)
                .default_value(DEFAULT_SITE_NAME),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert markdown documents into HTML pages next to them")
                .args(&[
                    Arg::new("files")
                        .help("Markdown documents to convert")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf)),
                    Arg::new("css")
                        .long("css")
                        .help("Stylesheet to link. Created from the default theme if it does not exist.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value(asset::CSS_FILE),
                    Arg::new("index")
                        .long("index")
                        .help("Rebuild the article index of every directory touched")
                        .action(ArgAction::SetTrue),
                ]),
        )
        .subcommand(
            Command::new("index")
                .about("Build the article index (articles.html) of a directory")
                .arg(
                    Arg::new("dir")
                        .help("Directory containing markdown documents")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("."),
                ),
        )
        .subcommand(
            Command::new("init-css")
                .about("Write the default stylesheet if it does not exist yet")
                .arg(
                    Arg::new("path")
                        .help("Where to write the stylesheet")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value(asset::CSS_FILE),
                ),
        )
}

fn index_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn run(ctx: &Context, matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("convert", sub)) => {
            let css: &PathBuf = sub.get_one("css").expect("has default");
            let mut dirs = BTreeSet::new();
            for file in sub.get_many::<PathBuf>("files").into_iter().flatten() {
                let out = generator::convert_document(ctx, file, css)?;
                println!("{}", out.display());
                dirs.insert(index_dir(file));
            }
            if sub.get_flag("index") {
                for dir in dirs {
                    println!("{}", generator::generate_index(ctx, &dir)?.display());
                }
            }
        }
        Some(("index", sub)) => {
            let dir: &PathBuf = sub.get_one("dir").expect("has default");
            if !dir.is_dir() {
                bail!("{dir:?} must be a directory.");
            }
            println!("{}", generator::generate_index(ctx, dir)?.display());
        }
        Some(("init-css", sub)) => {
            let path: &PathBuf = sub.get_one("path").expect("has default");
            if asset::ensure_default_stylesheet(path)? {
                println!("{}", path.display());
            } else {
                log::warn!("{path:?} already exists. leaving it untouched.");
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    let site_name: &String = matches.get_one("site_name").expect("has default");
    let ctx = Context::new(site_name.as_str())?;

    run(&ctx, &matches)
}
