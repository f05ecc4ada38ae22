use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use sprout::{preview::preview_as_tree, prompt, Settings, SproutError, Summary};
use std::path::{Path, PathBuf};

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file overriding the separator line and indent width")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Creates the directories and files described by a structure document")
                .arg(
                    Arg::new("input")
                        .help("Structure document: root name, tree diagram, file contents")
                        .value_parser(clap::value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("dry-run")
                        .help("Only print the tree that would be created")
                        .long("dry-run")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .about("Repeatedly asks for a structure document and builds it")
                .arg(
                    Arg::new("confirm")
                        .help("Preview each tree and ask before writing it")
                        .long("confirm")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    init_logging(is_verbose);

    let settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(error) => exit_with(SproutError::from(error)),
        },
        None => Settings::default(),
    };

    match matches.subcommand() {
        Some(("build", args)) => {
            if let Err(error) = handle_build(args, &settings) {
                exit_with(error);
            }
        }
        Some(("interactive", args)) => {
            handle_interactive(args, &settings);
        }
        _ => unreachable!(),
    }
}

fn init_logging(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn exit_with(error: SproutError) -> ! {
    eprintln!("{:?}", miette::Report::new(error));

    std::process::exit(1);
}

fn print_summary(summary: &Summary) {
    println!(
        "{} {} directories, {} files\n",
        "Output:".bold(),
        summary.directories,
        summary.files
    );
}

fn handle_build(args: &ArgMatches, settings: &Settings) -> Result<(), SproutError> {
    let input = args
        .get_one::<PathBuf>("input")
        .expect("input is required");

    if args.get_flag("dry-run") {
        let vfs = sprout::preview_structure_file(input, settings)?;

        preview_as_tree(&vfs);

        return Ok(());
    }

    let summary = sprout::process_structure_file(input, settings)?;

    print_summary(&summary);

    Ok(())
}

fn build_confirmed(input: &Path, settings: &Settings) -> Result<Option<Summary>, SproutError> {
    let vfs = sprout::preview_structure_file(input, settings)?;

    preview_as_tree(&vfs);

    match prompt::apply_changes() {
        Ok(true) => {}
        Ok(false) | Err(prompt::PromptError::Canceled) => return Ok(None),
        Err(error) => return Err(error.into()),
    }

    let summary = sprout::materialize::apply_vfs(&vfs)?;

    Ok(Some(summary))
}

fn handle_interactive(args: &ArgMatches, settings: &Settings) {
    let confirm = args.get_flag("confirm");

    loop {
        let input = match prompt::get_input_path() {
            Ok(input) => input,
            Err(prompt::PromptError::Canceled) => break,
            Err(error) => exit_with(error.into()),
        };

        if !input.exists() {
            println!("{}\n", "Wrong directory".red());
            continue;
        }

        let result = if confirm {
            build_confirmed(&input, settings)
        } else {
            sprout::process_structure_file(&input, settings).map(Some)
        };

        match result {
            Ok(Some(summary)) => print_summary(&summary),
            Ok(None) => println!("{}\n", "Skipped".yellow()),
            Err(error) => {
                eprintln!("{:?}", miette::Report::new(error));
                println!("{}\n", "Processing failed".red());
            }
        }
    }
}
