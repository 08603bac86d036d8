#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Interactive command-line calculator with calculation history.

use abakus::{
    style::{paint, Tone},
    terminal::{LineTerminal, Mode, Prompter},
};
use abakus_calculator::{Config, Result, Session};
use std::{path::PathBuf, process};
use structopt::StructOpt;

// https://crates.io/crates/structopt

#[derive(StructOpt, Debug)]
struct Opt {
    /// The path to a TOML configuration file.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Read plain lines from stdin instead of interactive prompts.
    #[structopt(long)]
    plain: bool,

    /// Do not print colors.
    #[structopt(long)]
    no_color: bool,

    /// Never clear the screen.
    #[structopt(long)]
    no_clear: bool,
}

fn main() {
    pretty_env_logger::init();
    log::info!("Abakus is sliding its beads =^.^=");

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n{}", paint(Tone::Notice, "Calculator terminated by user."));
        process::exit(0);
    }) {
        log::warn!("Could not install the interrupt handler: {}", err);
    }

    if let Err(err) = run(opt) {
        log::error!("Calculator failed: {}", err);
        println!(
            "{}",
            paint(Tone::Failure, format!("An unexpected error occurred: {}", err))
        );
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    let mut config = match &opt.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if opt.no_color {
        config.color = false;
    }
    if opt.no_clear {
        config.clear_screen = false;
    }
    if !config.color {
        console::set_colors_enabled(false);
    }

    match Mode::detect(opt.plain) {
        Mode::Plain => Session::new(LineTerminal::stdio(), config).run(),
        Mode::Interactive => Session::new(Prompter::new(), config).run(),
    }
}
