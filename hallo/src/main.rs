#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Greets the user, in one of several versions.

use abakus::{
    style::{paint, Tone},
    terminal::{LineTerminal, Mode, Prompter},
};
use hallo::Variant;
use std::process;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    /// The version of the script: classic, personal or enhanced.
    #[structopt(short, long, default_value = "enhanced")]
    variant: Variant,

    /// Read plain lines from stdin instead of interactive prompts.
    #[structopt(long)]
    plain: bool,

    /// Do not print colors.
    #[structopt(long)]
    no_color: bool,
}

fn main() {
    pretty_env_logger::init();
    log::info!("Hallo =^.^=");

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n{}", paint(Tone::Notice, "Program terminated by user."));
        process::exit(0);
    }) {
        log::warn!("Could not install the interrupt handler: {}", err);
    }

    if opt.no_color {
        console::set_colors_enabled(false);
    }

    let result = match Mode::detect(opt.plain) {
        Mode::Plain => hallo::run(&mut LineTerminal::stdio(), opt.variant),
        Mode::Interactive => hallo::run(&mut Prompter::new(), opt.variant),
    };

    if let Err(err) = result {
        log::error!("Greeting failed: {}", err);
        println!(
            "{}",
            paint(Tone::Failure, format!("An unexpected error occurred: {}", err))
        );
        process::exit(1);
    }
}
