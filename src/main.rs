mod args;
mod logging;

use args::AppArgs;
use clap::Parser;
use color_eyre::{eyre::Result, owo_colors::OwoColorize};
use log::{debug, info};
use scrotrec::Recorder;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = AppArgs::parse();

    if args.scrot_help {
        scrotrec::help();
        return Ok(());
    }

    logging::init_logging(args.verbose, args.log_file.as_deref())?;

    let mut recorder = Recorder::new().tool(&args.tool).policy(args.policy());

    let stop = recorder.stop_handle();
    ctrlc::set_handler(move || {
        debug!("Ctrl-C received");
        stop.stop();
    })?;
    println!(
        "Press {} to stop after the current screenshot",
        "Ctrl-C".bold().yellow()
    );

    let summary = if args.interactive {
        recorder.record_interactive()?
    } else {
        recorder.record(args.request())?
    };

    info!(
        "{} of {} screenshots in {}",
        summary.captures,
        summary.iterations_planned,
        summary.output_dir.display()
    );
    if summary.stopped {
        println!("{}", "Stopped early".red().bold());
    }
    Ok(())
}
