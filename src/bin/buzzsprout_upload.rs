use buzzsprout_uploader::{args::Args, run, util};
use clap::Parser;
use std::io::{self, Write};
use std::process;

fn main() {
    let args = Args::parse();
    let _log = util::init_log(util::log_spec(args.verbose))
        .map_err(|e| eprintln!("logger unavailable: {}", e))
        .ok();

    let episode = match run(&args) {
        Ok(ep) => ep,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    // a closed pipe downstream still fails the run
    if writeln!(io::stdout(), "{}", episode).is_err() {
        process::exit(1);
    }
}
