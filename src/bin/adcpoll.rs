// adc-poll/src/bin/adcpoll.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//

//! Console utility to poll raw ADC readings from an IIO device.
//!
//! Samples the requested channels in a loop, redrawing a one-line display
//! as it goes, and prints a throughput summary when stopped with ctrl-c.
//!

use adc_poll::{ChannelSelection, PollLoop, PollSummary, Timeval, DFLT_DELAY_US};
use clap::{arg, Arg, Command, ErrorKind};
use std::{
    process,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

// --------------------------------------------------------------------------

fn build_command() -> Command<'static> {
    Command::new("adcpoll")
        .version(clap::crate_version!())
        .about("Poll raw ADC readings from the IIO sysfs interface.")
        .args(&[
            arg!(-d --delay <usec> "Microsecond delay between reads, default 10000, min 0")
                .required(false)
                .allow_hyphen_values(true),
            Arg::new("channel")
                .help("Space separated list of ADC channels to monitor, 0-7")
                .multiple_values(true),
        ])
        .after_help("Example:\n    adcpoll -d100 0 1")
}

// Usage problems are not distinguished from a help request.
fn usage(cmd: &mut Command) -> ! {
    println!();
    let _ = cmd.print_help();
    println!();
    process::exit(0);
}

fn parse_delay(text: &str) -> Option<u64> {
    let delay = text.parse::<i64>().ok()?;
    Some(delay.max(0) as u64)
}

fn collect_channels<'a>(args: impl Iterator<Item = &'a str>) -> adc_poll::Result<ChannelSelection> {
    let mut channels = ChannelSelection::new();
    for text in args {
        channels.select(text.parse()?)?;
    }
    Ok(channels)
}

// --------------------------------------------------------------------------

fn main() {
    let mut cmd = build_command();

    let args = match cmd.clone().try_get_matches() {
        Ok(args) => args,
        Err(err) => {
            if err.kind() == ErrorKind::DisplayVersion {
                let _ = err.print();
                process::exit(0);
            }
            if err.kind() != ErrorKind::DisplayHelp {
                println!("{}", err);
            }
            usage(&mut cmd);
        }
    };

    let delay_us = match args.get_one::<String>("delay") {
        Some(text) => match parse_delay(text) {
            Some(delay) => delay,
            None => {
                println!("invalid delay '{}'", text);
                usage(&mut cmd);
            }
        },
        None => DFLT_DELAY_US,
    };

    let channels = match args.get_many::<String>("channel") {
        Some(vals) => match collect_channels(vals.map(String::as_str)) {
            Ok(channels) => channels,
            Err(err) => {
                println!("{}", err);
                usage(&mut cmd);
            }
        },
        None => {
            println!("List of ADC channels is required");
            usage(&mut cmd);
        }
    };

    // ---- Handle ^C for a graceful shutdown -----

    let quit = Arc::new(AtomicBool::new(false));
    let q = quit.clone();

    if let Err(err) = ctrlc::set_handler(move || q.store(true, Ordering::SeqCst)) {
        eprintln!("Error setting Ctrl-C handler: {}", err);
        process::exit(1);
    }

    let start = Timeval::now().unwrap_or_else(|err| {
        eprintln!("clock: start: {}", err);
        process::exit(1);
    });

    let poll = PollLoop::new(channels, delay_us, quit);

    let count = poll.run().unwrap_or_else(|err| {
        eprintln!("poll: {}", err);
        process::exit(1);
    });

    match Timeval::now() {
        Ok(end) => print!("{}", PollSummary::new(start, end, count)),
        Err(err) => eprintln!("clock: end: {}", err),
    }
}

// --------------------------------------------------------------------------
