/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub mod input;
pub mod merge;
pub mod output;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "mergeseq")]
struct Opt {
    /// Read from this file instead of standard input
    #[structopt(name = "input", parse(from_os_str))]
    input_filename: Option<PathBuf>,

    /// Do not print the size prompts
    #[structopt(long)]
    no_prompt: bool,

    /// How the leftover side is appended: `after` or `nested`
    #[structopt(long, default_value = "after")]
    drain: merge::Drain,
}

#[derive(Clone, Copy, Debug)]
struct RunOptions {
    prompt: bool,
    drain: merge::Drain,
}

impl From<&Opt> for RunOptions {
    fn from(opt: &Opt) -> Self {
        Self {
            prompt: !opt.no_prompt,
            drain: opt.drain,
        }
    }
}

fn read_named_sequence<R, W>(
    scanner: &mut input::Scanner<R>,
    write: &mut W,
    name: &str,
    prompt: bool,
) -> Result<Vec<i32>>
where
    R: BufRead,
    W: Write,
{
    if prompt {
        write!(write, "Enter the size of the {}", name)?;
        write.flush()?;
    }

    let len = input::read_size(scanner).with_context(|| format!("reading size {}", name))?;
    info!("reading {} element(s) for {}", len, name);

    let seq = input::read_sequence(scanner, len)
        .with_context(|| format!("reading {} element(s) after size {}", len, name))?;

    if !merge::is_descending(&seq) {
        warn!("sequence {} is not in descending order, merged output will not be sorted", name);
    }

    Ok(seq)
}

fn run<R, W>(read: R, write: &mut W, options: RunOptions) -> Result<Vec<i32>>
where
    R: BufRead,
    W: Write,
{
    let mut scanner = input::Scanner::new(read);

    let a = read_named_sequence(&mut scanner, write, "m", options.prompt)?;
    let b = read_named_sequence(&mut scanner, write, "n", options.prompt)?;

    info!("merging with drain mode `{}`", options.drain);

    let merged = merge::merge_with(&a, &b, options.drain);
    debug!("merged {} + {} into {} element(s)", a.len(), b.len(), merged.len());

    output::write_sequence(write, &merged)?;
    write.flush()?;

    Ok(merged)
}

const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

/// Malformed input exits with a distinct code from reader or writer failures.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<input::ReadInputError>() {
        Some(cause) if cause.is_invalid_input() => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let opt = Opt::from_args();

    if let Err(err) = try_main(opt) {
        eprintln!("Error: {:?}", err);
        std::process::exit(exit_code(&err));
    }
}

fn try_main(opt: Opt) -> Result<()> {
    use std::fs::File;
    use std::io::BufReader;

    let options = RunOptions::from(&opt);

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    match opt.input_filename {
        Some(filename) => {
            let file = File::open(&filename)
                .with_context(|| format!("opening {}", filename.display()))?;

            run(BufReader::new(file), &mut stdout, options)?;
        }

        None => {
            let stdin = std::io::stdin();
            run(stdin.lock(), &mut stdout, options)?;
        }
    }

    Ok(())
}
