use rcdcl::*;
use rcdcl::format::Names;

use argparse::*;
use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, BufRead, BufReader};
use std::fs::File;
use std::process;
use xz2::bufread::XzDecoder;
use bzip2::bufread::BzDecoder;
use flate2::bufread::GzDecoder;

/// This simple structure encapsulates the options and arguments that are passed to the solver using
/// the command line interface (cli).
struct CliArgs {
    filename          : Option<String>,
    clauses           : Vec<String>,
    verbosity         : usize,
    sequential        : bool,
    parallel_threshold: Option<usize>
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e)   => {
            eprintln!("error: {:#}", e);
            1
        }
    };
    process::exit(code);
}

fn run() -> Result<i32> {
    let args = arguments();
    check(&args)?;
    init_logging(args.verbosity);
    print_header();

    let mut names = Names::new();
    let formula   = if !args.clauses.is_empty() {
        names.parse_tokens(args.clauses.as_slice())?
    } else {
        names.load(input(&args)?)?
    };
    info!(clauses = formula.len(), variables = names.len(), "loaded");

    let mut solver = Solver::with_config(config(&args));
    solver.add_formula(formula);

    let outcome = solver.solve()?;
    print_result(&names, &solver, &outcome);

    Ok(if outcome.is_satisfiable() { 10 } else { 20 })
}

fn print_header() {
    println!("c ******************************************************************************");
    println!("c This is the `rcdcl` SAT solver version {}", env!("CARGO_PKG_VERSION"));
    println!("c ------------------------------------------------------------------------------");
    println!("c This software is licensed to you under the terms of the MIT license");
    println!("c ==============================================================================");
}

fn print_result(names: &Names, solver: &Solver, outcome: &Outcome){
    match outcome.model() {
        Some(model) => {
            println!("s SATISFIABLE");
            println!("v {}", names.render_model(model));
        },
        None => println!("s UNSATISFIABLE")
    }
    println!("c ------------------------------------------------------------------------------");
    println!("c nb_variables {}", solver.nb_vars());
    println!("c nb_clauses   {}", solver.clauses().nb_problem());
    println!("c nb_learned   {}", solver.clauses().nb_learned());
    println!("c ******************************************************************************");
}

/// This function parses the command line arguments of the program and returns an object
/// representing these arguments.
fn arguments() -> CliArgs {
    let mut options = CliArgs {
        filename          : None,
        clauses           : vec![],
        verbosity         : 0,
        sequential        : false,
        parallel_threshold: None
    };

    // This scope closes the borrows of `options` held by the parser, so that it can be returned.
    {
        let mut parser = ArgumentParser::new();
        parser.set_description("rcdcl, a conflict driven clause learning propositional SAT solver");

        parser.refer(&mut options.filename)
              .add_option(&["-f", "--file"],
                          StoreOption,
                          "A file listing the clauses to solve, one or more per line. It may be \
                           compressed with bz2 (bzip2), gz (gzip) or xz (lzma)");
        parser.refer(&mut options.verbosity)
              .add_option(&["-v", "--verbose"],
                          IncrBy(1usize),
                          "Log more details on stderr (repeat for even more)");
        parser.refer(&mut options.sequential)
              .add_option(&["--sequential"],
                          StoreTrue,
                          "Never scan the clauses in parallel");
        parser.refer(&mut options.parallel_threshold)
              .add_option(&["--parallel-threshold"],
                          StoreOption,
                          "Minimum number of clauses for a propagation scan to run in parallel");
        parser.refer(&mut options.clauses)
              .add_argument("clauses",
                            List,
                            "Clauses to solve, e.g. `a,~b c` (not together with --file). When neither a file nor clauses are \
                             given, the clauses are read from stdin");

        parser.parse_args_or_exit();
    }

    options
}

/// Rejects the combinations of options that can not be honored together
fn check(args: &CliArgs) -> Result<()> {
    if args.filename.is_some() && !args.clauses.is_empty() {
        bail!("clauses can be given either with --file or on the command line, not both");
    }
    Ok(())
}

fn config(args: &CliArgs) -> SolverConfig {
    let config = if args.sequential { SolverConfig::sequential() } else { SolverConfig::default() };
    match args.parallel_threshold {
        Some(threshold) if !args.sequential => config.with_parallel_threshold(threshold),
        _                                   => config
    }
}

/// Installs a subscriber writing to stderr. `RUST_LOG` wins over the `-v` count when it is set.
fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// This function returns the BufRead reader which can be used to iterate over all the lines of the
/// input. If the cli-args did not provide any input file, then stdin is used to read the problem.
/// Otherwise, the input file is read (and potentially unpacked).
/// Whenever the filename ends with one of .bz2, .gz, .gzip, .lzma or .xz, the input file will be
/// de-compressed using the ad-hoc decoder. In all other cases, the input file is assumed to be in
/// plaintext format.
fn input(args: &CliArgs) -> Result<Box<dyn BufRead>> {
    match args.filename {
        None => {
            Ok(Box::new(BufReader::new(stdin())))
        },
        Some(ref fname) => {
            let file  = File::open(fname).with_context(|| format!("cannot open {}", fname))?;
            let input = BufReader::new(file);

            let canonical = fname.to_lowercase();
            if canonical.ends_with(".bz2") {
                return Ok(Box::new(BufReader::new(BzDecoder::new(input))));
            }
            if canonical.ends_with(".gz") || canonical.ends_with(".gzip") {
                return Ok(Box::new(BufReader::new(GzDecoder::new(input))));
            }
            if canonical.ends_with(".xz") || canonical.ends_with(".lzma") {
                return Ok(Box::new(BufReader::new(XzDecoder::new(input))));
            }

            // it is assumed that the input file is in plain text (.txt, .cnf, ...)
            Ok(Box::new(input))
        }
    }
}
