use std::{io::BufReader, path::PathBuf, str::FromStr};

use stoat_sat::{config::Config, context::Context, reports::Report};

use parse_args::parse_args;

mod parse_args;

#[derive(Default)]
struct CliOptions {
    model: bool,
    stats: bool,
}

fn main() {
    let mut cli_options = CliOptions::default();
    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();

    parse_args(&args, &mut config, &mut cli_options);

    let path = match args.last().filter(|arg| !arg.starts_with('-')) {
        Some(arg) if args.len() > 1 => match PathBuf::from_str(arg) {
            Ok(path) => path,
            Err(_) => {
                println!("c Path to CNF required");
                std::process::exit(1);
            }
        },
        _ => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let context_result = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => Context::from_dimacs(
            BufReader::new(xz2::read::XzDecoder::new(&file)),
            config,
        ),

        _ => Context::from_dimacs(BufReader::new(&file), config),
    };

    let mut ctx = match context_result {
        Ok(context) => context,
        Err(e) => {
            println!("c Failed to load formula: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c Formula with {} variables over {} clauses",
        ctx.variable_count(),
        ctx.clause_count()
    );

    let result = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    if cli_options.stats {
        println!("c decisions:   {}", ctx.counters.total_decisions);
        println!("c conflicts:   {}", ctx.counters.total_conflicts);
        println!("c retractions: {}", ctx.counters.total_retractions);
        println!("c iterations:  {}", ctx.counters.total_iterations);
        println!("c time:        {:.2?}", ctx.counters.time);
    }

    println!("s {}", ctx.report());

    if result == Report::Satisfiable && cli_options.model {
        println!("v {}", ctx.variable_db.valuation_string())
    }
}
