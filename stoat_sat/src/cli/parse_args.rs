use std::time::Duration;

use stoat_sat::config::{Config, EmptyClauseTreatment};

use crate::CliOptions;

pub fn parse_args(args: &[String], config: &mut Config, cli_options: &mut CliOptions) {
    let mut index = 1;

    while index < args.len() {
        match args[index].as_str() {
            "-m" | "--model" => cli_options.model = true,

            "-s" | "--stats" => cli_options.stats = true,

            "--reject-empty-clauses" => config.empty_clause = EmptyClauseTreatment::Reject,

            "--time-limit" => {
                index += 1;
                let seconds = args.get(index).and_then(|arg| arg.parse::<u64>().ok());
                match seconds {
                    Some(seconds) => config.time_limit = Some(Duration::from_secs(seconds)),
                    None => {
                        println!("c --time-limit requires a count of seconds");
                        std::process::exit(1);
                    }
                }
            }

            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }

            _ => {}
        }

        index += 1;
    }
}

fn print_help() {
    println!("stoat_cli: a DPLL satisfiability solver for DIMACS cnf files");
    println!();
    println!("Usage: stoat_cli [options] <path>");
    println!();
    println!("Options:");
    println!("  -m, --model              Print a satisfying valuation, if one is found");
    println!("  -s, --stats              Print counters from the solve");
    println!("      --time-limit <secs>  Stop the solve after the given number of seconds");
    println!("      --reject-empty-clauses");
    println!("                           Treat a zero-length clause as a load error");
    println!("  -h, --help               Print this help");
}
