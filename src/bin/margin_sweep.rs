use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use truffle_pricing_rs::cli::InputArgs;
use truffle_pricing_rs::export::{write_sweep_csv, write_sweep_json};
use truffle_pricing_rs::interface::{display_sweep, CurrencyFormat};
use truffle_pricing_rs::logging::init_tracing;
use truffle_pricing_rs::pricing::{
    lowest_margin_within_capacity, margin_sweep, SweepConfig, DEFAULT_SWEEP_END,
    DEFAULT_SWEEP_START, DEFAULT_SWEEP_STEP,
};
use truffle_pricing_rs::state::{load_scenario, Scenario};

#[derive(Parser, Debug)]
#[command(name = "margin_sweep")]
#[command(about = "Evaluate truffle pricing across a range of profit margins")]
struct Args {
    /// First margin to evaluate (percent)
    #[arg(long, default_value_t = DEFAULT_SWEEP_START, allow_negative_numbers = true)]
    start: f64,

    /// Last margin to evaluate (percent, inclusive)
    #[arg(long, default_value_t = DEFAULT_SWEEP_END, allow_negative_numbers = true)]
    end: f64,

    /// Margin increment between rows (percent)
    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    step: f64,

    /// Report the lowest margin that reaches the goal with at most this many units a month
    #[arg(long)]
    max_units: Option<u64>,

    /// JSON file pre-filling costs and goal
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    // Flag values override the scenario; --margin is replaced by the sweep
    #[command(flatten)]
    inputs: InputArgs,

    /// Output CSV file for all rows
    #[arg(long, default_value = "margin_sweep.csv")]
    csv: PathBuf,

    /// Optional JSON file for all rows
    #[arg(long)]
    json: Option<PathBuf>,

    /// Currency style for the printed table
    #[arg(short, long, value_enum, default_value_t = CurrencyFormat::Brl)]
    currency: CurrencyFormat,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let scenario = match &args.scenario {
        Some(path) => match load_scenario(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading scenario {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    let (costs, pricing) = args.inputs.apply(scenario.costs, scenario.pricing);
    if costs.batch_size == 0 {
        eprintln!("Warning: batch size is 0, every row will be zero");
    }

    let config = SweepConfig {
        start: args.start,
        end: args.end,
        step: args.step,
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    info!(start = config.start, end = config.end, step = config.step, "running sweep");

    let rows = margin_sweep(&costs, &pricing, &config);
    display_sweep(&rows, args.currency);

    if let Some(max_units) = args.max_units {
        match lowest_margin_within_capacity(&rows, max_units) {
            Some(row) => println!(
                "Lowest margin reaching the goal within {} units: {}% ({} units at {})",
                max_units,
                row.margin_percent,
                row.results.units_needed_for_goal,
                args.currency.format(row.results.sales_price)
            ),
            None => println!(
                "No margin in the sweep reaches the goal within {} units.",
                max_units
            ),
        }
        println!();
    }

    // Write outputs
    if let Err(e) = write_sweep_csv(&rows, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote {} rows to {:?}", rows.len(), args.csv);
    }

    if let Some(json) = &args.json {
        if let Err(e) = write_sweep_json(&rows, json) {
            eprintln!("Error writing JSON: {}", e);
        } else {
            println!("Wrote {} rows to {:?}", rows.len(), json);
        }
    }
}
