use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use truffle_pricing_rs::cli::{Cli, Command, InputArgs};
use truffle_pricing_rs::error::Result;
use truffle_pricing_rs::export::write_results_json;
use truffle_pricing_rs::interface::{
    collect_inputs, display_inputs, display_results, prompt_action, prompt_field,
    prompt_field_choice, prompt_yes_no, Action, CurrencyFormat,
};
use truffle_pricing_rs::logging::init_tracing;
use truffle_pricing_rs::state::{load_scenario, PricingSession, Scenario};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scenario = match &cli.scenario {
        Some(path) => {
            let scenario = load_scenario(path)?;
            info!(path = %path.display(), "loaded scenario");
            scenario
        }
        None => Scenario::default(),
    };

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(scenario, cli.currency, cli.scenario.is_some()),
        Command::Calc { inputs, json } => cmd_calc(scenario, &inputs, json, cli.currency),
    }
}

/// Fill in the form, then keep editing and re-rendering until the user quits.
fn cmd_interactive(scenario: Scenario, currency: CurrencyFormat, prefilled: bool) -> Result<()> {
    let mut session = PricingSession::new(scenario.costs, scenario.pricing);

    println!("Truffle pricing - your professional planner");
    println!();

    if prefilled {
        display_inputs(session.costs(), session.pricing(), currency);
        if prompt_yes_no("Fill in the form anyway?", false)? {
            collect_inputs(&mut session, currency)?;
        }
    } else {
        collect_inputs(&mut session, currency)?;
    }

    display_results(session.results(), currency);

    loop {
        match prompt_action()? {
            Action::EditField => {
                let Some(field) = prompt_field_choice()? else {
                    continue;
                };
                let value = prompt_field(field, session.value(field), currency)?;
                session.set(field, value);
                display_results(session.results(), currency);
            }
            Action::ShowInputs => {
                display_inputs(session.costs(), session.pricing(), currency);
            }
            Action::ReenterAll => {
                collect_inputs(&mut session, currency)?;
                display_results(session.results(), currency);
            }
            Action::Reset => {
                if prompt_yes_no("Clear every field?", false)? {
                    session.reset();
                    println!("Form reset.");
                    display_results(session.results(), currency);
                }
            }
            Action::Quit => break,
        }
    }

    info!("interactive session finished");
    Ok(())
}

/// One-shot calculation from flags layered over the scenario.
fn cmd_calc(
    scenario: Scenario,
    inputs: &InputArgs,
    json: Option<PathBuf>,
    currency: CurrencyFormat,
) -> Result<()> {
    let (costs, pricing) = inputs.apply(scenario.costs, scenario.pricing);
    let session = PricingSession::new(costs, pricing);

    if costs.batch_size == 0 {
        println!("Batch size is 0: unit figures stay at zero until a batch size is given.");
    }

    display_results(session.results(), currency);

    if let Some(path) = json {
        write_json(&session, &path)?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}

fn write_json(session: &PricingSession, path: &Path) -> Result<()> {
    write_results_json(session.costs(), session.pricing(), session.results(), path)?;
    info!(path = %path.display(), "wrote results json");
    Ok(())
}
