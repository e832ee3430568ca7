mod args;
mod config;
mod menu;
mod reader;
mod writer;

use tbl::{input::InputCommand, services::CommandService, Result};

use std::{io, path::PathBuf};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let mut command_service = tbl::build_command_service();

    match args::parse_input_arg()? {
        Some(input_path) => {
            log::debug!("Found filepath as input arg: {input_path:?}");

            process_data(&mut command_service, input_path)?;

            log::debug!("Process complete. Beginning report...");

            report_to_std_out(&command_service)?;
        }
        None => {
            log::debug!("No input file given, starting interactive menu");

            let stdin = io::stdin();
            let stdout = io::stdout();

            menu::Session::new(stdin.lock(), stdout.lock()).run(&mut command_service)?;
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read command file and apply every command to the ledger, skipping the ones that fail
fn process_data(command_service: &mut CommandService, input_path: PathBuf) -> Result {
    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputCommand>() {
        log::debug!("Parsing record into InputCommand: {record:?}");
        let input_command = match record {
            Ok(input_command) => input_command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_command into Command: {input_command:?}");
        let command = match input_command.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = command_service.execute(command) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

/// Build report from the ledger, and write report to stdout
fn report_to_std_out(command_service: &CommandService) -> Result {
    let report = command_service.ledger().account_reports();
    log::debug!("Successfully built reports for {} accounts", report.len());

    let output = writer::write_reports(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
