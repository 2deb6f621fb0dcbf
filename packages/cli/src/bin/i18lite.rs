/**
 * i18lite CLI
 *
 * Translate keys and render tagged translations from JSON resources
 */
use i18lite_cli::{build_command, run};
use std::process;

fn main() {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            for warning in &output.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("{}", output.text);
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
