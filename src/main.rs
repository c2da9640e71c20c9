use std::process::ExitCode;

use log::error;
use u_timesheet::pipeline::{self, PipelineConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    match pipeline::run(&config, &mut rand::rng()) {
        Ok(_) => {
            println!(
                "Schedule with projects and meetings has been written to {}",
                config.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
