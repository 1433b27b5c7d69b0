use std::process::ExitCode;

use vcheck::cli::{Cli, outcome};
use vcheck::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    vcheck::logging::init(cli.verbose);

    let result = match Config::from_cli(&cli) {
        Ok(config) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(vcheck::app::run(&config, &mut std::io::stdout().lock())),
        Err(e) => Err(e),
    };

    let (code, output) = outcome(&result);
    if let Some(output) = output {
        print!("{output}");
    }
    Ok(ExitCode::from(code))
}
