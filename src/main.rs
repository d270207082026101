use iscsi_subnet_check::cmd::CommandLine;
use iscsi_subnet_check::logging::init_logging;
use iscsi_subnet_check::{output, run};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cmd = CommandLine::parse_args();
    init_logging(&cmd.log_config)?;
    log::info!("#Start main()");

    // Fail verdicts are results, not errors: exit status stays 0
    let report = run(&cmd).await?;
    output::print(&report, cmd.format);

    log::info!("#End main()");
    Ok(())
}
