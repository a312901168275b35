mod commands;
mod exit;
mod terminal;

use std::io::IsTerminal;
use std::process::ExitCode;

use commands::{CommandLine, walk};
use ptrwalk_common::config::Config;
use ptrwalk_common::error;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.verbose);

    let decorated: bool = cfg.quiet == 0 && std::io::stdout().is_terminal();
    print::banner(cfg.no_banner || !decorated, cfg.quiet);

    match walk::walk(&commands.mask, &commands.network, &cfg, decorated).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            exit::code_for(&err)
        }
    }
}
