// src/main.rs

use rhobatch::{cli, exit_code_from, exit_codes, logging, run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("rhobatch error: {err:?}");
        std::process::exit(exit_codes::INVALID);
    }
    std::process::exit(exit_code_from(run(args).await));
}
