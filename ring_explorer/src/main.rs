use clap::Parser;
use cli::Cli;
use std::io::Write;

mod cli;
mod run;

pub type GeneralResult<T = ()> =
    core::result::Result<T, Box<dyn std::error::Error + core::marker::Send + core::marker::Sync>>;

fn main() -> GeneralResult {
    if let Err(e) = init_logger() {
        eprintln!("Couldn't initialize global logger: {e}");
        return Err(e);
    }

    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);

    match run::execute(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            Err(e)
        }
    }
}

fn init_logger() -> GeneralResult {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {:<28} {}",
                chrono::Local::now().format("%m/%d/%Y %H:%M:%S"),
                record.level(),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .target(if let Ok(log_file) = std::env::var("LOG_FILE") {
            let file = std::fs::File::options()
                .append(true)
                .create(true)
                .open(log_file)?;
            let writer = std::io::LineWriter::new(file);
            env_logger::Target::Pipe(Box::new(writer))
        } else {
            env_logger::Target::Stderr
        })
        .init();

    Ok(())
}
