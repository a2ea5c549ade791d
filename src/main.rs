use std::path::PathBuf;
use std::process::ExitCode;

use activity_pdf::{Activity, Error, RenderConfig};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "activity-pdf", version, about)]
struct Cli {
    /// Activity record as JSON.
    record: PathBuf,

    /// Directory the PDF is written to [env: ACTIVITY_PDF_OUTPUT_DIR].
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Root for relative signature image paths [env: ACTIVITY_PDF_ASSETS].
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Write the PDF to standard output instead of the output directory.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

fn run(cli: Cli) -> Result<(), Error> {
    let json = std::fs::read_to_string(&cli.record)?;
    let activity = Activity::from_json(&json)?;

    let mut config = RenderConfig::from_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(dir) = cli.assets {
        config.asset_dir = Some(dir);
    }

    if cli.stdout {
        let images = config.image_source();
        let stdout = std::io::stdout().lock();
        activity_pdf::write_activity_pdf(&activity, &images, stdout)?;
        return Ok(());
    }

    let path = activity_pdf::compose_to_file(&activity, &config)?;
    println!("{}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
