// --- Plan de asesoría MSML - Archivo principal ---

use std::process::ExitCode;

use clap::Parser;
use msmlplan::{ejecutar, Config};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    match ejecutar(&config) {
        Ok(reporte) => {
            print!("{}", reporte);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "no se pudo generar el reporte");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
