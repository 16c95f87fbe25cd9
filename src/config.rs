//! Configuración de línea de comandos.
//!
//! Cada opción puede venir de un argumento, de una variable de entorno o de un
//! `.env` en el directorio de trabajo (cargado en `main` antes de parsear).

use std::path::PathBuf;

use clap::Parser;

/// Ruta del workbook maestro relativa al home del usuario.
const DATA_PATH: [&str; 3] = ["OneDrive - Milwaukee School of Engineering", "MSML Admin", "msml.xlsx"];

/// Ruta por defecto del workbook maestro.
pub fn default_data_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    DATA_PATH.iter().fold(home, |acc, p| acc.join(p))
}

/// Dado el XLSX maestro de planificación del MSML, produce el plan de asesoría
/// de un estudiante o lista los estudiantes que planean tomar un curso.
#[derive(Debug, Clone, Parser)]
#[command(name = "msml", version, about = "Advising plans and requirement checks from the MSML master workbook.")]
pub struct Config {
    /// LastName (if unique) | LastName_FirstName | CourseCode
    pub name: String,

    /// Workbook to analyze.
    #[arg(short, long, env = "MSML_FILE", default_value_os_t = default_data_path())]
    pub file: PathBuf,

    /// Directory holding per-student plan documents.
    #[arg(long, env = "MSML_PLANS_DIR")]
    pub plans_dir: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
