//! Capa de reporte: une la planilla con el núcleo de conciliación.
//!
//! - `estudiante`: plan de asesoría y chequeo de requisitos de un estudiante
//! - `curso`: estudiantes que planean tomar un curso

pub mod curso;
pub mod estudiante;

pub use curso::{summarize_course, Coincidencia, ResumenCurso, TotalTermino};
pub use estudiante::{parse_flag, summarize_student, ResumenEstudiante, COLUMNA_CSC5610, COLUMNA_MTH5810};

use crate::config::Config;
use crate::error::Result;
use crate::excel::{abrir_fuente, leer_planilla};
use crate::models::is_course_code;

/// Ejecuta la consulta pedida por línea de comandos y devuelve el reporte ya
/// formateado (texto o JSON).
pub fn ejecutar(config: &Config) -> Result<String> {
    let fuente = abrir_fuente(&config.file)?;
    let planilla = leer_planilla(fuente.ruta())?;

    if is_course_code(&config.name) {
        let resumen = summarize_course(&planilla, &config.name)?;
        return render(&resumen, config.json);
    }
    let resumen = summarize_student(&planilla, &config.name, config.plans_dir.as_deref())?;
    render(&resumen, config.json)
}

fn render<T: serde::Serialize + std::fmt::Display>(resumen: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(resumen)?)
    } else {
        Ok(resumen.to_string())
    }
}
