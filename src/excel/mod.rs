//! Módulo `excel`: todo el IO sobre el workbook maestro.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine
//! - `acceso`: apertura del archivo (copia local si está bloqueado)
//! - `planilla`: carga de la hoja en forma tabular y búsqueda de estudiantes
//! - `plan_secundario`: búsqueda del documento de plan de un estudiante

/// Helpers de conversión de celdas
mod io;

pub mod acceso;
pub mod plan_secundario;
pub mod planilla;

pub use acceso::{abrir_fuente, crear_copia_local, ArchivoFuente};
pub use io::texto_celda;
pub use plan_secundario::{buscar_plan_secundario, PlanSecundario};
pub use planilla::{leer_planilla, Fila, Planilla, COLUMNA_NOMBRE};
