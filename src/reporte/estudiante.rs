use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::algorithm::{get_class_list, get_requirements, Reconciliacion};
use crate::error::{MsmlError, Result};
use crate::excel::{buscar_plan_secundario, Planilla, PlanSecundario, COLUMNA_NOMBRE};
use crate::models::{ClassList, Registro};

/// Flags de la decisión de admisión.
pub const COLUMNA_CSC5610: &str = "CSC5610 Needed?";
pub const COLUMNA_MTH5810: &str = "MTH5810 Needed?";

/// Lee un flag booleano del registro. Valores ausentes o ambiguos son error:
/// nunca se asume un valor por defecto.
pub fn parse_flag(registro: &Registro, columna: &str) -> Result<bool> {
    let valor = registro.get(columna).ok_or_else(|| MsmlError::FlagFaltante(columna.to_string()))?;
    match valor.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(MsmlError::FlagInvalida { columna: columna.to_string(), valor: valor.to_string() }),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumenEstudiante {
    pub apellido: String,
    pub nombre: Option<String>,
    pub registro: Registro,
    pub plan: ClassList,
    pub requisitos: Reconciliacion,
    /// Sólo presente si se configuró un directorio de planes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_secundario: Option<PlanSecundario>,
}

/// Flag de admisión de la fila. `Registro` omite celdas vacías, así que una
/// columna presente en la planilla pero ausente del registro está en blanco.
fn flag_admision(planilla: &Planilla, registro: &Registro, columna: &str) -> Result<bool> {
    if registro.get(columna).is_none() && planilla.columnas().iter().any(|c| c == columna) {
        return Err(MsmlError::FlagVacia(columna.to_string()));
    }
    parse_flag(registro, columna)
}

/// Busca al estudiante y resume su registro: plan por término y conciliación
/// de requisitos.
pub fn summarize_student(planilla: &Planilla, consulta: &str, plans_dir: Option<&Path>) -> Result<ResumenEstudiante> {
    let fila = planilla.buscar_estudiante(consulta)?;
    let registro = planilla.registro(fila);
    let nombre = registro.get(COLUMNA_NOMBRE).map(str::to_string);

    let plan = get_class_list(&registro)?;
    let need_csc5610 = flag_admision(planilla, &registro, COLUMNA_CSC5610)?;
    let need_mth5810 = flag_admision(planilla, &registro, COLUMNA_MTH5810)?;
    let requisitos = get_requirements(&plan, need_csc5610, need_mth5810);

    let plan_secundario = plans_dir.map(|dir| buscar_plan_secundario(dir, &fila.clave, nombre.as_deref()));

    tracing::info!(
        estudiante = %fila.clave,
        no_planificados = requisitos.no_planificados().len(),
        extras = requisitos.extras().len(),
        "resumen de estudiante"
    );

    Ok(ResumenEstudiante { apellido: fila.clave.clone(), nombre, registro, plan, requisitos, plan_secundario })
}

impl fmt::Display for ResumenEstudiante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.registro)?;
        writeln!(f, "\nAdvising Plan:")?;
        write!(f, "{}", self.plan)?;
        writeln!(f, "\nRequirements Check:")?;
        write!(f, "{}", self.requisitos)?;
        if let Some(ps) = &self.plan_secundario {
            match &ps.ruta {
                Some(ruta) => writeln!(f, "\nPlan document: {}", ruta.display())?,
                None => writeln!(f, "\nPlan document: not found")?,
            }
        }
        Ok(())
    }
}
