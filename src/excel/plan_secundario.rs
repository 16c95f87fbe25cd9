use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

/// Resultado de la búsqueda del documento de plan del estudiante. Su
/// contenido no se concilia; sólo se informa si existe y dónde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSecundario {
    pub encontrado: bool,
    pub ruta: Option<PathBuf>,
}

impl PlanSecundario {
    pub fn no_encontrado() -> Self {
        PlanSecundario { encontrado: false, ruta: None }
    }
}

/// Busca en `dir` el documento de plan más reciente cuyo nombre contenga el
/// apellido (y el nombre, si se entrega). Ignora archivos ocultos y temporales
/// de editores (`.~plan.docx`, `~$plan.docx`, `plan.docx~`).
pub fn buscar_plan_secundario(dir: &Path, apellido: &str, nombre: Option<&str>) -> PlanSecundario {
    let read = match fs::read_dir(dir) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "no se pudo leer el directorio de planes");
            return PlanSecundario::no_encontrado();
        }
    };

    let apellido = apellido.to_lowercase();
    let nombre = nombre.map(str::to_lowercase).filter(|n| !n.is_empty());
    let mut best: Option<(SystemTime, PathBuf)> = None;

    for entry in read.flatten() {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        let Some(name_raw) = p.file_name().and_then(|s| s.to_str()) else { continue };
        if name_raw.starts_with('.') || name_raw.starts_with('~') || name_raw.ends_with('~') {
            continue;
        }
        let name = name_raw.to_lowercase();
        if !name.contains(&apellido) {
            continue;
        }
        if let Some(n) = &nombre {
            if !name.contains(n.as_str()) {
                continue;
            }
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else { continue };
        match &best {
            Some((best_time, _)) if *best_time >= modified => (),
            _ => best = Some((modified, p)),
        }
    }

    match best {
        Some((_, ruta)) => PlanSecundario { encontrado: true, ruta: Some(ruta) },
        None => PlanSecundario::no_encontrado(),
    }
}
