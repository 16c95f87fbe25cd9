use std::fmt;

use serde::Serialize;

use crate::algorithm::{clasificar_etiqueta, CampoRegistro};
use crate::error::Result;
use crate::excel::{Planilla, COLUMNA_NOMBRE};
use crate::models::Termino;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coincidencia {
    pub apellido: String,
    pub nombre: String,
    pub termino: Termino,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalTermino {
    pub termino: Termino,
    pub estudiantes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumenCurso {
    pub codigo: String,
    pub coincidencias: Vec<Coincidencia>,
    pub por_termino: Vec<TotalTermino>,
}

/// Lista los estudiantes que planean tomar `codigo`.
///
/// Sólo se revisan columnas de curso (`<término> <casilla>`); las columnas de
/// metadatos nunca generan coincidencias. La comparación es exacta sobre el
/// código (sin distinguir mayúsculas), no una búsqueda de texto libre.
pub fn summarize_course(planilla: &Planilla, codigo: &str) -> Result<ResumenCurso> {
    let buscado = codigo.trim().to_uppercase();
    let mut coincidencias = Vec::new();

    for (idx, columna) in planilla.columnas().iter().enumerate() {
        let CampoRegistro::Curso { termino, .. } = clasificar_etiqueta(columna)? else { continue };
        for fila in planilla.filas() {
            let Some(valor) = fila.celdas.get(idx) else { continue };
            if valor.trim().to_uppercase() == buscado {
                coincidencias.push(Coincidencia {
                    apellido: fila.clave.clone(),
                    nombre: planilla.valor(fila, COLUMNA_NOMBRE).unwrap_or_default().to_string(),
                    termino,
                });
            }
        }
    }

    let mut por_termino: Vec<TotalTermino> = Vec::new();
    for c in &coincidencias {
        match por_termino.iter_mut().find(|t| t.termino == c.termino) {
            Some(t) => t.estudiantes += 1,
            None => por_termino.push(TotalTermino { termino: c.termino, estudiantes: 1 }),
        }
    }

    tracing::info!(codigo = %buscado, coincidencias = coincidencias.len(), "búsqueda por curso");
    Ok(ResumenCurso { codigo: buscado, coincidencias, por_termino })
}

impl fmt::Display for ResumenCurso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coincidencias.is_empty() {
            return writeln!(f, "No students planning {}", self.codigo);
        }
        writeln!(f, "{:<16} {:<16} {}", "Last Name", "First Name", "Term")?;
        for c in &self.coincidencias {
            writeln!(f, "{:<16} {:<16} {}", c.apellido, c.nombre, c.termino)?;
        }
        writeln!(f, "\nStudents per term:")?;
        for t in &self.por_termino {
            writeln!(f, "{}: {}", t.termino, t.estudiantes)?;
        }
        Ok(())
    }
}
