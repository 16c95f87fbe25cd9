//! Agrupación del registro de un estudiante por término.
//!
//! Cada etiqueta del registro se clasifica una sola vez: las que empiezan con
//! un código de término seguido de un espacio (`1S24 Course 1`) son casillas de
//! curso, el resto son metadatos (nombre, flags de admisión, etc.).

use crate::error::Result;
use crate::models::{ClassList, Registro, Termino};

/// Clasificación de una etiqueta de columna.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoRegistro<'a> {
    /// Casilla de curso del término indicado; `sufijo` identifica la casilla.
    Curso { termino: Termino, sufijo: &'a str },
    Metadato,
}

/// Clasifica una etiqueta.
///
/// Devuelve error cuando la etiqueta tiene forma de casilla de curso
/// (`<dígito>S<dos caracteres> ...`) pero el código no se puede decodificar.
pub fn clasificar_etiqueta(etiqueta: &str) -> Result<CampoRegistro<'_>> {
    let Some((codigo, sufijo)) = etiqueta.split_once(' ') else {
        return Ok(CampoRegistro::Metadato);
    };
    let bytes = codigo.as_bytes();
    let parece_termino = bytes.len() == 4 && bytes[0].is_ascii_digit() && bytes[1] == b'S';
    if !parece_termino {
        return Ok(CampoRegistro::Metadato);
    }
    let termino = Termino::from_codigo(codigo)?;
    Ok(CampoRegistro::Curso { termino, sufijo })
}

/// Dado el registro de un estudiante, extrae los cursos agrupados por término.
///
/// Los valores no se validan: un código mal formado pasa tal cual y terminará
/// como curso extra en la conciliación.
pub fn get_class_list(registro: &Registro) -> Result<ClassList> {
    let mut plan = ClassList::new();
    for (etiqueta, valor) in registro.iter() {
        if let CampoRegistro::Curso { termino, .. } = clasificar_etiqueta(etiqueta)? {
            if valor.trim().is_empty() {
                continue;
            }
            plan.push(termino, valor);
        }
    }
    tracing::debug!(terminos = plan.terminos().len(), "plan agrupado por término");
    Ok(plan)
}
