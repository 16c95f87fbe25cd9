//! Errores del crate.
//!
//! El núcleo (agrupación por término y conciliación) sólo puede fallar al
//! decodificar un código de término; el resto de variantes pertenece a la capa
//! de reporte (planilla, flags de admisión, búsqueda de estudiantes).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsmlError {
    /// Una etiqueta tiene forma `<dígito>S<año> ...` pero el código no es decodificable.
    #[error("código de término inválido '{codigo}': {motivo}")]
    CodigoTermino { codigo: String, motivo: &'static str },

    #[error("columna '{0}' ausente en el registro")]
    FlagFaltante(String),

    #[error("columna '{0}' vacía en el registro")]
    FlagVacia(String),

    #[error("valor '{valor}' no es un booleano válido para la columna '{columna}'")]
    FlagInvalida { columna: String, valor: String },

    #[error("no hay registros para '{consulta}'{}", sufijo_sugerencia(.sugerencia))]
    RegistroNoEncontrado { consulta: String, sugerencia: Option<String> },

    #[error("{} registros coinciden con '{consulta}': {nombres:?}", .nombres.len())]
    RegistroAmbiguo { consulta: String, nombres: Vec<String> },

    #[error("la hoja no contiene encabezados")]
    PlanillaVacia,

    #[error("no se pudo abrir el workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("no se pudo crear copia local de {ruta:?}: {source}")]
    CopiaLocal {
        ruta: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn sufijo_sugerencia(sugerencia: &Option<String>) -> String {
    match sugerencia {
        Some(s) => format!(" (¿quisiste decir '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, MsmlError>;
