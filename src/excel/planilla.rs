use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use strsim::jaro_winkler;

use crate::error::{MsmlError, Result};
use crate::excel::io::texto_celda;
use crate::models::Registro;

/// Columna con el nombre de pila del estudiante.
pub const COLUMNA_NOMBRE: &str = "First Name";

/// Umbral de similitud para sugerir un apellido cuando la búsqueda falla.
const UMBRAL_SUGERENCIA: f64 = 0.8;

/// Fila de la planilla: `clave` es la primera columna (apellido del estudiante).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fila {
    pub clave: String,
    pub celdas: Vec<String>,
}

/// Hoja maestra en forma tabular. La primera fila son encabezados; la primera
/// columna es el índice de filas y no forma parte de `columnas`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planilla {
    columnas: Vec<String>,
    filas: Vec<Fila>,
}

impl Planilla {
    /// Construye la planilla desde filas de texto (encabezado incluido).
    /// Filas sin clave (típicamente filas en blanco al final de la hoja) se omiten.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Planilla> {
        let mut it = rows.into_iter();
        let encabezado = it.next().ok_or(MsmlError::PlanillaVacia)?;
        let columnas: Vec<String> = encabezado.into_iter().skip(1).collect();

        let filas = it
            .filter_map(|row| {
                let mut celdas = row.into_iter();
                let clave = celdas.next().unwrap_or_default();
                if clave.trim().is_empty() {
                    return None;
                }
                Some(Fila { clave, celdas: celdas.collect() })
            })
            .collect();

        Ok(Planilla { columnas, filas })
    }

    pub fn columnas(&self) -> &[String] {
        &self.columnas
    }

    pub fn filas(&self) -> &[Fila] {
        &self.filas
    }

    /// Valor de la columna indicada en la fila; `None` si está vacío o no existe.
    pub fn valor<'a>(&self, fila: &'a Fila, columna: &str) -> Option<&'a str> {
        let idx = self.columnas.iter().position(|c| c == columna)?;
        fila.celdas.get(idx).map(String::as_str).filter(|v| !v.trim().is_empty())
    }

    /// Registro de la fila: pares (columna, valor) sin celdas vacías.
    pub fn registro(&self, fila: &Fila) -> Registro {
        self.columnas
            .iter()
            .zip(fila.celdas.iter())
            .filter(|(c, _)| !c.is_empty())
            .map(|(c, v)| (c.as_str(), v.as_str()))
            .collect()
    }

    /// Busca un estudiante por `Apellido` o `Apellido_Nombre`.
    ///
    /// Debe existir exactamente una fila; si no hay ninguna se sugiere el
    /// candidato más parecido, si hay varias se listan sus nombres de pila.
    pub fn buscar_estudiante(&self, consulta: &str) -> Result<&Fila> {
        let (apellido, nombre) = match consulta.split_once('_') {
            Some((a, n)) => (a, n),
            None => (consulta, ""),
        };

        let coincidencias: Vec<&Fila> = self
            .filas
            .iter()
            .filter(|f| f.clave == apellido)
            .filter(|f| nombre.is_empty() || self.valor(f, COLUMNA_NOMBRE) == Some(nombre))
            .collect();

        match coincidencias.as_slice() {
            [fila] => Ok(*fila),
            [] => Err(MsmlError::RegistroNoEncontrado {
                consulta: consulta.to_string(),
                sugerencia: self.sugerir(consulta, !nombre.is_empty()),
            }),
            varias => Err(MsmlError::RegistroAmbiguo {
                consulta: consulta.to_string(),
                nombres: varias
                    .iter()
                    .map(|f| self.valor(f, COLUMNA_NOMBRE).unwrap_or_default().to_string())
                    .collect(),
            }),
        }
    }

    fn sugerir(&self, consulta: &str, con_nombre: bool) -> Option<String> {
        self.filas
            .iter()
            .map(|f| match (con_nombre, self.valor(f, COLUMNA_NOMBRE)) {
                (true, Some(n)) => format!("{}_{}", f.clave, n),
                _ => f.clave.clone(),
            })
            .map(|candidato| (jaro_winkler(consulta, &candidato), candidato))
            .filter(|(score, _)| *score >= UMBRAL_SUGERENCIA)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, candidato)| candidato)
    }
}

/// Lee la primera hoja del workbook y la devuelve como `Planilla`.
pub fn leer_planilla<P: AsRef<Path>>(path: P) -> Result<Planilla> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let sheet_names = workbook.sheet_names().to_owned();
    let Some(primera_hoja) = sheet_names.first() else {
        return Err(MsmlError::PlanillaVacia);
    };
    let range = workbook.worksheet_range(primera_hoja)?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(|c| texto_celda(c).unwrap_or_default()).collect())
        .collect();
    tracing::info!(hoja = %primera_hoja, filas = rows.len(), "planilla leída");
    Planilla::from_rows(rows)
}
