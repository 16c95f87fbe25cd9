// Estructuras de datos principales

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{MsmlError, Result};

/// Semestre dentro del año académico. El orden de variantes es el del código
/// compacto (1 = Fall, 2 = Spring, 3 = Summer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semestre {
    Fall,
    Spring,
    Summer,
}

impl Semestre {
    pub fn nombre(self) -> &'static str {
        match self {
            Semestre::Fall => "Fall",
            Semestre::Spring => "Spring",
            Semestre::Summer => "Summer",
        }
    }
}

/// Término ya normalizado a año calendario (dos dígitos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Termino {
    pub semestre: Semestre,
    pub anio: i32,
}

impl Termino {
    /// Decodifica un código compacto `<dígito>S<año>` (ej: `1S24`).
    ///
    /// - `1` → Fall del año anterior (año académico a año calendario)
    /// - `2` → Spring del mismo año
    /// - `3` → Summer del mismo año
    /// - `0` → segundo Summer del año académico anterior, normalizado a Summer de año−1
    pub fn from_codigo(codigo: &str) -> Result<Termino> {
        let invalido = |motivo| MsmlError::CodigoTermino { codigo: codigo.to_string(), motivo };

        let bytes = codigo.as_bytes();
        if bytes.len() != 4 || bytes[1] != b'S' {
            return Err(invalido("se esperaba la forma <dígito>S<año>"));
        }
        if !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
            return Err(invalido("año no numérico"));
        }
        let anio = ((bytes[2] - b'0') as i32) * 10 + (bytes[3] - b'0') as i32;

        match bytes[0] {
            b'0' => Ok(Termino { semestre: Semestre::Summer, anio: anio - 1 }),
            b'1' => Ok(Termino { semestre: Semestre::Fall, anio: anio - 1 }),
            b'2' => Ok(Termino { semestre: Semestre::Spring, anio }),
            b'3' => Ok(Termino { semestre: Semestre::Summer, anio }),
            _ => Err(invalido("dígito de semestre fuera de 0-3")),
        }
    }
}

/// `Fall, '23`. El año siempre lleva dos dígitos (`Spring, '05`), igual que
/// en el código compacto.
impl fmt::Display for Termino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, '{:02}", self.semestre.nombre(), self.anio)
    }
}

impl Serialize for Termino {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Verdadero si `s` tiene forma de código de curso: 3 letras + 4 caracteres
/// (el sufijo puede ser comodín, ej: `CSC5xxx`).
pub fn tiene_forma_de_codigo(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.len() == 7
        && chars[..3].iter().all(|c| c.is_ascii_alphabetic())
        && chars[3..].iter().all(|c| c.is_ascii_alphanumeric())
}

/// Código de curso estricto: 3 letras + 4 dígitos (ej: `CSC5201`).
pub fn is_course_code(s: &str) -> bool {
    tiene_forma_de_codigo(s) && s.chars().skip(3).all(|c| c.is_ascii_digit())
}

/// Fila de la planilla ya limpia: pares (etiqueta, valor) en el orden de las
/// columnas, sin celdas vacías.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registro {
    campos: Vec<(String, String)>,
}

impl Registro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un campo; los valores vacíos se descartan.
    pub fn push(&mut self, etiqueta: impl Into<String>, valor: impl Into<String>) {
        let valor = valor.into();
        if valor.trim().is_empty() {
            return;
        }
        self.campos.push((etiqueta.into(), valor));
    }

    pub fn get(&self, etiqueta: &str) -> Option<&str> {
        self.campos.iter().find(|(e, _)| e == etiqueta).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.campos.iter().map(|(e, v)| (e.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.campos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campos.is_empty()
    }
}

impl<E: Into<String>, V: Into<String>> FromIterator<(E, V)> for Registro {
    fn from_iter<I: IntoIterator<Item = (E, V)>>(iter: I) -> Self {
        let mut registro = Registro::new();
        for (e, v) in iter {
            registro.push(e, v);
        }
        registro
    }
}

impl fmt::Display for Registro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancho = self.campos.iter().map(|(e, _)| e.chars().count()).max().unwrap_or(0);
        for (e, v) in &self.campos {
            writeln!(f, "{:<ancho$}    {}", e, v, ancho = ancho)?;
        }
        Ok(())
    }
}

impl Serialize for Registro {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.campos.len()))?;
        for (e, v) in &self.campos {
            map.serialize_entry(e, v)?;
        }
        map.end()
    }
}

/// Cursos planificados para un término.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminoPlan {
    pub termino: Termino,
    pub cursos: Vec<String>,
}

/// Plan agrupado por término, en el orden en que los términos aparecen en el
/// registro (no se reordena cronológicamente).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    terminos: Vec<TerminoPlan>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un curso al término indicado, creando el término al final si es nuevo.
    pub fn push(&mut self, termino: Termino, curso: impl Into<String>) {
        let curso = curso.into();
        match self.terminos.iter_mut().find(|t| t.termino == termino) {
            Some(t) => t.cursos.push(curso),
            None => self.terminos.push(TerminoPlan { termino, cursos: vec![curso] }),
        }
    }

    pub fn get(&self, termino: &Termino) -> Option<&[String]> {
        self.terminos.iter().find(|t| t.termino == *termino).map(|t| t.cursos.as_slice())
    }

    pub fn terminos(&self) -> &[TerminoPlan] {
        &self.terminos
    }

    /// Aplana el plan en el "pool": orden de términos y luego orden interno.
    pub fn pool(&self) -> Vec<&str> {
        self.terminos.iter().flat_map(|t| t.cursos.iter().map(String::as_str)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.terminos.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.terminos {
            writeln!(f, "{}: {}", t.termino, t.cursos.join(", "))?;
        }
        Ok(())
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.terminos.len()))?;
        for t in &self.terminos {
            map.serialize_entry(&t.termino.to_string(), &t.cursos)?;
        }
        map.end()
    }
}
