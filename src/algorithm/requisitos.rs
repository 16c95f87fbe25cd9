//! Conciliación de requisitos del MSML contra el plan de un estudiante.
//!
//! La asignación es voraz (primer ajuste, sin backtracking): el resultado
//! depende del orden del plan y no busca una asignación óptima. Un plan puede
//! quedar reportado con un requisito "unplanned" aunque otra asignación lo
//! hubiera cubierto; es el comportamiento esperado del reporte.

use std::fmt;
use std::iter;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::{tiene_forma_de_codigo, ClassList};

/// Valor literal para requisitos sin curso planificado.
pub const UNPLANNED: &str = "unplanned";

/// Regla de categoría para electivos: prefijo de asignatura reconocido y
/// primer dígito del número mayor o igual a `digito_minimo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categoria {
    pub etiqueta: String,
    pub prefijos: Vec<String>,
    pub digito_minimo: u8,
}

impl Categoria {
    /// Electivo avanzado de Computer Science (`CSC5xxx`).
    pub fn csc_avanzado() -> Self {
        Categoria {
            etiqueta: "CSC5xxx".to_string(),
            prefijos: vec!["CSC".to_string()],
            digito_minimo: 5,
        }
    }

    /// Verdadero si `codigo` satisface la categoría. Códigos mal formados nunca califican.
    pub fn admite(&self, codigo: &str) -> bool {
        if !tiene_forma_de_codigo(codigo) {
            return false;
        }
        let (prefijo, numero) = codigo.split_at(3);
        let Some(digito) = numero.chars().next().and_then(|c| c.to_digit(10)) else {
            return false;
        };
        self.prefijos.iter().any(|p| p == prefijo) && digito >= u32::from(self.digito_minimo)
    }
}

/// Una línea de la plantilla de requisitos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requisito {
    /// Sólo el código exacto lo satisface.
    Fijo(String),
    /// El primario o cualquiera de las alternativas, en ese orden de prioridad.
    Alternativas { primario: String, alternativas: Vec<String> },
    /// Cualquier curso de la categoría; `ordinal` sólo distingue la etiqueta.
    Electivo { categoria: Categoria, ordinal: usize },
}

impl Requisito {
    pub fn etiqueta(&self) -> String {
        match self {
            Requisito::Fijo(codigo) => codigo.clone(),
            Requisito::Alternativas { primario, .. } => primario.clone(),
            Requisito::Electivo { categoria, ordinal } => format!("{} {}", categoria.etiqueta, ordinal),
        }
    }
}

/// Plantilla de requisitos. Los electivos siempre quedan después de todos los
/// requisitos fijos: la asignación es voraz y un electivo no debe tomar un
/// curso que satisface un requisito fijo posterior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plantilla {
    fijos: Vec<Requisito>,
    electivos: Vec<Requisito>,
}

impl Plantilla {
    pub fn builder() -> PlantillaBuilder {
        PlantillaBuilder::default()
    }

    /// Plantilla del MSML según los flags de la decisión de admisión.
    ///
    /// Si el tópico es requerido se agrega el curso fijo (`CSC5610` al inicio,
    /// `MTH5810` al final de los fijos); si no, un electivo `CSC5xxx` ocupa su lugar.
    pub fn msml(need_csc5610: bool, need_mth5810: bool) -> Plantilla {
        let mut b = Plantilla::builder()
            .alternativas("CSC5201", ["CSC6711", "CSC6712"])
            .fijo("CSC6621")
            .fijo("CSC6605")
            .fijo("PHL6001")
            .fijo("CSC7901")
            .electivo_al_final(Categoria::csc_avanzado());
        b = if need_csc5610 {
            b.fijo_al_inicio("CSC5610")
        } else {
            b.electivo_al_final(Categoria::csc_avanzado())
        };
        b = if need_mth5810 {
            b.fijo("MTH5810")
        } else {
            b.electivo_al_final(Categoria::csc_avanzado())
        };
        b.build()
    }

    /// Requisitos en orden de procesamiento: fijos y luego electivos.
    pub fn requisitos(&self) -> impl Iterator<Item = &Requisito> {
        self.fijos.iter().chain(self.electivos.iter())
    }

    pub fn len(&self) -> usize {
        self.fijos.len() + self.electivos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlantillaBuilder {
    fijos: Vec<Requisito>,
    electivos: Vec<Requisito>,
}

impl PlantillaBuilder {
    pub fn fijo(mut self, codigo: impl Into<String>) -> Self {
        self.fijos.push(Requisito::Fijo(codigo.into()));
        self
    }

    pub fn fijo_al_inicio(mut self, codigo: impl Into<String>) -> Self {
        self.fijos.insert(0, Requisito::Fijo(codigo.into()));
        self
    }

    pub fn alternativas<I, S>(mut self, primario: impl Into<String>, alternativas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fijos.push(Requisito::Alternativas {
            primario: primario.into(),
            alternativas: alternativas.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Agrega un electivo al final de la plantilla. El ordinal es el siguiente
    /// libre entre los electivos de la misma categoría.
    pub fn electivo_al_final(mut self, categoria: Categoria) -> Self {
        let ordinal = 1 + self
            .electivos
            .iter()
            .filter(|r| matches!(r, Requisito::Electivo { categoria: c, .. } if c.etiqueta == categoria.etiqueta))
            .count();
        self.electivos.push(Requisito::Electivo { categoria, ordinal });
        self
    }

    pub fn build(self) -> Plantilla {
        Plantilla { fijos: self.fijos, electivos: self.electivos }
    }
}

/// Valor de una entrada de la conciliación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Valor {
    Curso(String),
    NoPlanificado,
}

impl Valor {
    pub fn as_str(&self) -> &str {
        match self {
            Valor::Curso(c) => c,
            Valor::NoPlanificado => UNPLANNED,
        }
    }
}

impl fmt::Display for Valor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrada {
    pub etiqueta: String,
    pub valor: Valor,
}

/// Resultado ordenado: requisitos cumplidos (en orden de asignación),
/// requisitos "unplanned" (en orden de plantilla) y cursos extra (en orden del pool).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliacion {
    entradas: Vec<Entrada>,
}

impl Reconciliacion {
    pub fn get(&self, etiqueta: &str) -> Option<&Valor> {
        self.entradas.iter().find(|e| e.etiqueta == etiqueta).map(|e| &e.valor)
    }

    pub fn entradas(&self) -> &[Entrada] {
        &self.entradas
    }

    pub fn etiquetas(&self) -> Vec<&str> {
        self.entradas.iter().map(|e| e.etiqueta.as_str()).collect()
    }

    /// Cursos extra, en orden.
    pub fn extras(&self) -> Vec<&str> {
        self.entradas
            .iter()
            .filter(|e| e.etiqueta.starts_with(PREFIJO_EXTRA))
            .map(|e| e.valor.as_str())
            .collect()
    }

    /// Etiquetas de los requisitos sin curso planificado.
    pub fn no_planificados(&self) -> Vec<&str> {
        self.entradas
            .iter()
            .filter(|e| e.valor == Valor::NoPlanificado)
            .map(|e| e.etiqueta.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entradas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entradas.is_empty()
    }
}

impl fmt::Display for Reconciliacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entradas {
            writeln!(f, "{}: {}", e.etiqueta, e.valor)?;
        }
        Ok(())
    }
}

impl Serialize for Reconciliacion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entradas.len()))?;
        for e in &self.entradas {
            map.serialize_entry(&e.etiqueta, e.valor.as_str())?;
        }
        map.end()
    }
}

const PREFIJO_EXTRA: &str = "Extra course ";

/// Primer índice del pool aún libre que cumple `pred`.
fn primer_libre(pool: &[&str], usado: &[bool], pred: impl Fn(&str) -> bool) -> Option<usize> {
    pool.iter().enumerate().position(|(j, c)| !usado[j] && pred(*c))
}

/// Concilia el plan contra una plantilla arbitraria.
///
/// 1. Familias de alternativas primero, sin importar su posición.
/// 2. Resto de requisitos en orden: electivo → primer curso de la categoría,
///    fijo → código exacto.
/// 3. Requisitos sin asignar → `unplanned`; cursos sobrantes → `Extra course N`.
pub fn reconciliar(plan: &ClassList, plantilla: &Plantilla) -> Reconciliacion {
    let pool = plan.pool();
    let requisitos: Vec<&Requisito> = plantilla.requisitos().collect();
    let mut usado = vec![false; pool.len()];
    let mut asignado: Vec<Option<usize>> = vec![None; requisitos.len()];
    let mut entradas: Vec<Entrada> = Vec::with_capacity(requisitos.len() + pool.len());

    for (i, req) in requisitos.iter().enumerate() {
        let Requisito::Alternativas { primario, alternativas } = req else { continue };
        for opcion in iter::once(primario).chain(alternativas.iter()) {
            if let Some(j) = primer_libre(&pool, &usado, |c| c == opcion.as_str()) {
                usado[j] = true;
                asignado[i] = Some(j);
                entradas.push(Entrada { etiqueta: req.etiqueta(), valor: Valor::Curso(pool[j].to_string()) });
                break;
            }
        }
    }

    for (i, req) in requisitos.iter().enumerate() {
        if asignado[i].is_some() {
            continue;
        }
        let encontrado = match req {
            Requisito::Electivo { categoria, .. } => primer_libre(&pool, &usado, |c| categoria.admite(c)),
            Requisito::Fijo(codigo) => primer_libre(&pool, &usado, |c| c == codigo.as_str()),
            // ya se buscaron todas sus opciones
            Requisito::Alternativas { .. } => None,
        };
        if let Some(j) = encontrado {
            usado[j] = true;
            asignado[i] = Some(j);
            entradas.push(Entrada { etiqueta: req.etiqueta(), valor: Valor::Curso(pool[j].to_string()) });
        }
    }

    for (i, req) in requisitos.iter().enumerate() {
        if asignado[i].is_none() {
            entradas.push(Entrada { etiqueta: req.etiqueta(), valor: Valor::NoPlanificado });
        }
    }

    let sobrantes = pool.iter().enumerate().filter(|(j, _)| !usado[*j]).map(|(_, c)| *c);
    for (n, curso) in sobrantes.enumerate() {
        entradas.push(Entrada { etiqueta: format!("{}{}", PREFIJO_EXTRA, n + 1), valor: Valor::Curso(curso.to_string()) });
    }

    tracing::debug!(
        requisitos = requisitos.len(),
        pool = pool.len(),
        entradas = entradas.len(),
        "conciliación completada"
    );
    Reconciliacion { entradas }
}

/// Dado el plan por término y los flags de la decisión de admisión, entrega
/// cómo y si se cumplen los requisitos del grado.
pub fn get_requirements(plan: &ClassList, need_csc5610: bool, need_mth5810: bool) -> Reconciliacion {
    reconciliar(plan, &Plantilla::msml(need_csc5610, need_mth5810))
}
