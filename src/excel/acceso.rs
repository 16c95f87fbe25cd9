//! Acceso al workbook maestro.
//!
//! El archivo suele vivir en una carpeta sincronizada por OneDrive, que lo
//! bloquea mientras alguien lo tiene abierto. En ese caso se lee una copia
//! local en un directorio temporal, que se elimina al soltar `ArchivoFuente`.

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{MsmlError, Result};

/// Ruta efectivamente legible del workbook.
#[derive(Debug)]
pub struct ArchivoFuente {
    ruta: PathBuf,
    _copia: Option<TempDir>,
}

impl ArchivoFuente {
    pub fn ruta(&self) -> &Path {
        &self.ruta
    }

    pub fn es_copia(&self) -> bool {
        self._copia.is_some()
    }
}

/// Error de apertura causado por otro proceso que retiene el archivo.
///
/// En Windows un workbook abierto en Excel u OneDrive falla con
/// `ERROR_SHARING_VIOLATION` (32) o `ERROR_LOCK_VIOLATION` (33), que std no
/// clasifica como `PermissionDenied`.
fn es_bloqueo(e: &io::Error) -> bool {
    if e.kind() == ErrorKind::PermissionDenied {
        return true;
    }
    cfg!(windows) && matches!(e.raw_os_error(), Some(32 | 33))
}

/// Abre el workbook para lectura; si está bloqueado o el acceso es denegado,
/// crea una copia local.
pub fn abrir_fuente(path: &Path) -> Result<ArchivoFuente> {
    match File::open(path) {
        Ok(_) => {
            tracing::info!(ruta = %path.display(), "archivo accesible para lectura");
            Ok(ArchivoFuente { ruta: path.to_path_buf(), _copia: None })
        }
        Err(e) if es_bloqueo(&e) => {
            tracing::warn!(ruta = %path.display(), error = %e, "archivo no accesible, se asume bloqueo de OneDrive");
            let copia = crear_copia_local(path)?;
            tracing::info!(copia = %copia.ruta().display(), "copia local creada");
            Ok(copia)
        }
        Err(e) => Err(e.into()),
    }
}

/// Copia el archivo a un directorio temporal conservando su nombre (la
/// extensión decide el lector de calamine).
pub fn crear_copia_local(path: &Path) -> Result<ArchivoFuente> {
    let dir = tempfile::tempdir()?;
    let nombre = path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "temp.xlsx".into());
    let destino = dir.path().join(nombre);
    fs::copy(path, &destino).map_err(|source| MsmlError::CopiaLocal { ruta: path.to_path_buf(), source })?;
    Ok(ArchivoFuente { ruta: destino, _copia: Some(dir) })
}
