use calamine::Data;

/// Texto de una celda de la planilla maestra; `None` si la celda no aporta
/// valor (vacía, en blanco o con error de fórmula).
///
/// Los números de curso suelen llegar como float (`5610.0`), por eso los
/// flotantes enteros se escriben sin decimales.
pub fn texto_celda(celda: &Data) -> Option<String> {
    let texto = match celda {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(d) => d.to_string(),
    };
    Some(texto).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_entero_sin_decimales() {
        assert_eq!(texto_celda(&Data::Float(5610.0)).as_deref(), Some("5610"));
        assert_eq!(texto_celda(&Data::Float(2.5)).as_deref(), Some("2.5"));
    }

    #[test]
    fn celdas_sin_valor() {
        assert_eq!(texto_celda(&Data::Empty), None);
        assert_eq!(texto_celda(&Data::String("   ".to_string())), None);
        assert_eq!(texto_celda(&Data::Error(calamine::CellErrorType::NA)), None);
    }

    #[test]
    fn texto_recortado() {
        assert_eq!(texto_celda(&Data::String("  CSC5201 ".to_string())).as_deref(), Some("CSC5201"));
        assert_eq!(texto_celda(&Data::Bool(true)).as_deref(), Some("true"));
    }
}
