use msmlplan::algorithm::{get_requirements, reconciliar, Categoria, Plantilla, Requisito, Valor, UNPLANNED};
use msmlplan::models::{ClassList, Termino};
use pretty_assertions::assert_eq;

fn plan(terminos: &[(&str, Vec<&str>)]) -> ClassList {
    let mut plan = ClassList::new();
    for (codigo, cursos) in terminos {
        let termino = Termino::from_codigo(codigo).unwrap();
        for c in cursos.iter() {
            plan.push(termino, *c);
        }
    }
    plan
}

fn pares(r: &msmlplan::algorithm::Reconciliacion) -> Vec<(String, String)> {
    r.entradas().iter().map(|e| (e.etiqueta.clone(), e.valor.to_string())).collect()
}

fn etiquetas(p: &Plantilla) -> Vec<String> {
    p.requisitos().map(Requisito::etiqueta).collect()
}

#[test]
fn plantilla_msml_con_ambos_topicos() {
    let p = Plantilla::msml(true, true);
    assert_eq!(
        etiquetas(&p),
        vec!["CSC5610", "CSC5201", "CSC6621", "CSC6605", "PHL6001", "CSC7901", "MTH5810", "CSC5xxx 1"]
    );
}

#[test]
fn mth5810_se_reporta_antes_que_los_electivos() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC5301", "MTH5810"])]), true, true);
    assert_eq!(
        r.etiquetas(),
        vec!["MTH5810", "CSC5xxx 1", "CSC5610", "CSC5201", "CSC6621", "CSC6605", "PHL6001", "CSC7901"]
    );
    assert_eq!(r.get("MTH5810"), Some(&Valor::Curso("MTH5810".to_string())));
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC5301".to_string())));
    assert!(r.extras().is_empty());
}

#[test]
fn plantilla_msml_sin_topicos_usa_electivos() {
    let p = Plantilla::msml(false, false);
    assert_eq!(
        etiquetas(&p),
        vec!["CSC5201", "CSC6621", "CSC6605", "PHL6001", "CSC7901", "CSC5xxx 1", "CSC5xxx 2", "CSC5xxx 3"]
    );
}

#[test]
fn sustitucion_condicional_de_csc5610() {
    let con = etiquetas(&Plantilla::msml(true, true));
    assert!(con.contains(&"CSC5610".to_string()));
    assert!(!con.contains(&"CSC5xxx 2".to_string()));

    let sin = etiquetas(&Plantilla::msml(false, true));
    assert!(!sin.contains(&"CSC5610".to_string()));
    assert_eq!(sin.len(), con.len());
    assert_eq!(sin.last().unwrap(), "CSC5xxx 2");
}

#[test]
fn electivos_siempre_despues_de_fijos() {
    let p = Plantilla::builder()
        .electivo_al_final(Categoria::csc_avanzado())
        .fijo("CSC6621")
        .electivo_al_final(Categoria::csc_avanzado())
        .fijo("MTH5810")
        .build();
    assert_eq!(etiquetas(&p), vec!["CSC6621", "MTH5810", "CSC5xxx 1", "CSC5xxx 2"]);
}

#[test]
fn plan_completo_con_extras() {
    let p = plan(&[
        ("1S24", vec!["CSC5610", "CSC5201"]),
        ("2S24", vec!["CSC6621", "CSC6605", "CSC5301"]),
        ("3S24", vec!["PHL6001", "MTH5810"]),
        ("1S25", vec!["CSC7901", "CSC6402", "CSC6711"]),
    ]);
    let r = get_requirements(&p, true, true);

    let esperado: Vec<(String, String)> = [
        ("CSC5201", "CSC5201"),
        ("CSC5610", "CSC5610"),
        ("CSC6621", "CSC6621"),
        ("CSC6605", "CSC6605"),
        ("PHL6001", "PHL6001"),
        ("CSC7901", "CSC7901"),
        ("MTH5810", "MTH5810"),
        ("CSC5xxx 1", "CSC5301"),
        ("Extra course 1", "CSC6402"),
        ("Extra course 2", "CSC6711"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    assert_eq!(pares(&r), esperado);
    assert!(r.no_planificados().is_empty());
}

#[test]
fn electivos_voraces_primer_ajuste() {
    let plantilla = Plantilla::builder()
        .electivo_al_final(Categoria::csc_avanzado())
        .electivo_al_final(Categoria::csc_avanzado())
        .build();
    let r = reconciliar(&plan(&[("1S24", vec!["CSC5301", "CSC6402"])]), &plantilla);
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC5301".to_string())));
    assert_eq!(r.get("CSC5xxx 2"), Some(&Valor::Curso("CSC6402".to_string())));
    assert_eq!(r.len(), 2);
}

#[test]
fn alternativa_satisface_csc5201() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC6711"])]), false, false);
    assert_eq!(r.get("CSC5201"), Some(&Valor::Curso("CSC6711".to_string())));
    assert!(r.extras().is_empty());
    // CSC6711 ya fue consumido: no llega a los electivos
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::NoPlanificado));
}

#[test]
fn primario_tiene_prioridad_sobre_alternativas() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC6712", "CSC6711"]), ("2S24", vec!["CSC5201"])]), false, false);
    assert_eq!(r.get("CSC5201"), Some(&Valor::Curso("CSC5201".to_string())));
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC6712".to_string())));
    assert_eq!(r.get("CSC5xxx 2"), Some(&Valor::Curso("CSC6711".to_string())));
}

#[test]
fn alternativas_en_orden_de_prioridad() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC6712", "CSC6711"])]), true, true);
    assert_eq!(r.get("CSC5201"), Some(&Valor::Curso("CSC6711".to_string())));
}

#[test]
fn fijo_no_es_robado_por_electivo() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC5610", "CSC5301"])]), true, true);
    assert_eq!(r.get("CSC5610"), Some(&Valor::Curso("CSC5610".to_string())));
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC5301".to_string())));
}

#[test]
fn cursos_de_pregrado_y_mal_formados_nunca_califican() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC4601", "CSC2011", "csc5301", "CSC53", "MTH5810"])]), true, false);
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::NoPlanificado));
    assert_eq!(r.get("CSC5xxx 2"), Some(&Valor::NoPlanificado));
    assert_eq!(r.extras(), vec!["CSC4601", "CSC2011", "csc5301", "CSC53", "MTH5810"]);
}

#[test]
fn placeholder_planificado_cuenta_como_electivo() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC5xxx"])]), true, true);
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC5xxx".to_string())));
}

#[test]
fn cumplidos_primero_luego_unplanned_en_orden_de_plantilla() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC7901"])]), false, false);
    assert_eq!(
        r.etiquetas(),
        vec!["CSC7901", "CSC5201", "CSC6621", "CSC6605", "PHL6001", "CSC5xxx 1", "CSC5xxx 2", "CSC5xxx 3"]
    );
    assert_eq!(r.get("PHL6001").unwrap().as_str(), UNPLANNED);
}

#[test]
fn pool_vacio_contra_cinco_requisitos() {
    let plantilla = Plantilla::builder()
        .fijo("CSC6621")
        .fijo("CSC6605")
        .fijo("PHL6001")
        .fijo("CSC7901")
        .electivo_al_final(Categoria::csc_avanzado())
        .build();
    let r = reconciliar(&ClassList::new(), &plantilla);
    assert_eq!(r.len(), 5);
    assert_eq!(r.no_planificados().len(), 5);
    assert!(r.extras().is_empty());
}

#[test]
fn plantilla_vacia_deja_todo_como_extra() {
    let p = plan(&[("2S24", vec!["CSC6621", "MTH2340"]), ("1S24", vec!["CSC5201"])]);
    let r = reconciliar(&p, &Plantilla::builder().build());
    assert_eq!(r.etiquetas(), vec!["Extra course 1", "Extra course 2", "Extra course 3"]);
    assert_eq!(r.extras(), vec!["CSC6621", "MTH2340", "CSC5201"]);
}

#[test]
fn cursos_repetidos_se_consumen_de_a_uno() {
    let r = get_requirements(&plan(&[("1S24", vec!["CSC6621"]), ("2S24", vec!["CSC6621"])]), true, true);
    assert_eq!(r.get("CSC6621"), Some(&Valor::Curso("CSC6621".to_string())));
    // el segundo CSC6621 es CSC6xxx: cubre el electivo
    assert_eq!(r.get("CSC5xxx 1"), Some(&Valor::Curso("CSC6621".to_string())));
    assert!(r.extras().is_empty());
}
