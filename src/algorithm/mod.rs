// Núcleo puro: agrupación por término y conciliación de requisitos.
// Ninguna función de este módulo hace IO.
pub mod class_list;
pub mod requisitos;

pub use class_list::{clasificar_etiqueta, get_class_list, CampoRegistro};
pub use requisitos::{
    get_requirements, reconciliar, Categoria, Entrada, Plantilla, PlantillaBuilder, Reconciliacion, Requisito,
    Valor, UNPLANNED,
};
