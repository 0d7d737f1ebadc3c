use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw form submission, exactly as the presentation layer collected it.
/// Strings arrive untrimmed; the salary is free text. `session_id` is the
/// presentation layer's own token for the advisory in-flight guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitSalaryRequest {
    pub session_id: Option<String>,
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub salario_bruto: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub experiencia: Option<String>,
    pub empresa: Option<String>,
    pub posicion: Option<String>,
    #[serde(default)]
    pub consent_accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSalaryResponse {
    pub id: uuid::Uuid,
    pub email: String,
    pub salario_bruto: Decimal,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityCatalog {
    pub pais: String,
    pub ciudades: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogsResponse {
    pub paises: Vec<String>,
    pub ciudades_por_pais: Vec<CityCatalog>,
    pub experiencias: Vec<String>,
    pub posiciones: Vec<String>,
}
