use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::catalog::{ExperienceLevel, Position};

/// Row in the `salaries` table, one per unique email. `id` and `created_at`
/// are fixed at first insert; everything else follows the latest submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalaryRecord {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub salario_bruto: Decimal,
    pub pais: String,
    pub ciudad: String,
    pub experiencia: String,
    pub empresa: String,
    pub posicion: String,
    pub consent_accepted: bool,
    pub consent_ts: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully normalized submission, produced by the validation chain. Carries no
/// identifier or instants; those are generated at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSalaryRecord {
    pub nombre: String,
    pub email: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub salario_bruto: Decimal,
    pub pais: String,
    pub ciudad: String,
    pub experiencia: ExperienceLevel,
    pub empresa: String,
    pub posicion: Position,
    pub consent_accepted: bool,
}
