use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::salary_record::{NewSalaryRecord, SalaryRecord};
use crate::utils::time;

/// Persists validated submissions, one row per unique email.
#[derive(Clone)]
pub struct SubmissionService {
    pool: PgPool,
}

impl SubmissionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomic upsert keyed by email. First submission inserts the row with a
    /// fresh id; later submissions overwrite every mutable field and refresh
    /// `updated_at`, leaving `id` and `created_at` untouched. There is no
    /// read-then-write here: concurrent saves of the same email are resolved
    /// by the unique constraint inside this single statement.
    pub async fn upsert(&self, record: NewSalaryRecord) -> Result<SalaryRecord> {
        let now = time::now();
        let saved = sqlx::query_as::<_, SalaryRecord>(
            r#"
            INSERT INTO salaries (
                id, nombre, email, fecha_nacimiento,
                salario_bruto, pais, ciudad,
                experiencia, empresa, posicion,
                consent_accepted, consent_ts,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (email) DO UPDATE SET
                nombre = EXCLUDED.nombre,
                fecha_nacimiento = EXCLUDED.fecha_nacimiento,
                salario_bruto = EXCLUDED.salario_bruto,
                pais = EXCLUDED.pais,
                ciudad = EXCLUDED.ciudad,
                experiencia = EXCLUDED.experiencia,
                empresa = EXCLUDED.empresa,
                posicion = EXCLUDED.posicion,
                consent_accepted = EXCLUDED.consent_accepted,
                consent_ts = EXCLUDED.consent_ts,
                updated_at = EXCLUDED.updated_at
            RETURNING id, nombre, email, fecha_nacimiento, salario_bruto,
                      pais, ciudad, experiencia, empresa, posicion,
                      consent_accepted, consent_ts, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.nombre)
        .bind(&record.email)
        .bind(record.fecha_nacimiento)
        .bind(record.salario_bruto)
        .bind(&record.pais)
        .bind(&record.ciudad)
        .bind(record.experiencia.as_label())
        .bind(&record.empresa)
        .bind(record.posicion.as_label())
        .bind(record.consent_accepted)
        .bind(now)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<SalaryRecord>> {
        let record = sqlx::query_as::<_, SalaryRecord>(
            r#"
            SELECT id, nombre, email, fecha_nacimiento, salario_bruto,
                   pais, ciudad, experiencia, empresa, posicion,
                   consent_accepted, consent_ts, created_at, updated_at
            FROM salaries
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }
}
