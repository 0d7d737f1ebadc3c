use chrono::NaiveDate;

use crate::catalog::{self, ExperienceLevel, Position};
use crate::dto::submission_dto::SubmitSalaryRequest;
use crate::error::Error;
use crate::models::salary_record::NewSalaryRecord;
use crate::utils::email::is_valid_email;
use crate::utils::salary::parse_salary;

pub const MSG_NOMBRE: &str = "Por favor, completa el campo del nombre";
pub const MSG_EMAIL_EMPTY: &str = "Por favor, completa el campo del email";
pub const MSG_EMAIL_INVALID: &str = "Por favor, ingresa un email válido";
pub const MSG_FECHA_NACIMIENTO: &str = "Por favor, ingresa una fecha de nacimiento válida";
pub const MSG_SALARIO: &str = "Por favor, ingresa un salario bruto válido (número positivo)";
pub const MSG_PAIS: &str = "Por favor, selecciona un país";
pub const MSG_CIUDAD: &str = "Por favor, selecciona una ciudad";
pub const MSG_EXPERIENCIA: &str = "Por favor, selecciona una experiencia válida";
pub const MSG_EMPRESA: &str = "Por favor, completa el campo empresa";
pub const MSG_POSICION: &str = "Por favor, selecciona una posición válida";
pub const MSG_CONSENT: &str = "Por favor, acepta la política de privacidad";

/// Run the ordered validation chain and produce the normalized record.
///
/// The chain short-circuits: only the first failing check's message is ever
/// surfaced, so the order below is part of the contract. All checks are pure
/// predicates over the normalized inputs.
pub fn validate_submission(req: &SubmitSalaryRequest) -> Result<NewSalaryRecord, Error> {
    validate_submission_at(req, chrono::Utc::now().date_naive())
}

/// Same chain with an explicit "today" so the birth-date boundary is
/// testable.
pub fn validate_submission_at(
    req: &SubmitSalaryRequest,
    today: NaiveDate,
) -> Result<NewSalaryRecord, Error> {
    let nombre = req.nombre.as_deref().unwrap_or("").trim().to_string();
    let email = req
        .email
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let empresa = req.empresa.as_deref().unwrap_or("").trim().to_string();
    let salario = parse_salary(req.salario_bruto.as_deref());

    // 1. nombre
    if nombre.is_empty() {
        return Err(Error::BadRequest(MSG_NOMBRE.to_string()));
    }
    // 2-3. email
    if email.is_empty() {
        return Err(Error::BadRequest(MSG_EMAIL_EMPTY.to_string()));
    }
    if !is_valid_email(&email) {
        return Err(Error::BadRequest(MSG_EMAIL_INVALID.to_string()));
    }
    // 4. birth date, when given, must not lie in the future
    if let Some(fecha) = req.fecha_nacimiento {
        if fecha > today {
            return Err(Error::BadRequest(MSG_FECHA_NACIMIENTO.to_string()));
        }
    }
    // 5. salary: absent and invalid both block here
    let salario_bruto = salario
        .amount()
        .ok_or_else(|| Error::BadRequest(MSG_SALARIO.to_string()))?;
    // 6. country must be a catalog member
    let pais = req.pais.as_deref().unwrap_or("");
    if pais.is_empty() || !catalog::is_known_country(pais) {
        return Err(Error::BadRequest(MSG_PAIS.to_string()));
    }
    // 7. city must belong to the selected country's list; a stale selection
    //    from a previously chosen country fails here
    let ciudad = req.ciudad.as_deref().unwrap_or("");
    if ciudad.is_empty() || !catalog::cities_for(pais).contains(&ciudad) {
        return Err(Error::BadRequest(MSG_CIUDAD.to_string()));
    }
    // 8. experience
    let experiencia = req
        .experiencia
        .as_deref()
        .and_then(ExperienceLevel::from_label)
        .ok_or_else(|| Error::BadRequest(MSG_EXPERIENCIA.to_string()))?;
    // 9. empresa
    if empresa.is_empty() {
        return Err(Error::BadRequest(MSG_EMPRESA.to_string()));
    }
    // 10. position
    let posicion = req
        .posicion
        .as_deref()
        .and_then(Position::from_label)
        .ok_or_else(|| Error::BadRequest(MSG_POSICION.to_string()))?;
    // 11. consent
    if !req.consent_accepted {
        return Err(Error::BadRequest(MSG_CONSENT.to_string()));
    }

    Ok(NewSalaryRecord {
        nombre,
        email,
        fecha_nacimiento: req.fecha_nacimiento,
        salario_bruto,
        pais: pais.to_string(),
        ciudad: ciudad.to_string(),
        experiencia,
        empresa,
        posicion,
        consent_accepted: true,
    })
}
