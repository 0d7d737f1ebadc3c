use axum::{response::IntoResponse, Json};

use crate::catalog::{self, ExperienceLevel, Position};
use crate::dto::submission_dto::{CatalogsResponse, CityCatalog};

/// Static form catalogs: countries, their city lists, experience levels and
/// positions. The presentation layer renders its selects from this payload
/// and re-resolves the city list whenever the country changes.
pub async fn get_catalogs() -> impl IntoResponse {
    let ciudades_por_pais = catalog::COUNTRIES
        .iter()
        .map(|pais| CityCatalog {
            pais: pais.to_string(),
            ciudades: catalog::cities_for(pais)
                .iter()
                .map(|c| c.to_string())
                .collect(),
        })
        .collect();

    Json(CatalogsResponse {
        paises: catalog::COUNTRIES.iter().map(|c| c.to_string()).collect(),
        ciudades_por_pais,
        experiencias: ExperienceLevel::ALL
            .iter()
            .map(|e| e.as_label().to_string())
            .collect(),
        posiciones: Position::ALL
            .iter()
            .map(|p| p.as_label().to_string())
            .collect(),
    })
}
