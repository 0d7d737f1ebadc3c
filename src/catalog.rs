//! Static lookup tables the form depends on: countries, the city lists keyed
//! by country, experience levels and positions. These are configuration, not
//! data derived at runtime.

use serde::{Deserialize, Serialize};

/// Catch-all entry used both as a country and as the fallback city.
pub const CATCH_ALL: &str = "Otro";

pub const COUNTRIES: &[&str] = &[
    "España",
    "México",
    "Argentina",
    "Colombia",
    "Chile",
    "Perú",
    "Estados Unidos",
    "Portugal",
    "Reino Unido",
    "Alemania",
    "Francia",
    "Otro",
];

const CITIES_BY_COUNTRY: &[(&str, &[&str])] = &[
    ("España", &["Madrid", "Barcelona", "Valencia", "Sevilla", "Otro"]),
    ("México", &["Ciudad de México", "Guadalajara", "Monterrey", "Otro"]),
    ("Argentina", &["Buenos Aires", "Córdoba", "Rosario", "Otro"]),
    ("Colombia", &["Bogotá", "Medellín", "Cali", "Otro"]),
    ("Chile", &["Santiago", "Valparaíso", "Concepción", "Otro"]),
    ("Perú", &["Lima", "Arequipa", "Trujillo", "Otro"]),
    (
        "Estados Unidos",
        &["New York", "San Francisco", "Los Angeles", "San Diego", "Otro"],
    ),
    ("Portugal", &["Lisboa", "Oporto", "Otro"]),
    ("Reino Unido", &["Londres", "Manchester", "Edimburgo", "Otro"]),
    ("Alemania", &["Berlín", "Múnich", "Hamburgo", "Otro"]),
    ("Francia", &["París", "Lyon", "Marsella", "Otro"]),
    ("Otro", &["Otro"]),
];

pub fn is_known_country(country: &str) -> bool {
    COUNTRIES.contains(&country)
}

/// City list for a country. Countries without a specific list (including the
/// catch-all itself) get the single-entry catch-all list.
pub fn cities_for(country: &str) -> &'static [&'static str] {
    CITIES_BY_COUNTRY
        .iter()
        .find(|(c, _)| *c == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[CATCH_ALL])
}

/// Ordered experience scale: Intern < Junior < Mid < Senior < Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Intern,
    Junior,
    Mid,
    Senior,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: &'static [ExperienceLevel] = &[
        ExperienceLevel::Intern,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Expert,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Intern" => Some(ExperienceLevel::Intern),
            "Junior" => Some(ExperienceLevel::Junior),
            "Mid" => Some(ExperienceLevel::Mid),
            "Senior" => Some(ExperienceLevel::Senior),
            "Expert" => Some(ExperienceLevel::Expert),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ExperienceLevel::Intern => "Intern",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    DataScientist,
    DataEngineer,
    MachineLearningEngineer,
    DataAnalyst,
    BusinessIntelligenceAnalyst,
    AiEngineer,
}

impl Position {
    pub const ALL: &'static [Position] = &[
        Position::DataScientist,
        Position::DataEngineer,
        Position::MachineLearningEngineer,
        Position::DataAnalyst,
        Position::BusinessIntelligenceAnalyst,
        Position::AiEngineer,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Data Scientist" => Some(Position::DataScientist),
            "Data Engineer" => Some(Position::DataEngineer),
            "Machine Learning Engineer" => Some(Position::MachineLearningEngineer),
            "Data Analyst" => Some(Position::DataAnalyst),
            "Business Intelligence Analyst" => Some(Position::BusinessIntelligenceAnalyst),
            "AI Engineer" => Some(Position::AiEngineer),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Position::DataScientist => "Data Scientist",
            Position::DataEngineer => "Data Engineer",
            Position::MachineLearningEngineer => "Machine Learning Engineer",
            Position::DataAnalyst => "Data Analyst",
            Position::BusinessIntelligenceAnalyst => "Business Intelligence Analyst",
            Position::AiEngineer => "AI Engineer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_lookup_with_specific_list() {
        let cities = cities_for("España");
        assert!(cities.contains(&"Madrid"));
        assert_eq!(cities.last(), Some(&"Otro"));
    }

    #[test]
    fn cities_lookup_falls_back_to_catch_all() {
        assert_eq!(cities_for("Atlantis"), &["Otro"]);
        assert_eq!(cities_for("Otro"), &["Otro"]);
    }

    #[test]
    fn every_country_has_a_city_list() {
        for country in COUNTRIES {
            assert!(!cities_for(country).is_empty());
        }
    }

    #[test]
    fn experience_levels_are_ordered() {
        assert!(ExperienceLevel::Intern < ExperienceLevel::Junior);
        assert!(ExperienceLevel::Mid < ExperienceLevel::Expert);
        let labels: Vec<_> = ExperienceLevel::ALL.iter().map(|e| e.as_label()).collect();
        assert_eq!(labels, vec!["Intern", "Junior", "Mid", "Senior", "Expert"]);
    }

    #[test]
    fn experience_label_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_label(level.as_label()), Some(*level));
        }
        assert_eq!(ExperienceLevel::from_label("Principal"), None);
    }

    #[test]
    fn position_label_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_label(position.as_label()), Some(*position));
        }
        assert_eq!(Position::from_label("Backend Developer"), None);
    }
}
