use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV with the reference coordinate for each of the 27 federative units.
///
/// The `name` column doubles as the join key against the GeoJSON boundary
/// file, so spelling and diacritics must match it exactly.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/estados.csv");

/// Number of Brazilian federative units (26 states plus the Distrito Federal).
pub const ESTADO_COUNT: usize = 27;

/// A Brazilian federative unit with its approximate reference coordinate.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Estado {
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Estado {
    /// Parse a CSV string of estado reference data.
    ///
    /// Expected CSV columns (with headers): `name,latitude,longitude`
    pub fn parse_estado_csv(csv_object: &str) -> Result<Vec<Estado>, std::io::Error> {
        let mut estado_list: Vec<Estado> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = String::from(record.get(0).expect("name parse fail"));
            let latitude = record
                .get(1)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let longitude = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            estado_list.push(Estado {
                name,
                latitude,
                longitude,
            });
        }
        Ok(estado_list)
    }

    /// All 27 federative units from the embedded fixture, in fixture order.
    pub fn get_estado_vector() -> Vec<Estado> {
        Estado::parse_estado_csv(CSV_OBJECT).expect("embedded estados.csv parse fail")
    }

    /// Look up one estado by its exact name.
    pub fn find(name: &str) -> Option<Estado> {
        Estado::get_estado_vector()
            .into_iter()
            .find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Estado, ESTADO_COUNT};

    #[test]
    fn test_embedded_fixture_has_all_estados() {
        let estados = Estado::get_estado_vector();
        assert_eq!(estados.len(), ESTADO_COUNT);
    }

    #[test]
    fn test_coordinates_parse() {
        let estados = Estado::get_estado_vector();
        let bahia = estados.iter().find(|e| e.name == "Bahia").unwrap();
        assert!((bahia.latitude - (-12.5797)).abs() < f64::EPSILON);
        assert!((bahia.longitude - (-41.7007)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_names_keep_diacritics() {
        let estados = Estado::get_estado_vector();
        assert!(estados.iter().any(|e| e.name == "São Paulo"));
        assert!(estados.iter().any(|e| e.name == "Amapá"));
        assert!(estados.iter().any(|e| e.name == "Rondônia"));
    }

    #[test]
    fn test_find_is_exact_match() {
        assert!(Estado::find("Ceará").is_some());
        // Missing diacritics must not match; the GeoJSON join is exact too.
        assert!(Estado::find("Ceara").is_none());
        assert!(Estado::find("ceará").is_none());
    }

    #[test]
    fn test_parse_estado_csv() {
        let csv_data = "\
name,latitude,longitude
Bahia,-12.5797,-41.7007
Roraima,2.8235,-60.6758
";
        let estados = Estado::parse_estado_csv(csv_data).unwrap();
        assert_eq!(estados.len(), 2);
        assert_eq!(estados[0].name, "Bahia");
        assert!((estados[1].latitude - 2.8235).abs() < f64::EPSILON);
    }
}
