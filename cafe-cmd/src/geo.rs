//! Boundary file checks.
//!
//! The map join degrades silently on a name mismatch, so this command makes
//! the invariant observable: every reference-table name should appear among
//! the boundary features, or that state renders uncolored.

use cafe_meteo::estado::Estado;
use log::info;

pub async fn run_geo_check() -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let geo = cafe_geo::fetch_geo(&client).await?;
    info!("Fetched {} boundary features", geo.len());

    let feature_names = geo.feature_names();
    let estados = Estado::get_estado_vector();

    let mut missing = 0usize;
    for estado in &estados {
        if feature_names.iter().any(|n| n == &estado.name) {
            println!("ok       {}", estado.name);
        } else {
            println!("MISSING  {}", estado.name);
            missing += 1;
        }
    }
    for name in feature_names.iter().filter(|n| !n.is_empty()) {
        if !estados.iter().any(|e| &e.name == name) {
            println!("extra    {}", name);
        }
    }
    if missing > 0 {
        println!("{} estado(s) would render without color on the map", missing);
    }
    Ok(())
}
