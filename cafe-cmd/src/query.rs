//! Terminal queries against the Open-Meteo API.

use cafe_meteo::client::MeteoClient;
use cafe_meteo::error::MeteoError;
use cafe_meteo::estado::Estado;
use cafe_meteo::stats::{format_celsius, format_percent, ClimateSummary};
use cafe_meteo::suitability::Suitability;
use cafe_meteo::window::FetchWindow;
use chrono::Local;
use log::info;

fn fmt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "--".to_string(),
    }
}

/// Fetch and print the daily table and the six aggregates for one estado.
pub async fn run_estado(name: &str, days: i64) -> anyhow::Result<()> {
    let estado =
        Estado::find(name).ok_or_else(|| MeteoError::UnknownEstado(name.to_string()))?;
    let window = FetchWindow::trailing(Local::now().date_naive(), days);
    info!(
        "Querying {} from {} to {}",
        estado.name, window.start, window.end
    );

    let client = MeteoClient::new();
    let daily = client.fetch_estado(&estado, window).await?;

    println!(
        "Dados Climáticos de {} ({} a {})",
        estado.name, window.start, window.end
    );
    println!(
        "{:<12} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "Data", "T.Méd", "T.Máx", "T.Mín", "U.Méd", "U.Máx", "U.Mín"
    );
    for day in &daily {
        println!(
            "{:<12} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}",
            day.date.to_string(),
            fmt(day.temp_mean),
            fmt(day.temp_max),
            fmt(day.temp_min),
            fmt(day.humidity_mean),
            fmt(day.humidity_max),
            fmt(day.humidity_min),
        );
    }

    let summary = ClimateSummary::from_daily(&daily);
    println!();
    println!("Temperatura Média:  {}", format_celsius(summary.temp_mean));
    println!("Temperatura Máxima: {}", format_celsius(summary.temp_max));
    println!("Temperatura Mínima: {}", format_celsius(summary.temp_min));
    println!("Umidade Média:      {}", format_percent(summary.humidity_mean));
    println!("Umidade Máxima:     {}", format_percent(summary.humidity_max));
    println!("Umidade Mínima:     {}", format_percent(summary.humidity_min));
    Ok(())
}

/// The national survey: the same sequential fan-out the dashboard map
/// runs, printed one line per estado with its suitability band.
pub async fn run_survey(days: i64) -> anyhow::Result<()> {
    let estados = Estado::get_estado_vector();
    let window = FetchWindow::trailing(Local::now().date_naive(), days);
    info!(
        "Surveying {} estados from {} to {}",
        estados.len(),
        window.start,
        window.end
    );

    let client = MeteoClient::new();
    let summaries = client.fetch_all_summaries(&estados, window).await?;

    println!("{:<22} {:>10}  {}", "Estado", "T.Média", "Classificação");
    for summary in &summaries {
        match summary.temp_media {
            Some(t) => println!(
                "{:<22} {:>9.1}°  {}",
                summary.estado,
                t,
                Suitability::classify(t).label()
            ),
            None => println!("{:<22} {:>10}  sem dados", summary.estado, "--"),
        }
    }
    Ok(())
}
