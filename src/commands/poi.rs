//! `cutline poi` and `cutline find` - points of interest in the cut domain.

use anyhow::Result;

use cutline::cli::MediaArgs;
use cutline::{Config, Poi, PoiKind, PointOfInterest};

use super::{load_engine, ms};

#[cfg(not(tarpaulin_include))]
pub fn handle_list(args: &MediaArgs, kind: PoiKind, json: bool) -> Result<()> {
    let config = Config::load()?;
    let engine = load_engine(args, &config, true)?;
    let points = engine.media_points_of_interest(kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    if points.is_empty() {
        println!("No {} in the visible range.", kind);
        return Ok(());
    }
    for poi in &points {
        println!("{}", poi_line(poi));
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_find(args: &MediaArgs, kind: PoiKind, time: f64) -> Result<()> {
    let config = Config::load()?;
    let engine = load_engine(args, &config, true)?;

    match engine.find_point_of_interest(kind, time) {
        Some(poi) => println!("{}", poi_line(&poi)),
        None => println!("No active {} at {}.", kind, ms(time)),
    }
    Ok(())
}

/// `<marker>  <label>` with the marker right-aligned.
pub fn poi_line(poi: &Poi) -> String {
    format!(
        "{:>10}  {}",
        ms(poi.marker()),
        poi.label().unwrap_or("(unnamed)")
    )
}
