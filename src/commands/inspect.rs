//! `cutline inspect` - cut state and durations.

use anyhow::Result;
use serde_json::json;

use cutline::cli::MediaArgs;
use cutline::timeline::TimeDomainEngine;
use cutline::{Config, PoiKind};

use super::{load_engine, ms};

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &MediaArgs, json: bool) -> Result<()> {
    let config = Config::load()?;
    let engine = load_engine(args, &config, true)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary_json(&engine))?);
    } else {
        for line in summary_lines(&engine) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Human-readable summary, one entry per line.
pub fn summary_lines(engine: &TimeDomainEngine) -> Vec<String> {
    let (start, end) = engine.cut_state().edges();
    let status = if engine.cuts_activated() {
        "active"
    } else {
        "inactive"
    };
    let cut = if !engine.cuts_activated() && start == 0.0 && end.is_none() {
        "none".to_string()
    } else {
        match end {
            Some(end) => format!("{} → {} ({})", ms(start), ms(end), status),
            None => format!("{} → end ({})", ms(start), status),
        }
    };
    let real = engine
        .real_duration()
        .map(ms)
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        format!("Cut:            {}", cut),
        format!("Real duration:  {}", real),
        format!("Cut duration:   {}", ms(engine.cut_duration())),
        format!("Duration:       {}", ms(engine.duration())),
    ];

    for kind in PoiKind::ALL {
        let total = engine.media().map_or(0, |media| media.count(kind));
        let visible = engine.media_points_of_interest(kind).len();
        lines.push(format!(
            "{:<15} {} visible of {}",
            format!("{}:", kind),
            visible,
            total
        ));
    }

    lines
}

/// Machine-readable summary.
pub fn summary_json(engine: &TimeDomainEngine) -> serde_json::Value {
    let (start, end) = engine.cut_state().edges();
    let mut collections = serde_json::Map::new();
    for kind in PoiKind::ALL {
        collections.insert(
            kind.name().to_string(),
            json!({
                "total": engine.media().map_or(0, |media| media.count(kind)),
                "visible": engine.media_points_of_interest(kind).len(),
            }),
        );
    }

    json!({
        "cuts_activated": engine.cuts_activated(),
        "cut_start": start,
        "cut_end": end,
        "real_duration": engine.real_duration(),
        "cut_duration": engine.cut_duration(),
        "duration": engine.duration(),
        "collections": collections,
    })
}
