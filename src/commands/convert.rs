//! `cutline convert` - one value through the domain converter.

use anyhow::Result;

use cutline::cli::MediaArgs;
use cutline::timeline::TimeDomainEngine;
use cutline::Config;

use super::{load_engine, ms};

#[cfg(not(tarpaulin_include))]
pub fn handle(
    args: &MediaArgs,
    real: Option<f64>,
    cut: Option<f64>,
    percent: Option<f64>,
) -> Result<()> {
    let config = Config::load()?;
    let engine = load_engine(args, &config, true)?;

    let line = if let Some(real) = real {
        from_real(&engine, real)
    } else if let Some(cut) = cut {
        from_cut(&engine, cut)
    } else if let Some(percent) = percent {
        from_percent(&engine, percent)
    } else {
        anyhow::bail!("one of --real, --cut or --percent is required");
    };
    println!("{}", line);
    Ok(())
}

pub fn from_real(engine: &TimeDomainEngine, real: f64) -> String {
    format!(
        "real {} → cut {}, display {}, {:.2}%",
        ms(real),
        ms(engine.cut_time(real)),
        ms(engine.time(real)),
        engine.percent(real)
    )
}

pub fn from_cut(engine: &TimeDomainEngine, cut: f64) -> String {
    format!("cut {} → real {}", ms(cut), ms(engine.real_time(cut)))
}

pub fn from_percent(engine: &TimeDomainEngine, percent: f64) -> String {
    let time = engine.time_from_percent(percent);
    format!(
        "{}% → display {}, real {}",
        percent,
        ms(time),
        ms(engine.real_time(time))
    )
}
