//! Headless mode: drive the mounted simulator without a terminal and emit
//! each reading as one JSON line.

use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::app::{App, View};
use crate::data::Band;

/// One line of headless output.
#[derive(Debug, Serialize)]
struct Sample {
    view: View,
    at_ms: u64,
    value: i64,
    band: Band,
    label: &'static str,
    alert: bool,
}

/// Pump `app.update()` every `pace` and write readings to `out` until `ticks`
/// readings are written, or forever when `ticks` is `None`.
///
/// Returns the number of readings written. Fails if the mounted view has no
/// simulator.
pub async fn run<W: Write>(
    app: &mut App,
    out: &mut W,
    ticks: Option<u64>,
    pace: Duration,
) -> Result<u64> {
    let view = app.current_view();
    if !view.has_simulator() {
        bail!("view {} has no density simulator to run headless", view.route());
    }

    let mut interval = tokio::time::interval(pace.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(view = view.route(), ?ticks, "headless run started");
    let mut written = 0u64;

    while ticks.map_or(true, |limit| written < limit) {
        interval.tick().await;

        let readings = app.update();
        let Some(sim) = app.page.simulator() else {
            break;
        };
        let scale = sim.config().scale;
        let at_ms = app.last_update().as_millis() as u64;

        for reading in readings {
            if ticks.is_some_and(|limit| written >= limit) {
                break;
            }
            let sample = Sample {
                view,
                at_ms,
                value: reading.value,
                band: reading.band,
                label: scale.label(reading.band),
                alert: reading.band.is_top(),
            };
            serde_json::to_writer(&mut *out, &sample)?;
            writeln!(out)?;
            written += 1;
        }
        out.flush()?;
    }

    info!(written, "headless run finished");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ThemeChoice};
    use crate::runtime::{ManualClock, ScriptedRandom};

    fn headless_app(view: View, step_ms: u64, draws: &[i64]) -> App {
        let config = AppConfig {
            start_view: view,
            theme: ThemeChoice::Dark,
            ..AppConfig::default()
        };
        App::new(
            config,
            Box::new(ManualClock::stepping(Duration::from_millis(step_ms))),
            Box::new(ScriptedRandom::new(draws.iter().copied())),
        )
    }

    #[test]
    fn test_writes_one_line_per_reading() {
        let mut app = headless_app(View::CommandCenter, 2000, &[5, 5, 5]);
        let mut out = Vec::new();

        let written = tokio_test::block_on(run(
            &mut app,
            &mut out,
            Some(3),
            Duration::from_millis(1),
        ))
        .unwrap();
        assert_eq!(written, 3);

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let values: Vec<i64> = lines.iter().map(|l| l["value"].as_i64().unwrap()).collect();
        assert_eq!(values, vec![72, 77, 82]);

        assert_eq!(lines[0]["view"], "/");
        assert_eq!(lines[0]["label"], "Medium");
        assert_eq!(lines[0]["alert"], false);
        assert_eq!(lines[2]["band"], "High");
        assert_eq!(lines[2]["alert"], true);
        // Mounted at 2000, each update reads the clock once
        assert_eq!(lines[0]["at_ms"], 4000);
    }

    #[test]
    fn test_monitoring_uses_status_labels() {
        let mut app = headless_app(View::LiveMonitoring, 3000, &[150, 160, 170, 200]);
        let mut out = Vec::new();

        tokio_test::block_on(run(&mut app, &mut out, Some(1), Duration::from_millis(1)))
            .unwrap();
        let line: serde_json::Value =
            serde_json::from_slice(out.split(|&b| b == b'\n').next().unwrap()).unwrap();
        assert_eq!(line["view"], "/monitoring");
        assert_eq!(line["value"], 1447);
        assert_eq!(line["label"], "Critical");
    }

    #[test]
    fn test_rejects_view_without_simulator() {
        let mut app = headless_app(View::Authorities, 1000, &[]);
        let mut out = Vec::new();
        let result =
            tokio_test::block_on(run(&mut app, &mut out, Some(1), Duration::from_millis(1)));
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
