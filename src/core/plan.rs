//! Plan command logic: request the plan, report the trip, render logs.

use crate::api::client::PlanClient;
use crate::config::Config;
use crate::core::render::render_response;
use crate::errors::{AppError, AppResult};
use crate::models::plan::{PlanRequest, PlanResponse};
use crate::render::RenderFormat;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{RESET, color_for_stop};
use crate::utils::formatting::{bold, format_eta, hours2readable};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn plan_trip(
    cfg: &Config,
    request: &PlanRequest,
    out: Option<&str>,
    save: Option<&str>,
    format: Option<&RenderFormat>,
) -> AppResult<()> {
    let client = PlanClient::new(&cfg.api_base, cfg.request_timeout_secs)?;

    info(format!("Requesting trip plan from {}", cfg.api_base));
    let response = client.plan_trip(request)?;

    print_trip_report(&response);

    if let Some(path) = save {
        fs::write(path, serde_json::to_string_pretty(&response)?)?;
        success(format!("Saved planning response: {path}"));
    }

    let format = match format {
        Some(f) => f.clone(),
        None => RenderFormat::from_name(&cfg.log_format).ok_or_else(|| {
            AppError::Config(format!("unknown log_format '{}'", cfg.log_format))
        })?,
    };

    let out_dir = expand_tilde(out.unwrap_or(&cfg.output_dir));
    render_response(&response, &format, &out_dir, None)
}

fn print_trip_report(response: &PlanResponse) {
    header("Trip plan");

    let summary = &response.summary;
    println!("{} {:.0} mi", bold("Distance:"), summary.distance_miles);
    println!("{} {}", bold("Duration:"), hours2readable(summary.duration_hours));

    if let Some(geom) = &response.route.geometry {
        println!("{} {} route points", bold("Route:"), geom.coordinates.len());
    }

    if !response.stops.is_empty() {
        println!();
        println!("{}", bold("Stops"));
        for stop in &response.stops {
            let kind = stop.kind.as_str();
            println!(
                "  {}\u{25cf}{} {:<8} {}  ({})",
                color_for_stop(kind),
                RESET,
                kind,
                format_eta(&stop.eta),
                hours2readable(stop.duration_hours)
            );
        }
    }

    println!();
}
