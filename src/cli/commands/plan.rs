use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::plan::PlanRequest;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        from,
        pickup,
        dropoff,
        cycle_hours,
        start_time,
        out,
        save,
        format,
    } = cmd
    {
        let request = PlanRequest {
            current_location: from.clone(),
            pickup_location: pickup.clone(),
            dropoff_location: dropoff.clone(),
            current_cycle_hours_used: *cycle_hours,
            start_time: start_time.clone(),
        };

        crate::core::plan::plan_trip(
            cfg,
            &request,
            out.as_deref(),
            save.as_deref(),
            format.as_ref(),
        )?;
    }
    Ok(())
}
