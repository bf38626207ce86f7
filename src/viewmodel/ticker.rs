use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};
use tracing::trace;

use crate::model::Readout;
use super::{Clock, ExhibitViewModel};

/// Refresh cadence of every exhibit screen
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// Produce a readout every [`REFRESH_PERIOD`], starting immediately.
///
/// Runs until `max_ticks` readouts were emitted (forever if `None`) or
/// `on_readout` returns an error. Returns the number of readouts emitted.
pub async fn tick_readouts<F>(
    vm: &ExhibitViewModel,
    clock: &dyn Clock,
    max_ticks: Option<u64>,
    mut on_readout: F,
) -> Result<u64>
where
    F: FnMut(&Readout) -> Result<()>,
{
    let mut ticker = interval(REFRESH_PERIOD);
    // Late ticks shift the schedule instead of firing in a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut emitted = 0u64;
    while max_ticks.is_none_or(|max| emitted < max) {
        ticker.tick().await;
        let readout = vm.readout(clock);
        trace!(tick = emitted, value = readout.value, "refresh");
        on_readout(&readout)?;
        emitted += 1;
    }

    Ok(emitted)
}
