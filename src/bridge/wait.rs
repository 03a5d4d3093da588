use tokio::time::sleep;
use tracing::debug;

use crate::config::WaitPolicy;
use crate::player::LocalPlayer;

/// Give the local player time to bring up its audio stream after a start
/// notification. Returns whether audio showed up; the caller carries on either
/// way.
pub async fn await_local_audio(local: &dyn LocalPlayer, policy: &WaitPolicy) -> bool {
    sleep(policy.initial_delay()).await;
    let mut polls = 0;
    while !local.has_audio() && polls < policy.max_polls {
        sleep(policy.poll_interval()).await;
        polls += 1;
    }
    let ready = local.has_audio();
    if !ready {
        debug!("Local audio not ready after {} polls, continuing", polls);
    }
    ready
}
