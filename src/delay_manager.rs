use std::time::Duration;
use std::thread;
use log::info;

/// Blocking pause between page requests.
pub fn politeness_delay(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    info!("Waiting for {:.1} seconds (Politeness Delay)...", delay.as_secs_f64());
    thread::sleep(delay);
}
