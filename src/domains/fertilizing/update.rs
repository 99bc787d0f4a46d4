/// Recomputes the regrow counter when the crop sits exactly at its regrow
/// boundary after a harvest.
pub fn regrow_counter_after_harvest(regrow_days: i32, speed_boost: f32) -> i32 {
    (regrow_days as f64 / (1.0 + speed_boost as f64)).ceil() as i32
}

/// Recomputes the regrow counter when the speed boost changes mid-cycle.
/// Deliberately a different formula than the post-harvest one, the two
/// call sites historically disagree and both behaviors are kept.
pub fn regrow_counter_on_boost_change(regrow_days: i32, speed_boost: f32) -> i32 {
    (regrow_days as f64 * (1.0 - speed_boost as f64)).ceil() as i32
}
