// ---------------------------------------------------------------------------
// Column headers written by the simulation
// ---------------------------------------------------------------------------

pub const TIME: &str = "Time (s)";

pub const POS_X: &str = "Position X (km)";
pub const POS_Y: &str = "Position Y (km)";
pub const POS_Z: &str = "Position Z (km)";

pub const LONGITUDE: &str = "Longitude (deg)";
pub const LATITUDE: &str = "Latitude (deg)";
pub const ALTITUDE: &str = "Altitude (km)";

pub const QUAT_W: &str = "Quaternion W";
pub const QUAT_X: &str = "Quaternion X";
pub const QUAT_Y: &str = "Quaternion Y";
pub const QUAT_Z: &str = "Quaternion Z";

pub const OMEGA_X: &str = "Angular Velocity X (rad/s)";
pub const OMEGA_Y: &str = "Angular Velocity Y (rad/s)";
pub const OMEGA_Z: &str = "Angular Velocity Z (rad/s)";

pub const ENERGY_ERROR: &str = "Energy Error";
pub const MOMENTUM_ERROR: &str = "Angular Momentum Error";

pub const TORQUE_X: &str = "Control Torque X (N⋅m)";
pub const TORQUE_Y: &str = "Control Torque Y (N⋅m)";
pub const TORQUE_Z: &str = "Control Torque Z (N⋅m)";

pub const THRUST_X: &str = "Thrust X (N)";
pub const THRUST_Y: &str = "Thrust Y (N)";
pub const THRUST_Z: &str = "Thrust Z (N)";

/// Every column a telemetry file must carry, in canonical order.
/// Position in this array is the field index used by the loader and writer.
pub const REQUIRED: [&str; 22] = [
    TIME,
    POS_X, POS_Y, POS_Z,
    LONGITUDE, LATITUDE, ALTITUDE,
    QUAT_W, QUAT_X, QUAT_Y, QUAT_Z,
    OMEGA_X, OMEGA_Y, OMEGA_Z,
    ENERGY_ERROR, MOMENTUM_ERROR,
    TORQUE_X, TORQUE_Y, TORQUE_Z,
    THRUST_X, THRUST_Y, THRUST_Z,
];

/// Required columns absent from `headers`, in canonical order.
pub fn missing<'a, I>(headers: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: Vec<&str> = headers.into_iter().map(str::trim).collect();
    REQUIRED
        .iter()
        .copied()
        .filter(|name| !present.contains(name))
        .collect()
}
