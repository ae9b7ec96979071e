pub mod assessment;
pub mod cap_input;
pub mod needs_profile;
pub mod profile_axes;
pub mod profile_fields;
pub mod scenario_axis;
pub mod scenario_bundle;
pub mod service_line;
