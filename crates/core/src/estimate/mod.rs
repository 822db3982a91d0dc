pub mod irradiance;
pub mod positioning;

pub use irradiance::{annual_poa, efficiency_gain, is_monsoon_region, monthly_distribution};
pub use positioning::{direction_name, optimal_azimuth, optimal_tilt, Positioning};
