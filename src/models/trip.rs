use serde::{Deserialize, Serialize};

use crate::models::travel::TravelMode;

/// Advisory nudges attached to a trip. Messages are shown verbatim in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    SwitchToTransit,
    SwitchToBicycle,
    SwitchToWalking,
    BicycleIsGreener,
    PraiseBicycling,
    PraiseWalking,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::SwitchToTransit => "🚌 ลองใช้รถสาธารณะแทน ลดคาร์บอนได้ 43%",
            Recommendation::SwitchToBicycle => "🚲 ปั่นจักรยานลดคาร์บอนได้ 90%",
            Recommendation::SwitchToWalking => "🚶‍♂️ เดินเท้าได้ ลดคาร์บอน 100%",
            Recommendation::BicycleIsGreener => "🚲 ปั่นจักรยานเป็นมิตรกับสิ่งแวดล้อมมากกว่า",
            Recommendation::PraiseBicycling => "🌟 ทางเลือกที่ดีมาก! เป็นมิตรกับสิ่งแวดล้อม",
            Recommendation::PraiseWalking => "🏆 ยอดเยี่ยม! ไม่ปล่อยคาร์บอนเลย",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    pub distance_km: f64,
    pub carbon_footprint_grams: f64,
    pub green_points: u8,
    pub travel_mode: TravelMode,
    pub recommendations: Vec<String>,
    /// The unrecognised mode string, present only when driving was assumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactEquivalents {
    /// Years of CO₂ uptake by one tree.
    pub tree_years: f64,
    pub led_bulb_hours: f64,
    pub phone_charges: f64,
}
