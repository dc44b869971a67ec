use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

use crate::models::trip::TripResult;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub footprint_calculations_total: IntCounterVec,
    pub carbon_emitted_grams_total: CounterVec,
    pub trip_distance_km: HistogramVec,
    pub mode_fallbacks_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let footprint_calculations_total = IntCounterVec::new(
            Opts::new(
                "footprint_calculations_total",
                "Total footprint calculations by travel mode",
            ),
            &["mode"],
        )
        .expect("valid footprint_calculations_total metric");

        let carbon_emitted_grams_total = CounterVec::new(
            Opts::new(
                "carbon_emitted_grams_total",
                "Estimated grams of CO2 across calculated trips",
            ),
            &["mode"],
        )
        .expect("valid carbon_emitted_grams_total metric");

        let trip_distance_km = HistogramVec::new(
            HistogramOpts::new("trip_distance_km", "Great-circle trip distance in kilometres")
                .buckets(vec![0.5, 1.0, 2.0, 3.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
            &["mode"],
        )
        .expect("valid trip_distance_km metric");

        let mode_fallbacks_total = IntCounter::new(
            "mode_fallbacks_total",
            "Requests whose travel mode was unknown and treated as driving",
        )
        .expect("valid mode_fallbacks_total metric");

        registry
            .register(Box::new(footprint_calculations_total.clone()))
            .expect("register footprint_calculations_total");
        registry
            .register(Box::new(carbon_emitted_grams_total.clone()))
            .expect("register carbon_emitted_grams_total");
        registry
            .register(Box::new(trip_distance_km.clone()))
            .expect("register trip_distance_km");
        registry
            .register(Box::new(mode_fallbacks_total.clone()))
            .expect("register mode_fallbacks_total");

        Self {
            registry,
            footprint_calculations_total,
            carbon_emitted_grams_total,
            trip_distance_km,
            mode_fallbacks_total,
        }
    }

    pub fn record_trip(&self, result: &TripResult) {
        let mode = result.travel_mode.as_str();
        self.footprint_calculations_total
            .with_label_values(&[mode])
            .inc();
        self.carbon_emitted_grams_total
            .with_label_values(&[mode])
            .inc_by(result.carbon_footprint_grams);
        self.trip_distance_km
            .with_label_values(&[mode])
            .observe(result.distance_km);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
