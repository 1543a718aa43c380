use prometheus::{Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quotations_total: IntCounterVec,
    pub bookings_total: IntCounterVec,
    pub courier_request_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let quotations_total = IntCounterVec::new(
            Opts::new("quotations_total", "Quotation requests by outcome"),
            &["outcome"],
        )
        .expect("valid quotations_total metric");

        let bookings_total = IntCounterVec::new(
            Opts::new("bookings_total", "Booking requests by outcome"),
            &["outcome"],
        )
        .expect("valid bookings_total metric");

        let courier_request_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "courier_request_seconds",
                "Latency of outbound courier calls in seconds",
            ),
            &["path"],
        )
        .expect("valid courier_request_seconds metric");

        registry
            .register(Box::new(quotations_total.clone()))
            .expect("register quotations_total");
        registry
            .register(Box::new(bookings_total.clone()))
            .expect("register bookings_total");
        registry
            .register(Box::new(courier_request_seconds.clone()))
            .expect("register courier_request_seconds");

        Self {
            registry,
            quotations_total,
            bookings_total,
            courier_request_seconds,
        }
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
