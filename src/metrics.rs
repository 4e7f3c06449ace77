//! Prometheus metrics for the mint risk scanner
//!
//! - Scans completed counter
//! - Scan latency histogram
//! - Errored (fail-open) checks by check name
//! - Verdicts by risk level

use crate::scanner::ScanResult;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Scanner metrics with their own registry
pub struct ScanMetrics {
    registry: Registry,
    /// Completed scans
    pub scans_total: IntCounter,
    /// Scan latency in milliseconds
    pub scan_duration_ms: Histogram,
    /// Checks that could not be evaluated, by check
    pub check_errors: IntCounterVec,
    /// Verdicts by risk level
    pub risk_levels: IntCounterVec,
}

impl ScanMetrics {
    /// Create all metrics and register them
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let scans_total = IntCounter::with_opts(Opts::new(
            "scanner_scans_total",
            "Total number of completed mint scans",
        ))?;
        registry.register(Box::new(scans_total.clone()))?;

        let scan_duration_ms = Histogram::with_opts(
            HistogramOpts::new(
                "scanner_scan_duration_ms",
                "Mint scan latency in milliseconds",
            )
            .buckets(vec![50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0]),
        )?;
        registry.register(Box::new(scan_duration_ms.clone()))?;

        let check_errors = IntCounterVec::new(
            Opts::new(
                "scanner_check_errors_total",
                "Checks that failed open because data was unavailable",
            ),
            &["check"],
        )?;
        registry.register(Box::new(check_errors.clone()))?;

        let risk_levels = IntCounterVec::new(
            Opts::new("scanner_risk_level_total", "Scan verdicts by risk level"),
            &["level"],
        )?;
        registry.register(Box::new(risk_levels.clone()))?;

        Ok(Self {
            registry,
            scans_total,
            scan_duration_ms,
            check_errors,
            risk_levels,
        })
    }

    /// Record a finished scan
    pub fn observe(&self, result: &ScanResult, elapsed_ms: f64) {
        self.scans_total.inc();
        self.scan_duration_ms.observe(elapsed_ms);
        let level = result.risk_level.to_string();
        self.risk_levels.with_label_values(&[level.as_str()]).inc();

        for check in result.checks.iter().filter(|c| c.errored) {
            self.check_errors
                .with_label_values(&[check.name.as_str()])
                .inc();
        }
    }

    /// Text exposition of all metrics
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
