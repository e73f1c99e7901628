//! Human-readable rendering of estimates.

/// Formats a throughput in bits per second (e.g., "188.19 Mbps", "1.12 Gbps").
#[must_use]
pub fn format_throughput(bps: f64) -> String {
    const KBPS: f64 = 1e3;
    const MBPS: f64 = 1e6;
    const GBPS: f64 = 1e9;

    if bps >= GBPS {
        format!("{:.2} Gbps", bps / GBPS)
    } else if bps >= MBPS {
        format!("{:.2} Mbps", bps / MBPS)
    } else if bps >= KBPS {
        format!("{:.2} Kbps", bps / KBPS)
    } else {
        format!("{bps:.0} bps")
    }
}

/// Formats a latency in seconds (e.g., "3.75 ms", "250 µs").
#[must_use]
pub fn format_latency(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{seconds:.2} s")
    } else if seconds >= 1e-3 {
        format!("{:.2} ms", seconds * 1e3)
    } else {
        format!("{:.0} µs", seconds * 1e6)
    }
}
