//! Benchmark fixtures for ranportal.

use ranportal_types::{DuplexMode, RanParameters};

/// Carrier frequencies spanning FR1 and FR2, in Hz.
pub const FREQUENCIES_HZ: [f64; 4] = [700e6, 3.5e9, 28e9, 39e9];

/// Channel bandwidths, in Hz.
pub const BANDWIDTHS_HZ: [f64; 4] = [5e6, 20e6, 100e6, 400e6];

/// Transmit powers, in dBm.
pub const TRANSMIT_POWERS_DBM: [f64; 3] = [10.0, 23.0, 46.0];

/// Every combination of the fixture axes, in both duplex modes.
pub fn parameter_grid() -> Vec<RanParameters> {
    let mut grid = Vec::new();
    for frequency in FREQUENCIES_HZ {
        for bandwidth in BANDWIDTHS_HZ {
            for mode in DuplexMode::ALL {
                for power in TRANSMIT_POWERS_DBM {
                    if let Ok(params) = RanParameters::new(frequency, bandwidth, mode, power) {
                        grid.push(params);
                    }
                }
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size() {
        assert_eq!(
            parameter_grid().len(),
            FREQUENCIES_HZ.len() * BANDWIDTHS_HZ.len() * 2 * TRANSMIT_POWERS_DBM.len()
        );
    }
}
