use rfi_flagger::grid::{GridF32, Mask2D};
use rfi_flagger::{mask_stats, FlaggerParams, RfiFlagger};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub spectrogram: SpectrogramConfig,
    #[serde(default)]
    pub flagger: FlaggerParams,
    /// Optional path for the JSON pipeline trace.
    #[serde(default)]
    pub trace_json: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            spectrogram: SpectrogramConfig::default(),
            flagger: FlaggerParams::default(),
            trace_json: None,
        }
    }
}

/// Synthetic waterfall: pseudo-noise plus a persistent narrowband carrier
/// and a broadband burst.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpectrogramConfig {
    pub time_bins: usize,
    pub freq_bins: usize,
    pub noise_baseline: f32,
    pub noise_amplitude: f32,
    pub carrier_bin: usize,
    pub carrier_power: f32,
    pub burst_bin: usize,
    pub burst_power: f32,
    pub seed: u64,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            time_bins: 256,
            freq_bins: 512,
            noise_baseline: 100_000.0,
            noise_amplitude: 2_000.0,
            carrier_bin: 170,
            carrier_power: 300_000.0,
            burst_bin: 60,
            burst_power: 250_000.0,
            seed: 1,
        }
    }
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    let (grid, truth) = synthesize(&config.spectrogram)?;
    let flagger = RfiFlagger::new(config.flagger);
    let report = flagger
        .flag(&grid, None)
        .map_err(|e| format!("Flagging failed: {e}"))?;

    let counts =
        mask_stats(&truth, &report.mask).map_err(|e| format!("Stats failed: {e}"))?;
    println!(
        "flagged {} of {} samples in {:.2} ms",
        report.mask.flagged_count(),
        grid.w * grid.h,
        report.trace.timings.total_ms
    );
    for pass in &report.trace.passes {
        println!(
            "  pass {} (eta={:.2}): detected={} dilated={} total={}",
            pass.index, pass.eta, pass.detected, pass.dilated, pass.total_flagged
        );
    }
    println!(
        "precision={} recall={}",
        format_ratio(counts.precision()),
        format_ratio(counts.recall())
    );

    if let Some(path) = &config.trace_json {
        let json = serde_json::to_string_pretty(&report.trace)
            .map_err(|e| format!("Failed to serialize trace: {e}"))?;
        fs::write(path, json)
            .map_err(|e| format!("Failed to write trace {}: {e}", path.display()))?;
        println!("Wrote pipeline trace to {}", path.display());
    }

    Ok(())
}

fn format_ratio(val: Option<f64>) -> String {
    val.map(|v| format!("{v:.3}"))
        .unwrap_or_else(|| "-".to_string())
}

fn synthesize(cfg: &SpectrogramConfig) -> Result<(GridF32, Mask2D), String> {
    if cfg.time_bins == 0 || cfg.freq_bins == 0 {
        return Err("spectrogram dimensions must be positive".to_string());
    }
    if cfg.carrier_bin >= cfg.freq_bins || cfg.burst_bin >= cfg.time_bins {
        return Err("injected RFI lies outside the grid".to_string());
    }

    let mut grid = GridF32::new(cfg.freq_bins, cfg.time_bins);
    let mut state = cfg.seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    for v in &mut grid.data {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = ((state >> 33) as f32) / ((1u64 << 31) as f32) - 1.0;
        *v = cfg.noise_baseline + cfg.noise_amplitude * unit;
    }

    let mut truth = Mask2D::new(cfg.freq_bins, cfg.time_bins);
    for t in 0..cfg.time_bins {
        let v = grid.get(t, cfg.carrier_bin);
        grid.set(t, cfg.carrier_bin, v + cfg.carrier_power);
        truth.set(t, cfg.carrier_bin, true);
    }
    for f in 0..cfg.freq_bins {
        let v = grid.get(cfg.burst_bin, f);
        grid.set(cfg.burst_bin, f, v + cfg.burst_power);
        truth.set(cfg.burst_bin, f, true);
    }

    Ok((grid, truth))
}
