//! Example: Load a signal into analysis buffers hop by hop
//!
//! Run with `RUST_LOG=trace` to see buffer allocation.

use stratum_buffers::{load_with_config, ComplexBuffer, LoaderConfig, SimpleBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let config = LoaderConfig::default();
    let sample_rate = 44100.0f32;

    // Two seconds of a 220 Hz tone
    let signal: Vec<f32> = (0..88200)
        .map(|i| (i as f32 * 220.0 * 2.0 * std::f32::consts::PI / sample_rate).sin() * 0.8)
        .collect();

    let mut hop = SimpleBuffer::from_config(&config)?;
    let spectrum = ComplexBuffer::from_config(&config)?;

    let mut peak = 0.0f32;
    let mut frames = 0;
    for frame in signal.chunks_exact(hop.size()) {
        load_with_config(&mut hop, frame, &config)?;
        peak = hop.as_slice().iter().fold(peak, |acc, s| acc.max(s.abs()));
        frames += 1;
    }

    println!("Loaded {} frames of {} samples", frames, hop.size());
    println!("  Peak amplitude: {:.3}", peak);
    println!("  Spectral bins per frame: {}", spectrum.size());

    Ok(())
}
