//! Integration tests for loading decoded audio into sample vectors

use std::path::Path;

use stratum_buffers::{
    load, load_converted, load_raw, BufferError, ComplexBuffer, MatrixBuffer, SampleVector,
    SimpleBuffer,
};

const SAMPLE_RATE: u32 = 44100;

/// Write a stereo 16-bit WAV: 440 Hz sine left, inverted copy right
fn write_stereo_wav(path: &Path, frames: usize) -> Result<(), Box<dyn std::error::Error>> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for i in 0..frames {
        let t = i as f32 / SAMPLE_RATE as f32;
        let value = ((t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 0.5 * i16::MAX as f32) as i16;
        writer.write_sample(value)?;
        writer.write_sample(-value)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Load a WAV file and return (interleaved PCM, channels)
fn load_wav(path: &Path) -> Result<(Vec<i16>, usize), Box<dyn std::error::Error>> {
    let mut reader = hound::WavReader::open(path)?;
    let channels = reader.spec().channels as usize;
    let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    Ok((samples, channels))
}

fn deinterleave(samples: &[i16], channels: usize) -> Vec<Vec<f32>> {
    (0..channels)
        .map(|c| {
            samples
                .iter()
                .skip(c)
                .step_by(channels)
                .map(|&s| s as f32 / 32768.0)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hops_from_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sine_440.wav");
        write_stereo_wav(&path, 4096).expect("Failed to write fixture");

        let (pcm, channels) = load_wav(&path).expect("Failed to load fixture");
        assert_eq!(channels, 2);
        let left: Vec<i16> = pcm.iter().step_by(2).copied().collect();

        let hop_size = 512;
        let mut buffer = SimpleBuffer::new(hop_size).unwrap();
        let mut hops = 0;
        for hop in left.chunks_exact(hop_size) {
            load_converted(&mut buffer, hop).unwrap();
            assert_eq!(buffer.size(), hop_size);
            for (i, &s) in hop.iter().enumerate() {
                assert_eq!(buffer.get(i).unwrap(), s as f32 / 32768.0);
            }
            hops += 1;
        }
        assert_eq!(hops, 8);
    }

    #[test]
    fn test_trailing_partial_hop_rejected() {
        let samples = vec![0.25f32; 1000];
        let mut buffer = SimpleBuffer::new(512).unwrap();

        let mut results = samples.chunks(512).map(|hop| load(&mut buffer, hop));

        assert!(results.next().unwrap().is_ok());
        assert_eq!(
            results.next().unwrap(),
            Err(BufferError::ShortSource {
                required: 512,
                available: 488
            })
        );
    }

    #[test]
    fn test_stereo_wav_into_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_stereo_wav(&path, 256).expect("Failed to write fixture");

        let (pcm, channels) = load_wav(&path).expect("Failed to load fixture");
        let planar = deinterleave(&pcm, channels);

        let mut matrix = MatrixBuffer::new(channels, 256).unwrap();
        let sources: Vec<&[f32]> = planar.iter().map(|c| c.as_slice()).collect();
        matrix.load_channels(&sources).unwrap();

        let loaded = matrix.channels();
        for i in 0..256 {
            assert_eq!(loaded[0][i], planar[0][i] as f64);
            assert_eq!(loaded[1][i], -loaded[0][i]);
        }
    }

    #[test]
    fn test_every_vector_kind_loads_full_length() {
        let source: Vec<f32> = (0..300).map(|i| i as f32 * 1.5).collect();

        let mut simple = SimpleBuffer::new(300).unwrap();
        let mut complex = ComplexBuffer::new(512).unwrap();
        let mut matrix = MatrixBuffer::new(2, 150).unwrap();

        load(&mut simple, &source).unwrap();
        load(&mut complex.norm_mut(), &source).unwrap();
        load(&mut matrix.channel_mut(1).unwrap(), &source).unwrap();

        assert_eq!(simple.as_slice(), source.as_slice());
        let norm = complex.norm();
        assert_eq!(norm.len(), 257);
        assert!(norm.iter().zip(&source).all(|(&n, &s)| n == s as f64));
        let channel = matrix.channel(1).unwrap();
        assert!(channel.iter().zip(&source).all(|(&c, &s)| c == s as f64));
    }

    #[test]
    fn test_raw_pointer_from_foreign_buffer() {
        let foreign: Box<[f32]> = (0..128).map(|i| i as f32).collect();
        let mut buffer = SimpleBuffer::new(128).unwrap();

        unsafe { load_raw(&mut buffer, foreign.as_ptr(), foreign.len()) }.unwrap();

        assert_eq!(buffer.length(), 128);
        assert_eq!(buffer.as_slice(), &foreign[..]);
    }
}
