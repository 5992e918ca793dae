//! Jump sound effect
//!
//! The WAV file is decoded and converted to the device's sample format once at
//! startup; playing it just re-queues the prepared samples.

use std::path::Path;

use sdl2::audio::{AudioCVT, AudioQueue, AudioSpecDesired, AudioSpecWAV};
use sdl2::AudioSubsystem;

use crate::error::GameError;
use crate::game::SoundSink;

pub struct JumpSound {
    queue: AudioQueue<i16>,
    samples: Vec<i16>,
}

impl JumpSound {
    pub fn load(audio: &AudioSubsystem, path: &Path) -> Result<Self, GameError> {
        let wav = AudioSpecWAV::load_wav(path).map_err(|e| GameError::asset(path, e))?;

        let desired = AudioSpecDesired {
            freq: Some(wav.freq),
            channels: Some(wav.channels),
            samples: None,
        };
        let queue = audio.open_queue::<i16, _>(None, &desired)?;

        let spec = queue.spec();
        let converter = AudioCVT::new(
            wav.format,
            wav.channels,
            wav.freq,
            spec.format,
            spec.channels,
            spec.freq,
        )
        .map_err(|e| GameError::asset(path, e))?;
        let samples = samples_from_bytes(&converter.convert(wav.buffer().to_vec()));

        tracing::info!(
            "Loaded {} ({} samples, {} Hz, {} ch)",
            path.display(),
            samples.len(),
            spec.freq,
            spec.channels
        );
        Ok(JumpSound { queue, samples })
    }
}

impl SoundSink for JumpSound {
    /// Restarts the effect from the beginning, cutting off any earlier jump
    fn play_jump(&mut self) -> Result<(), GameError> {
        self.queue.clear();
        self.queue.queue_audio(&self.samples)?;
        self.queue.resume();
        Ok(())
    }
}

/// Reinterprets converted native-endian PCM bytes as 16-bit samples.
/// A trailing odd byte is dropped.
fn samples_from_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_from_bytes() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1000i16.to_ne_bytes());
        bytes.extend_from_slice(&(-2i16).to_ne_bytes());
        bytes.push(0x7f);

        assert_eq!(samples_from_bytes(&bytes), vec![1000, -2]);
        assert!(samples_from_bytes(&[]).is_empty());
    }
}
