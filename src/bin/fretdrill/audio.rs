//! Audio output - plays reference tones through the default device

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use fretdrill::{
    tone::{NoTone, ToneMessage, ToneSink, ToneVoice},
    MAX_BLOCK_SIZE,
};

/// Pending tone commands; one per announcement, so this never fills in practice.
const TONE_RING_CAPACITY: usize = 16;

/// Open the default output and return a sink feeding it.
///
/// Without a usable device the drill still runs, silently.
pub fn open_tone_output() -> (Box<dyn ToneSink>, Option<cpal::Stream>) {
    match build_stream() {
        Ok((sink, stream)) => (sink, Some(stream)),
        Err(err) => {
            tracing::warn!(error = %err, "no audio output, tones disabled");
            (Box::new(NoTone), None)
        }
    }
}

fn build_stream() -> EyreResult<(Box<dyn ToneSink>, cpal::Stream)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    tracing::info!(sample_rate, channels, "audio output ready");

    let (tx, rx) = RingBuffer::<ToneMessage>::new(TONE_RING_CAPACITY);

    let mut voice = ToneVoice::new(sample_rate, rx);
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    voice.render_block(block);

                    // Mono to all channels
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| tracing::error!(%err, "audio stream error"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    Ok((Box::new(tx), stream))
}
