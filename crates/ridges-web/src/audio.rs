use ridges_core::{
    FrequencySampler, FrequencySnapshot, Transport, ANALYSER_FFT_SIZE, AUDIO_TRACK_URL,
    SNAPSHOT_BINS, VOLUME_DEFAULT,
};
use web_sys as web;

/// Looping track routed element -> gain -> analyser, gain -> destination.
///
/// The analyser taps the post-gain signal, so volume also scales the
/// spectrum the ridges are shaped from.
#[derive(Clone)]
pub struct AudioDeck {
    pub ctx: web::AudioContext,
    element: web::HtmlAudioElement,
    gain: web::GainNode,
    analyser: web::AnalyserNode,
}

pub fn build_deck() -> anyhow::Result<AudioDeck> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
    let element = web::HtmlAudioElement::new_with_src(AUDIO_TRACK_URL)
        .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
    element.set_loop(true);

    let source = ctx
        .create_media_element_source(&element)
        .map_err(|e| anyhow::anyhow!("MediaElementAudioSourceNode: {:?}", e))?;
    let gain = web::GainNode::new(&ctx).map_err(|e| anyhow::anyhow!("GainNode: {:?}", e))?;
    gain.gain().set_value(VOLUME_DEFAULT);
    let analyser =
        web::AnalyserNode::new(&ctx).map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);

    if let Err(e) = source.connect_with_audio_node(&gain) {
        log::error!("[audio] source->gain connect error: {:?}", e);
    }
    if let Err(e) = gain.connect_with_audio_node(&analyser) {
        log::error!("[audio] gain->analyser connect error: {:?}", e);
    }
    if let Err(e) = gain.connect_with_audio_node(&ctx.destination()) {
        log::error!("[audio] gain->destination connect error: {:?}", e);
    }

    log::info!(
        "[audio] track={} bins={}",
        AUDIO_TRACK_URL,
        analyser.frequency_bin_count()
    );
    Ok(AudioDeck {
        ctx,
        element,
        gain,
        analyser,
    })
}

impl AudioDeck {
    pub fn sampler(&self) -> AnalyserSampler {
        AnalyserSampler {
            analyser: self.analyser.clone(),
            buf: vec![0; SNAPSHOT_BINS],
        }
    }
}

impl Transport for AudioDeck {
    fn is_playing(&self) -> bool {
        !self.element.paused()
    }

    fn play(&mut self) {
        // autoplay policy keeps the context suspended until a user gesture
        _ = self.ctx.resume();
        if let Err(e) = self.element.play() {
            log::error!("[audio] play error: {:?}", e);
        }
    }

    fn pause(&mut self) {
        _ = self.element.pause();
    }

    fn stop(&mut self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }

    fn set_volume(&mut self, volume: f32) {
        self.gain.gain().set_value(volume);
    }
}

/// Byte spectrum reader over the deck's analyser.
pub struct AnalyserSampler {
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
}

impl FrequencySampler for AnalyserSampler {
    fn sample(&mut self) -> FrequencySnapshot {
        let bins = self.analyser.frequency_bin_count() as usize;
        if self.buf.len() != bins {
            self.buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.buf);
        FrequencySnapshot::from_bins(&self.buf)
    }
}
