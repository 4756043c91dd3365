use crate::constants::MASTER_GAIN;
use galaxy_core::{AudioLifecycle, AudioSampler, FrequencySource, FFT_SIZE};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Analyser node adapted to the core sampler.
#[derive(Clone)]
pub struct Analyser(pub web::AnalyserNode);

impl FrequencySource for Analyser {
    fn fill_byte_frequency_data(&self, out: &mut [u8]) {
        self.0.get_byte_frequency_data(out);
    }
}

/// Nodes are held so the graph stays connected for the page lifetime.
#[allow(dead_code)]
pub struct AudioHandles {
    pub ctx: web::AudioContext,
    pub element: web::HtmlAudioElement,
    pub analyser: web::AnalyserNode,
    pub master_gain: web::GainNode,
}

/// Single owner of everything audio; created empty, filled on the begin gesture.
#[derive(Default)]
pub struct AudioHub {
    pub lifecycle: AudioLifecycle,
    pub sampler: AudioSampler<Analyser>,
    pub handles: Option<AudioHandles>,
}

impl AudioHub {
    pub fn install(&mut self, handles: AudioHandles) {
        self.sampler.attach(Analyser(handles.analyser.clone()));
        self.handles = Some(handles);
        self.lifecycle.succeed();
    }
}

fn js_err(label: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", label, e)
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| js_err("GainNode", e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let a = web::AnalyserNode::new(audio_ctx).map_err(|e| js_err("AnalyserNode", e))?;
    a.set_fft_size(FFT_SIZE);
    Ok(a)
}

/// Build `element -> analyser -> gain -> destination` and start playback.
///
/// Must run from a user gesture; browsers refuse to start audio otherwise.
pub async fn start(url: &str) -> anyhow::Result<AudioHandles> {
    let ctx = web::AudioContext::new().map_err(|e| js_err("AudioContext", e))?;
    match wire_and_play(&ctx, url).await {
        Ok((element, analyser, master_gain)) => Ok(AudioHandles {
            ctx,
            element,
            analyser,
            master_gain,
        }),
        Err(e) => {
            if let Ok(p) = ctx.close() {
                _ = JsFuture::from(p).await;
            }
            Err(e)
        }
    }
}

async fn wire_and_play(
    ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<(web::HtmlAudioElement, web::AnalyserNode, web::GainNode)> {
    let element = web::HtmlAudioElement::new_with_src(url).map_err(|e| js_err("Audio", e))?;
    element.set_loop(true);
    element.set_cross_origin(Some("anonymous"));

    let source = ctx
        .create_media_element_source(&element)
        .map_err(|e| js_err("MediaElementSource", e))?;
    let analyser = create_analyser(ctx)?;
    let master_gain = create_gain(ctx, MASTER_GAIN)?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| js_err("connect source", e))?;
    analyser
        .connect_with_audio_node(&master_gain)
        .map_err(|e| js_err("connect analyser", e))?;
    master_gain
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| js_err("connect destination", e))?;

    let resume = ctx.resume().map_err(|e| js_err("resume", e))?;
    JsFuture::from(resume)
        .await
        .map_err(|e| js_err("resume", e))?;
    let play = element.play().map_err(|e| js_err("play", e))?;
    JsFuture::from(play).await.map_err(|e| js_err("play", e))?;
    log::info!(
        "[audio] playing {} (fft={} bins={})",
        url,
        analyser.fft_size(),
        analyser.frequency_bin_count()
    );
    Ok((element, analyser, master_gain))
}
