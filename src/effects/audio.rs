//! Microphone-reactive bar visualizer drawn on the hero canvas.
//!
//! Off by default; the toggle requests microphone access and tears the
//! whole capture pipeline down again when switched off, so no stream or
//! audio context outlives the active state.

use crate::constants::*;
use crate::dom;
use crate::frame::RafLoop;
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Everything that only exists while the microphone is live.
struct Capture {
    stream: web::MediaStream,
    audio: web::AudioContext,
    analyser: web::AnalyserNode,
    // Held so the graph node is not collected while connected.
    _source: web::MediaStreamAudioSourceNode,
    bins: Vec<u8>,
}

struct Visualizer {
    toggle: web::Element,
    label: Option<web::Element>,
    hero: web::Element,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    capture: RefCell<Option<Capture>>,
    raf: RefCell<Option<RafLoop>>,
}

impl Visualizer {
    fn set_label(&self, text: &str) {
        if let Some(label) = &self.label {
            dom::set_text(label, text);
        }
    }

    fn set_active(&self, active: bool) {
        if active {
            dom::add_class(&self.toggle, "active");
            dom::add_class(&self.hero, "audio-on");
        } else {
            dom::remove_class(&self.toggle, "active");
            dom::remove_class(&self.hero, "audio-on");
        }
        let _ = self
            .toggle
            .set_attribute("aria-pressed", if active { "true" } else { "false" });
    }

    /// Match the backing store to the canvas box at the device pixel ratio.
    fn resize(&self) {
        let ratio = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let w = self.canvas.offset_width() as f64 * ratio;
        let h = self.canvas.offset_height() as f64 * ratio;
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let _ = self.ctx.scale(ratio, ratio);
    }

    fn draw(&self) {
        let mut capture = self.capture.borrow_mut();
        let Some(capture) = capture.as_mut() else {
            return;
        };
        capture.analyser.get_byte_frequency_data(&mut capture.bins);

        let width = self.canvas.offset_width() as f64;
        let height = self.canvas.offset_height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let step = capture.bins.len() / AUDIO_BAR_COUNT;
        let bar_width = width / AUDIO_BAR_COUNT as f64;
        for i in 0..AUDIO_BAR_COUNT {
            let value = capture.bins[i * step] as f64 / 255.0;
            let bar_height = value * height * 0.4;
            let x = i as f64 * bar_width;
            let y = height - bar_height - 40.0;
            self.ctx
                .set_fill_style_str(&format!("rgba(255, 77, 0, {})", 0.15 + value * 0.6));
            self.ctx.fill_rect(x, y, bar_width * 0.6, bar_height);
        }
    }

    fn is_running(&self) -> bool {
        self.capture.borrow().is_some()
    }

    fn stop(&self) {
        if let Some(raf) = self.raf.borrow_mut().take() {
            raf.stop();
        }
        if let Some(capture) = self.capture.borrow_mut().take() {
            for track in capture.stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                    track.stop();
                }
            }
            let _ = capture.audio.close();
        }
        self.set_active(false);
        self.set_label("Visualizer Off");
    }

    fn start(self: &Rc<Self>) {
        let viz = self.clone();
        spawn_local(async move {
            match open_capture().await {
                Ok(capture) => {
                    *viz.capture.borrow_mut() = Some(capture);
                    viz.resize();
                    viz.set_active(true);
                    viz.set_label("Visualizer On");

                    let frame = viz.clone();
                    let raf = RafLoop::new(move || frame.draw());
                    raf.start();
                    *viz.raf.borrow_mut() = Some(raf);
                }
                Err(err) => {
                    log::warn!("microphone capture refused: {err:#}");
                    viz.set_active(false);
                    viz.set_label("Visualizer Blocked");
                }
            }
        });
    }
}

async fn open_capture() -> Result<Capture> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow!("media devices: {e:?}"))?;

    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow!("getUserMedia: {e:?}"))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("microphone denied: {e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow!("not a media stream: {e:?}"))?;

    let audio = web::AudioContext::new().map_err(|e| anyhow!("audio context: {e:?}"))?;
    let analyser = audio
        .create_analyser()
        .map_err(|e| anyhow!("analyser: {e:?}"))?;
    analyser.set_fft_size(AUDIO_FFT_SIZE);
    let bins = vec![0u8; analyser.frequency_bin_count() as usize];

    let source = audio
        .create_media_stream_source(&stream)
        .map_err(|e| anyhow!("stream source: {e:?}"))?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow!("connect analyser: {e:?}"))?;

    Ok(Capture {
        stream,
        audio,
        analyser,
        _source: source,
        bins,
    })
}

pub fn init(document: &web::Document) -> Result<()> {
    let (Some(toggle), Some(canvas), Some(hero)) = (
        dom::by_id(document, "audio-toggle"),
        dom::by_id(document, "hero-audio"),
        dom::query(document, ".hero"),
    ) else {
        return Ok(());
    };

    let canvas: web::HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|e| anyhow!("not a canvas: {e:?}"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("2d context: {e:?}"))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("bad 2d context: {e:?}"))?;

    let viz = Rc::new(Visualizer {
        label: dom::query_scoped(&toggle, ".audio-text"),
        toggle,
        hero,
        canvas,
        ctx,
        capture: RefCell::new(None),
        raf: RefCell::new(None),
    });
    viz.resize();

    let target: web::EventTarget = viz.toggle.clone().into();
    let on_toggle = viz.clone();
    dom::listen_unit(&target, "click", move || {
        if on_toggle.is_running() {
            on_toggle.stop();
        } else {
            on_toggle.start();
        }
    });

    if let Some(window) = web::window() {
        let on_resize = viz.clone();
        dom::listen_unit(&window.into(), "resize", move || on_resize.resize());
    }

    Ok(())
}
