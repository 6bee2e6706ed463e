//! Ambient particles: looping DOM drift motes and the linked canvas fields.

use crate::constants::*;
use crate::core::particles::{drift_spec, ParticleField};
use crate::dom;
use crate::frame::RafLoop;
use anyhow::{anyhow, Result};
use glam::Vec2;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const DRIFT_KEYFRAMES: &str = "\
@keyframes particle-drift {\
  to { transform: translate(var(--drift-sway), var(--drift-rise)); opacity: 0; }\
}";

pub fn init(document: &web::Document, reduced_motion: bool) -> Result<()> {
    dom::inject_style(document, DRIFT_KEYFRAMES);
    let mut rng = rand::thread_rng();

    if let Some(container) = dom::by_id(document, "hero-particles") {
        spawn_drift(
            document,
            &container,
            &mut rng,
            HERO_DRIFT_COUNT,
            "particle",
            (1.0, 4.0),
            (-100.0, -100.0),
            100.0,
            (3.0, 3.0),
            3.0,
            true,
            reduced_motion,
        )?;
    }
    if let Some(container) = dom::by_id(document, "beyond-particles") {
        spawn_drift(
            document,
            &container,
            &mut rng,
            BEYOND_DRIFT_COUNT,
            "particle orange",
            (3.0, 9.0),
            (-120.0, -150.0),
            120.0,
            (6.0, 4.0),
            4.0,
            false,
            reduced_motion,
        )?;
    }
    Ok(())
}

/// Spawn looping DOM motes into `container`. The drift itself runs as a CSS
/// animation parameterized by custom properties, so no frame loop is needed.
#[allow(clippy::too_many_arguments)]
fn spawn_drift(
    document: &web::Document,
    container: &web::Element,
    rng: &mut impl Rng,
    count: usize,
    class: &str,
    size_range: (f32, f32),
    rise: (f32, f32),
    sway_span: f32,
    duration: (f32, f32),
    delay_span: f32,
    tinted: bool,
    reduced_motion: bool,
) -> Result<()> {
    for _ in 0..count {
        let spec = drift_spec(
            rng, size_range, rise.0, rise.1, sway_span, duration.0, duration.1, delay_span,
        );
        let el = document
            .create_element("div")
            .map_err(|e| anyhow!("create particle: {e:?}"))?;
        el.set_class_name(class);
        let mut style = format!(
            "position: absolute; width: {size:.1}px; height: {size:.1}px; \
             border-radius: 50%; left: {left:.2}%; top: {top:.2}%; pointer-events: none; \
             --drift-rise: {rise:.1}px; --drift-sway: {sway:.1}px;",
            size = spec.size_px,
            left = spec.left_pct,
            top = spec.top_pct,
            rise = spec.rise_px,
            sway = spec.sway_px,
        );
        if tinted {
            style.push_str(&format!(
                " background: rgba(255, 77, 0, {:.2});",
                spec.opacity
            ));
        } else {
            style.push_str(&format!(" opacity: {:.2};", spec.opacity));
        }
        if !reduced_motion {
            style.push_str(&format!(
                " animation: particle-drift {dur:.2}s linear {delay:.2}s infinite;",
                dur = spec.duration_sec,
                delay = spec.delay_sec,
            ));
        }
        el.set_attribute("style", &style)
            .map_err(|e| anyhow!("particle style: {e:?}"))?;
        container
            .append_child(&el)
            .map_err(|e| anyhow!("append particle: {e:?}"))?;
    }
    Ok(())
}

/// A linked-particle canvas inserted into a container element. The field
/// runs only while its container is near the viewport.
pub struct CanvasField {
    raf: RafLoop,
}

impl CanvasField {
    pub fn attach(
        document: &web::Document,
        container: &web::Element,
        count: usize,
        max_size: f32,
        speed: f32,
    ) -> Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {e:?}"))?
            .dyn_into()
            .map_err(|e| anyhow!("not a canvas: {e:?}"))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow!("append canvas: {e:?}"))?;

        let html: &web::HtmlElement = container
            .dyn_ref()
            .ok_or_else(|| anyhow!("container is not an html element"))?;
        let size = Vec2::new(html.offset_width() as f32, html.offset_height() as f32);
        canvas.set_width(size.x.max(1.0) as u32);
        canvas.set_height(size.y.max(1.0) as u32);

        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context: {e:?}"))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow!("bad 2d context: {e:?}"))?;

        let mut rng = rand::thread_rng();
        let field = Rc::new(RefCell::new(ParticleField::new(
            &mut rng,
            count,
            size,
            speed,
            max_size,
            PARTICLE_LINK_DIST,
        )));

        // Track container size without reseeding particles.
        {
            let field = field.clone();
            let canvas = canvas.clone();
            let container = container.clone();
            if let Some(window) = web::window() {
                dom::listen_unit(&window, "resize", move || {
                    if let Some(html) = container.dyn_ref::<web::HtmlElement>() {
                        let size =
                            Vec2::new(html.offset_width() as f32, html.offset_height() as f32);
                        canvas.set_width(size.x.max(1.0) as u32);
                        canvas.set_height(size.y.max(1.0) as u32);
                        field.borrow_mut().set_bounds(size);
                    }
                });
            }
        }

        let raf = RafLoop::new(move || {
            let mut field = field.borrow_mut();
            field.step();
            let w = canvas.width() as f64;
            let h = canvas.height() as f64;
            ctx.clear_rect(0.0, 0.0, w, h);

            ctx.set_fill_style_str("rgba(255, 77, 0, 0.6)");
            for p in &field.particles {
                ctx.begin_path();
                let _ = ctx.arc(
                    p.pos.x as f64,
                    p.pos.y as f64,
                    p.size as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }

            ctx.set_line_width(0.5);
            for link in field.links() {
                ctx.set_stroke_style_str(&format!("rgba(255, 77, 0, {:.3})", link.alpha));
                ctx.begin_path();
                ctx.move_to(link.a.x as f64, link.a.y as f64);
                ctx.line_to(link.b.x as f64, link.b.y as f64);
                ctx.stroke();
            }
        });
        raf.start();

        let handle = Self { raf };
        handle.bind_visibility(container);
        Ok(handle)
    }

    fn bind_visibility(&self, container: &web::Element) {
        let raf = self.raf.clone();
        dom::observe_visibility(container, "200px 0px", None, move |on_screen| {
            if on_screen {
                raf.start();
            } else {
                raf.stop();
            }
        });
    }
}

/// Wire the hero and beyond canvas fields.
pub fn init_fields(document: &web::Document, reduced_motion: bool) -> Result<()> {
    if reduced_motion {
        return Ok(());
    }
    if let Some(container) = dom::by_id(document, "hero-particles") {
        CanvasField::attach(
            document,
            &container,
            HERO_PARTICLE_COUNT,
            2.0,
            HERO_PARTICLE_SPEED,
        )?;
    }
    if let Some(container) = dom::by_id(document, "beyond-particles") {
        CanvasField::attach(
            document,
            &container,
            BEYOND_PARTICLE_COUNT,
            1.5,
            BEYOND_PARTICLE_SPEED,
        )?;
    }
    Ok(())
}
