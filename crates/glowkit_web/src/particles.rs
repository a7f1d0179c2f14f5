//! Particle background construction.
//!
//! Builds the decorative background subtree once per page: a container
//! div under `body`, holding a configured number of particle divs whose
//! position and animation timing are drawn from the core sampling logic.
//! The stylesheet layer animates them; this module only writes the
//! randomized inline properties it reads.

use glowkit_core::{ParticleConfig, ParticleStyle, PARTICLE_CLASS, PARTICLE_CONTAINER_ID};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{EnhanceError, Result};

/// Mount the particle background with the default configuration and an
/// entropy-seeded generator.
pub fn mount(document: &Document) -> Result<Element> {
    mount_with(
        document,
        &ParticleConfig::default(),
        &mut SmallRng::from_entropy(),
    )
}

/// Mount the particle background under `body`.
///
/// If the container id is already present in the document, the existing
/// element is returned untouched, so running initialization twice cannot
/// duplicate the subtree.
pub fn mount_with<R: Rng>(
    document: &Document,
    config: &ParticleConfig,
    rng: &mut R,
) -> Result<Element> {
    if let Some(existing) = document.get_element_by_id(PARTICLE_CONTAINER_ID) {
        return Ok(existing);
    }

    let body = document.body().ok_or(EnhanceError::MissingBody)?;

    let container = document.create_element("div")?;
    container.set_id(PARTICLE_CONTAINER_ID);
    body.append_child(&container)?;

    for _ in 0..config.count {
        let style = ParticleStyle::sample(rng, config);

        let particle: HtmlElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| EnhanceError::Dom("created div is not an HtmlElement".into()))?;
        particle.set_class_name(PARTICLE_CLASS);

        let css = particle.style();
        css.set_property("left", &style.css_left())?;
        css.set_property("bottom", &style.css_bottom())?;
        css.set_property("animation-duration", &style.css_duration())?;
        css.set_property("animation-delay", &style.css_delay())?;

        container.append_child(&particle)?;
    }

    Ok(container)
}
