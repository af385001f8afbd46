//! Draws the gallery's view models into the DOM. Called after every command.

use crate::constants::*;
use crate::dom;
use crate::input::card_transform;
use crate::overlay;
use museum_core::{CardLayout, DetailView, Gallery, HallView, SpeechEngine};
use web_sys as web;

pub fn render<S: SpeechEngine>(document: &web::Document, gallery: &Gallery<S>) {
    overlay::set_visible(document, INTRO_ID, gallery.in_intro());
    overlay::set_visible(document, HALL_ID, !gallery.in_intro());
    if gallery.in_intro() {
        return;
    }
    if let Err(e) = render_hall(document, &gallery.hall_view()) {
        log::error!("[render] hall: {:?}", e);
    }
    match gallery.detail_view() {
        Some(view) => {
            if let Err(e) = render_detail(document, &view) {
                log::error!("[render] detail: {:?}", e);
            }
            overlay::show(document, DETAIL_ID);
        }
        None => overlay::hide(document, DETAIL_ID),
    }
}

fn render_hall(document: &web::Document, view: &HallView<'_>) -> anyhow::Result<()> {
    let container = dom::element(document, CARDS_ID)?;
    container.set_inner_html("");
    for card in &view.cards {
        let el = render_card(document, card)?;
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("append card: {:?}", e))?;
    }
    dom::set_text(
        document,
        POSITION_LABEL_ID,
        &format!("{}{}", POSITION_PREFIX, view.position_label()),
    );
    dom::set_disabled(document, BACK_BUTTON_ID, !view.can_move_backward);
    dom::set_disabled(document, FORWARD_BUTTON_ID, !view.can_move_forward);
    Ok(())
}

fn render_card(document: &web::Document, card: &CardLayout<'_>) -> anyhow::Result<web::Element> {
    let exhibit = card.exhibit;
    let el = dom::create(document, "div", "card")?;
    _ = el.set_attribute(EXHIBIT_ID_ATTR, &exhibit.id.to_string());
    _ = el.set_attribute(
        "style",
        &format!(
            "{} opacity: {}; z-index: {};",
            card_transform(card.offset.x, card.offset.y, card.scale),
            card.opacity,
            card.z_index
        ),
    );
    dom::set_class(&el, SELECTABLE_CLASS, card.selectable);

    let img = dom::create(document, "img", "card-image")?;
    _ = img.set_attribute("src", exhibit.images[0]);
    _ = img.set_attribute("alt", exhibit.name);
    let title = dom::create(document, "h3", "card-title")?;
    title.set_text_content(Some(exhibit.name));
    let era = dom::create(document, "p", "card-era")?;
    era.set_text_content(Some(exhibit.era));

    let append = |child: &web::Element| {
        el.append_child(child)
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("append: {:?}", e))
    };
    append(&img)?;
    append(&title)?;
    append(&era)?;
    if card.selectable {
        let hint = dom::create(document, "span", "card-hint")?;
        hint.set_text_content(Some(VIEW_HINT_TEXT));
        append(&hint)?;
    }
    Ok(el)
}

fn render_detail(document: &web::Document, view: &DetailView<'_>) -> anyhow::Result<()> {
    let exhibit = view.exhibit;
    dom::set_text(document, DETAIL_TITLE_ID, exhibit.name);
    dom::set_text(document, DETAIL_ERA_ID, exhibit.era);
    dom::set_text(document, DETAIL_DESCRIPTION_ID, exhibit.description);
    dom::set_text(document, DETAIL_INFO_ID, exhibit.detailed_info);
    dom::set_text(document, DETAIL_AUDIO_TEXT_ID, exhibit.audio_guide);

    let image = dom::element(document, DETAIL_IMAGE_ID)?;
    _ = image.set_attribute("src", view.image);
    _ = image.set_attribute("alt", exhibit.name);

    let dots = dom::element(document, DETAIL_DOTS_ID)?;
    dots.set_inner_html("");
    for i in 0..exhibit.images.len() {
        let dot = dom::create(document, "button", "dot")?;
        _ = dot.set_attribute(IMAGE_INDEX_ATTR, &i.to_string());
        dom::set_class(&dot, ACTIVE_DOT_CLASS, i == view.image_index);
        dots.append_child(&dot)
            .map_err(|e| anyhow::anyhow!("append dot: {:?}", e))?;
    }

    let button = dom::element(document, AUDIO_BUTTON_ID)?;
    let label = if view.audio_unavailable {
        UNAVAILABLE_LABEL
    } else if view.is_playing {
        STOP_LABEL
    } else {
        PLAY_LABEL
    };
    button.set_text_content(Some(label));
    dom::set_class(&button, PLAYING_CLASS, view.is_playing);
    dom::set_class(&button, UNAVAILABLE_CLASS, view.audio_unavailable);
    Ok(())
}
