// Integration tests for the detail/narration session.

mod common;

use common::FakeSpeech;
use museum_core::*;

#[test]
fn starts_closed_and_silent() {
    let (session, _) = common::session();
    assert!(!session.is_open());
    assert!(!session.is_playing());
    assert_eq!(session.current_image_index(), 0);
    assert!(session.current_image().is_none());
}

#[test]
fn play_uses_narration_text_language_and_rate() {
    let (mut session, speech) = common::session();
    let sword = common::exhibit(1);
    session.open(&sword);
    let ticket = session.play().unwrap();

    assert!(session.is_playing());
    let log = speech.log.borrow();
    assert_eq!(log.started.len(), 1);
    let (text, lang, rate, started_ticket) = &log.started[0];
    assert_eq!(text, sword.audio_guide);
    assert_eq!(lang, "ru-RU");
    assert!((rate - 0.9).abs() < f32::EPSILON);
    assert_eq!(*started_ticket, ticket);
}

#[test]
fn natural_completion_clears_playing() {
    let (mut session, speech) = common::session();
    session.open(&common::exhibit(2));
    let ticket = session.play().unwrap();
    speech.natural_end();
    assert!(session.finish_utterance(ticket));
    assert!(!session.is_playing());
    // Can play again afterwards.
    assert!(session.play().is_ok());
}

#[test]
fn stop_cancels_and_is_idempotent() {
    let (mut session, speech) = common::session();
    session.open(&common::exhibit(1));
    session.stop();
    assert_eq!(speech.log.borrow().cancels, 0);

    let ticket = session.play().unwrap();
    session.stop();
    assert!(!session.is_playing());
    assert_eq!(speech.log.borrow().cancels, 1);
    session.stop();
    assert_eq!(speech.log.borrow().cancels, 1);

    // A late end event for the cancelled utterance must not matter.
    assert!(!session.finish_utterance(ticket));
    assert!(!session.is_playing());
}

#[test]
fn play_while_playing_is_rejected_without_a_second_start() {
    let (mut session, speech) = common::session();
    session.open(&common::exhibit(3));
    session.play().unwrap();
    assert_eq!(session.play(), Err(GalleryError::AlreadyPlaying));
    let log = speech.log.borrow();
    assert_eq!(log.started.len(), 1);
    assert_eq!(log.max_outstanding, 1);
}

#[test]
fn play_requires_an_open_exhibit() {
    let (mut session, speech) = common::session();
    assert_eq!(session.play(), Err(GalleryError::NoExhibitSelected));
    assert!(speech.log.borrow().started.is_empty());
}

#[test]
fn opening_another_exhibit_cancels_the_previous_narration() {
    let (mut session, speech) = common::session();
    let a = common::exhibit(1);
    let b = common::exhibit(2);

    session.open(&a);
    session.select_image(1).unwrap();
    let ticket_a = session.play().unwrap();

    session.open(&b);
    assert_eq!(session.selected(), Some(&b));
    assert_eq!(session.current_image_index(), 0);
    assert!(!session.is_playing());
    assert_eq!(speech.log.borrow().cancels, 1);

    let ticket_b = session.play().unwrap();
    assert_ne!(ticket_a, ticket_b);
    // A's completion arrives late; B keeps playing.
    assert!(!session.finish_utterance(ticket_a));
    assert!(session.is_playing());
    assert_eq!(session.active_ticket(), Some(ticket_b));
    assert_eq!(speech.log.borrow().max_outstanding, 1);
}

#[test]
fn close_resets_everything() {
    let (mut session, speech) = common::session();
    session.open(&common::exhibit(4));
    session.select_image(1).unwrap();
    let ticket = session.play().unwrap();
    session.close();

    assert!(!session.is_open());
    assert!(!session.is_playing());
    assert_eq!(session.current_image_index(), 0);
    assert_eq!(speech.log.borrow().cancels, 1);
    assert!(!session.finish_utterance(ticket));
}

#[test]
fn out_of_range_image_indices_are_rejected() {
    let (mut session, _) = common::session();
    let vase = common::exhibit(2);
    assert_eq!(vase.images.len(), 2);
    session.open(&vase);

    session.select_image(1).unwrap();
    assert_eq!(session.current_image(), Some(vase.images[1]));
    assert_eq!(
        session.select_image(2),
        Err(GalleryError::InvalidImageIndex { index: 2, len: 2 })
    );
    assert_eq!(session.current_image_index(), 1);
    assert!(session.select_image(usize::MAX).is_err());
    assert_eq!(session.current_image_index(), 1);
}

#[test]
fn select_image_without_selection_is_rejected() {
    let (mut session, _) = common::session();
    assert_eq!(session.select_image(0), Err(GalleryError::NoExhibitSelected));
}

#[test]
fn unavailable_speech_is_reported_and_not_fatal() {
    let mut session = DetailSession::new(FakeSpeech::unavailable(), SpeechSettings::default());
    session.open(&common::exhibit(1));
    let err = session.play().unwrap_err();
    assert!(matches!(err, GalleryError::CapabilityUnavailable(_)));
    assert!(!session.is_playing());
    assert!(session.audio_unavailable());

    // The detail view still works.
    session.select_image(1).unwrap();
    session.close();
    assert!(!session.is_open());
}

#[test]
fn toggle_alternates_play_and_stop() {
    let (mut session, speech) = common::session();
    session.open(&common::exhibit(5));
    session.toggle_playback().unwrap();
    assert!(session.is_playing());
    session.toggle_playback().unwrap();
    assert!(!session.is_playing());
    session.toggle_playback().unwrap();
    let log = speech.log.borrow();
    assert_eq!(log.started.len(), 2);
    assert_eq!(log.cancels, 1);
    assert_eq!(log.max_outstanding, 1);
}
