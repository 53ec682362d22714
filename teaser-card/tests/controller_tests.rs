use std::sync::{Arc, Mutex};
use std::time::Duration;

use teaser_card::{
    char_len, truncate, CardController, CardInput, CardPayload, CardType, NotificationKind,
    RevealConfig, INGRESS_MAX_CHARS,
};
use tokio::time::Instant;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn long_card() -> CardController {
    CardController::mount(
        CardInput::new(1, "Test Title", LOREM)
            .with_image("Test Image")
            .with_card_type(CardType::HorizontalCard),
    )
}

fn recorder(card: &mut CardController) -> Arc<Mutex<Vec<(NotificationKind, CardPayload)>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    for kind in [NotificationKind::Media, NotificationKind::Content] {
        let seen = seen.clone();
        card.on(kind, move |payload| {
            seen.lock().unwrap().push((kind, payload.clone()));
        });
    }
    seen
}

#[tokio::test(start_paused = true)]
async fn test_mount_shows_truncated_ingress() {
    let card = long_card();

    assert!(!card.is_hovered());
    assert_eq!(card.display().ingress, truncate(LOREM, INGRESS_MAX_CHARS));
    assert_eq!(char_len(card.display().ingress), 120);
}

#[tokio::test(start_paused = true)]
async fn test_hover_reveals_full_ingress_within_duration() {
    let mut card = long_card();
    let start = Instant::now();

    card.pointer_enter();
    let mut last_len = char_len(card.display().ingress);
    let mut steps = 0;
    while card.step().await {
        let len = char_len(card.display().ingress);
        assert!(len >= last_len);
        assert!(LOREM.starts_with(card.display().ingress));
        last_len = len;
        steps += 1;
    }

    assert_eq!(card.display().ingress, LOREM);
    assert!(card.is_hovered());
    assert_eq!(steps, 30);
    assert!(start.elapsed() <= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_first_step_waits_one_interval() {
    let mut card = long_card();
    card.pointer_enter();

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(card.process_pending(), 0);
    assert_eq!(char_len(card.display().ingress), 120);

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(card.process_pending(), 1);
    assert!(char_len(card.display().ingress) > 120);
}

#[tokio::test(start_paused = true)]
async fn test_leave_mid_reveal_snaps_back_and_stops() {
    let mut card = long_card();
    card.pointer_enter();
    for _ in 0..3 {
        assert!(card.step().await);
    }
    assert!(char_len(card.display().ingress) > 120);

    card.pointer_leave();

    assert!(!card.is_hovered());
    assert!(!card.is_revealing());
    assert_eq!(card.display().ingress, truncate(LOREM, INGRESS_MAX_CHARS));

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(card.process_pending(), 0);
    assert_eq!(card.display().ingress, truncate(LOREM, INGRESS_MAX_CHARS));
}

#[tokio::test(start_paused = true)]
async fn test_step_already_queued_at_leave_is_ignored() {
    let mut card = long_card();
    card.pointer_enter();

    // The first step fires but is not processed yet.
    tokio::time::sleep(Duration::from_millis(60)).await;
    card.pointer_leave();

    assert_eq!(card.process_pending(), 1);
    assert_eq!(card.display().ingress, truncate(LOREM, INGRESS_MAX_CHARS));
}

#[tokio::test(start_paused = true)]
async fn test_duplicate_enter_does_not_double_steps() {
    let mut card = long_card();
    card.pointer_enter();
    card.pointer_enter();
    card.pointer_enter();

    let mut steps = 0;
    while card.step().await {
        steps += 1;
    }
    assert_eq!(steps, 30);
    assert_eq!(card.process_pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_reenter_after_leave_restarts_from_baseline() {
    let mut card = long_card();
    card.pointer_enter();
    card.step().await;
    card.pointer_leave();

    card.pointer_enter();
    assert_eq!(char_len(card.display().ingress), 120);
    card.settle().await;
    assert_eq!(card.display().ingress, LOREM);
}

#[tokio::test(start_paused = true)]
async fn test_title_truncated_at_rest_and_on_hover() {
    let title = "This is a very long text that should be truncated when displayed in the component.";
    let mut card = CardController::mount(CardInput::new(1, title, LOREM));

    assert_eq!(card.display().title, "This is a very long text that ");
    card.pointer_enter();
    card.settle().await;
    assert_eq!(card.display().title, "This is a very long text that ");
}

#[tokio::test(start_paused = true)]
async fn test_clicks_notify_exactly_once_with_full_title() {
    let title = "Card Title longer than 30 characters";
    let mut card = CardController::mount(
        CardInput::new(7, title, "Ingress")
            .with_image("https://example.com/fjord.jpg")
            .with_card_type(CardType::VerticalCard),
    );
    let seen = recorder(&mut card);

    card.click_media();
    card.click_content();

    let seen = seen.lock().unwrap();
    let expected = CardPayload {
        title: title.to_string(),
        id: 7,
    };
    assert_eq!(
        *seen,
        vec![
            (NotificationKind::Media, expected.clone()),
            (NotificationKind::Content, expected),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_media_click_without_image_is_silent() {
    let mut card = CardController::mount(
        CardInput::new(1, "Test Title", "Ingress").with_card_type(CardType::HorizontalCard),
    );
    let seen = recorder(&mut card);

    card.click_media();

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_handlers_registered_by_name() {
    let mut card = long_card();
    let ids = Arc::new(Mutex::new(Vec::new()));
    let sink = ids.clone();
    card.on_name("action_content", move |payload| sink.lock().unwrap().push(payload.id))
        .expect("known notification");
    assert!(card.on_name("action_hover", |_| {}).is_err());

    card.click_content();
    card.click_content();

    assert_eq!(*ids.lock().unwrap(), vec![1, 1]);
}

#[tokio::test(start_paused = true)]
async fn test_input_update_while_hovered() {
    let mut card = long_card();
    card.pointer_enter();
    card.step().await;

    let longer = format!("{LOREM} {LOREM}");
    card.update_input(CardInput::new(1, "Test Title", longer.as_str()));

    assert!(card.is_hovered());
    assert_eq!(card.display().ingress, truncate(&longer, INGRESS_MAX_CHARS));
    card.settle().await;
    assert_eq!(card.display().ingress, longer);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing() {
    let config = RevealConfig {
        step_interval: Duration::from_millis(100),
        duration: Duration::from_millis(500),
    };
    let mut card = CardController::with_config(CardInput::new(1, "T", LOREM), config);
    let start = Instant::now();

    card.pointer_enter();
    card.settle().await;

    assert_eq!(card.display().ingress, LOREM);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(400), "finished early: {elapsed:?}");
    assert!(elapsed <= Duration::from_millis(500), "finished late: {elapsed:?}");
}
