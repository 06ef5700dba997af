//! Behavioural tests for paginated denylist listings.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::num::NonZeroU32;
use std::sync::Mutex;

use notify_schema::{ListOfNotificationAddresses, NotificationType, decode, encode};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct PageWorld {
    json_input: Option<String>,
    page: Option<ListOfNotificationAddresses>,
}

impl PageWorld {
    fn page(&self) -> &ListOfNotificationAddresses {
        self.page.as_ref().expect("page should be decoded")
    }
}

#[fixture]
fn world() -> Mutex<PageWorld> {
    Mutex::new(PageWorld::default())
}

#[given("a listing page with a continuation token")]
fn a_listing_page_with_a_token(world: &Mutex<PageWorld>) {
    let mut world = world.lock().expect("world lock");
    world.json_input = Some(
        r#"{
            "addresses": [
                {"notificationType": "email", "notificationAddress": "a@example.com"},
                {"notificationType": "irc-channel", "notificationAddress": "&ops"}
            ],
            "continuationToken": "page-2"
        }"#
        .to_owned(),
    );
}

#[given("a listing page without a continuation token")]
fn a_listing_page_without_a_token(world: &Mutex<PageWorld>) {
    let mut world = world.lock().expect("world lock");
    world.json_input = Some(r#"{"addresses": []}"#.to_owned());
}

#[when("the page is decoded")]
fn the_page_is_decoded(world: &Mutex<PageWorld>) {
    let mut world = world.lock().expect("world lock");
    let json = world.json_input.clone().expect("JSON input should be set");
    let page = decode::<ListOfNotificationAddresses>(json.as_bytes()).expect("page decodes");
    world.page = Some(page);
}

#[then("the next page query echoes the token")]
fn the_next_page_query_echoes_the_token(world: &Mutex<PageWorld>) {
    let world = world.lock().expect("world lock");
    let page = world.page();
    let kinds: Vec<_> = page
        .addresses
        .iter()
        .map(|entry| entry.notification_type.clone())
        .collect();
    assert_eq!(kinds, [NotificationType::Email, NotificationType::IrcChannel]);

    let query = page.next_page(NonZeroU32::new(25)).expect("more pages follow");
    assert_eq!(
        query.query_pairs(),
        [
            ("continuationToken", "page-2".to_owned()),
            ("limit", "25".to_owned())
        ]
    );
}

#[then("there is no next page")]
fn there_is_no_next_page(world: &Mutex<PageWorld>) {
    let world = world.lock().expect("world lock");
    assert!(world.page().is_last_page());
    assert_eq!(world.page().next_page(NonZeroU32::new(25)), None);
}

#[then("re-encoding omits the continuation token")]
fn re_encoding_omits_the_token(world: &Mutex<PageWorld>) {
    let world = world.lock().expect("world lock");
    let bytes = encode(world.page()).expect("page encodes");
    assert_eq!(bytes, br#"{"addresses":[]}"#.to_vec());
}

#[scenario(
    path = "tests/features/denylist_pages.feature",
    name = "Page with a continuation token leads to another page"
)]
fn page_with_token_leads_to_another(world: Mutex<PageWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/denylist_pages.feature",
    name = "Page without a continuation token is the last page"
)]
fn page_without_token_is_last(world: Mutex<PageWorld>) {
    drop(world);
}
