// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Protocol-level tests for shapes declared outside the wire crate.

use pinpoint_wire::*;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use test_case::test_case;

type Result = anyhow::Result<()>;

shape! {
    /// Credentials for a channel.
    pub struct ChannelRequest = "ChannelRequest" {
        pub client_id: String => "ClientId" as StringCodec,
        pub client_secret: String => "ClientSecret" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
    }
}

shape! {
    pub struct Notification = "Notification" {
        pub title: String => "Title" as StringCodec,
        pub time_to_live: i32 => "TimeToLive" as IntegerCodec,
        pub data: BTreeMap<String, String> => "Data" as MapCodec(StringCodec),
        pub substitutions: BTreeMap<String, Vec<String>> =>
            "Substitutions" as MapCodec(ListCodec(StringCodec)),
        pub raw: bytes::Bytes => "RawContent" as BlobCodec,
        pub weight: f64 => "Weight" as DoubleCodec,
        pub sequence: i64 => "Sequence" as LongCodec,
    }
}

shape! {
    pub struct Envelope = "Envelope" {
        pub id: String => "Id" as StringCodec,
        pub notification: Notification => "Notification" as Nested::<Notification>::new(),
        pub channels: Vec<ChannelRequest> => "Channels" as ListCodec(Nested::<ChannelRequest>::new()),
        pub groups: Vec<BTreeMap<String, ChannelRequest>> =>
            "Groups" as ListCodec(MapCodec(Nested::<ChannelRequest>::new())),
        pub labels: Vec<Option<String>> => "Labels" as ListCodec(Nullable(StringCodec)),
        pub sent: time::OffsetDateTime => "SentDate" as TimestampCodec,
    }
}

fn json_of<T: Shape>(value: &T) -> anyhow::Result<Value> {
    Ok(serde_json::from_slice(&value.to_json_bytes()?)?)
}

#[test]
fn channel_request_scenario() -> Result {
    let request = ChannelRequest::new().set_client_id("id1").set_enabled(true);
    let json = request.to_json()?;
    assert_eq!(json, r#"{"ClientId":"id1","Enabled":true}"#);

    let got = ChannelRequest::from_json(json.as_bytes())?.expect("an object");
    assert_eq!(got.client_id.as_deref(), Some("id1"));
    assert_eq!(got.enabled, Some(true));
    assert_eq!(got.client_secret, None);
    Ok(())
}

#[test]
fn map_of_lists_scenario() -> Result {
    let input = json!({"Substitutions": {"a": ["x", "y"], "b": []}});
    let got = Notification::from_json(input.to_string().as_bytes())?.expect("an object");
    let want = BTreeMap::from([
        ("a".to_string(), vec!["x".to_string(), "y".to_string()]),
        ("b".to_string(), Vec::new()),
    ]);
    assert_eq!(got.substitutions, Some(want));
    assert_eq!(json_of(&got)?, input);
    Ok(())
}

fn full_envelope() -> Envelope {
    let channel = ChannelRequest::new()
        .set_client_id("c")
        .set_client_secret("s")
        .set_enabled(false);
    Envelope::new()
        .set_id("e-1")
        .set_notification(
            Notification::new()
                .set_title("Hello")
                .set_time_to_live(3600)
                .set_data([("k".to_string(), "v".to_string())])
                .set_substitutions([("name".to_string(), vec!["Ana".to_string()])])
                .set_raw(bytes::Bytes::from_static(b"raw payload"))
                .set_weight(0.75)
                .set_sequence(1_i64 << 40),
        )
        .set_channels([channel.clone(), ChannelRequest::new()])
        .set_groups([BTreeMap::from([("primary".to_string(), channel)]), BTreeMap::new()])
        .set_labels([Some("l1".to_string()), Some(String::new())])
        .set_sent(time::macros::datetime!(2024-03-01 12:00:00.250 UTC))
}

#[test]
fn round_trip() -> Result {
    let envelope = full_envelope();
    let json = envelope.to_json()?;
    let got = Envelope::from_json(json.as_bytes())?;
    assert_eq!(got, Some(envelope));
    Ok(())
}

#[test_case(Envelope::new().set_id("only"))]
#[test_case(Envelope::new().set_channels(Vec::<ChannelRequest>::new()))]
#[test_case(Envelope::new().set_notification(Notification::new()))]
#[test_case(full_envelope().set_or_clear_notification(None::<Notification>))]
fn round_trip_subsets(envelope: Envelope) -> Result {
    let json = envelope.to_json()?;
    assert_eq!(Envelope::from_json(json.as_bytes())?, Some(envelope));
    Ok(())
}

#[test]
fn absent_fields_are_omitted() -> Result {
    let envelope = Envelope::new().set_id("e-1").set_channels(Vec::<ChannelRequest>::new());
    let got = json_of(&envelope)?;
    assert_eq!(got, json!({"Id": "e-1", "Channels": []}));
    assert!(!envelope.to_json()?.contains("null"));
    Ok(())
}

#[test]
fn null_elements_are_dropped() -> Result {
    let envelope = Envelope::new().set_labels([Some("a".to_string()), None, Some("b".to_string())]);
    assert_eq!(json_of(&envelope)?, json!({"Labels": ["a", "b"]}));
    Ok(())
}

#[test]
fn unknown_fields_are_ignored() -> Result {
    let with_extra = json!({
        "ClientId": "id1",
        "Extra": {"Nested": [1, 2, {"x": null}]},
        "clientid": "near-miss",
        "Enabled": true,
    });
    let without = json!({"ClientId": "id1", "Enabled": true});
    let got = ChannelRequest::from_json(with_extra.to_string().as_bytes())?;
    let want = ChannelRequest::from_json(without.to_string().as_bytes())?;
    assert_eq!(got, want);
    Ok(())
}

#[test_case("null")]
#[test_case("42")]
#[test_case("\"text\"")]
#[test_case("true")]
#[test_case("[1,2]")]
fn non_object_is_absent(input: &str) -> Result {
    assert_eq!(ChannelRequest::from_json(input.as_bytes())?, None);
    Ok(())
}

#[test]
fn malformed_json_is_an_error() {
    let err = ChannelRequest::from_json(br#"{"ClientId": "#).unwrap_err();
    assert!(matches!(err, WireError::Syntax(_)), "{err:?}");
}

#[test]
fn singleton_across_threads() {
    let addresses: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| Envelope::codec() as *const ObjectCodec<Envelope> as usize))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread completes"))
            .collect()
    });
    let first = Envelope::codec() as *const ObjectCodec<Envelope> as usize;
    assert!(addresses.iter().all(|a| *a == first), "{addresses:?}");
}

#[test]
fn codecs_are_shareable() {
    static_assertions::assert_impl_all!(ObjectCodec<Envelope>: Send, Sync);
    static_assertions::assert_impl_all!(ListCodec<MapCodec<Nested<ChannelRequest>>>: Send, Sync, Copy);
    static_assertions::assert_impl_all!(Envelope: Send, Sync, Clone, Default);
}
