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

//! Journeys: multi-step customer engagements.

use super::settings::QuietTime;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use wire::{BoolCodec, IntegerCodec, MapCodec, Nested, StringCodec, TimestampCodec};

wire::shape! {
    /// The sender of the email messages in a journey.
    pub struct JourneyEmailMessage = "JourneyEmailMessage" {
        pub from_address: String => "FromAddress" as StringCodec,
    }
}

wire::shape! {
    /// An activity that sends an email message.
    pub struct EmailMessageActivity = "EmailMessageActivity" {
        pub message_config: JourneyEmailMessage => "MessageConfig" as Nested::<JourneyEmailMessage>::new(),
        /// The identifier of the activity to perform next.
        pub next_activity: String => "NextActivity" as StringCodec,
        pub template_name: String => "TemplateName" as StringCodec,
        pub template_version: String => "TemplateVersion" as StringCodec,
    }
}

wire::shape! {
    /// An activity that stops a percentage of participants from continuing.
    pub struct HoldoutActivity = "HoldoutActivity" {
        pub next_activity: String => "NextActivity" as StringCodec,
        pub percentage: i32 => "Percentage" as IntegerCodec,
    }
}

wire::shape! {
    /// How long, or until when, a wait activity waits.
    pub struct WaitTime = "WaitTime" {
        /// An ISO 8601 duration.
        pub wait_for: String => "WaitFor" as StringCodec,
        /// An ISO 8601 date and time.
        pub wait_until: String => "WaitUntil" as StringCodec,
    }
}

wire::shape! {
    /// An activity that pauses the journey for participants.
    pub struct WaitActivity = "WaitActivity" {
        pub next_activity: String => "NextActivity" as StringCodec,
        pub wait_time: WaitTime => "WaitTime" as Nested::<WaitTime>::new(),
    }
}

wire::shape! {
    /// A step in a journey. Exactly one of the activity types is set.
    pub struct Activity = "Activity" {
        pub description: String => "Description" as StringCodec,
        pub email: EmailMessageActivity => "EMAIL" as Nested::<EmailMessageActivity>::new(),
        pub holdout: HoldoutActivity => "Holdout" as Nested::<HoldoutActivity>::new(),
        pub wait: WaitActivity => "Wait" as Nested::<WaitActivity>::new(),
    }
}

wire::shape! {
    /// Limits on the messages that a journey can send.
    pub struct JourneyLimits = "JourneyLimits" {
        pub daily_cap: i32 => "DailyCap" as IntegerCodec,
        pub endpoint_reentry_cap: i32 => "EndpointReentryCap" as IntegerCodec,
        pub messages_per_second: i32 => "MessagesPerSecond" as IntegerCodec,
    }
}

wire::shape! {
    /// When a journey starts and stops.
    pub struct JourneySchedule = "JourneySchedule" {
        pub end_time: OffsetDateTime => "EndTime" as TimestampCodec,
        pub start_time: OffsetDateTime => "StartTime" as TimestampCodec,
        pub timezone: String => "Timezone" as StringCodec,
    }
}

wire::shape! {
    /// A segment that participants must belong to.
    pub struct SegmentCondition = "SegmentCondition" {
        pub segment_id: String => "SegmentId" as StringCodec,
    }
}

wire::shape! {
    /// The segment that defines which users participate in a journey.
    pub struct StartCondition = "StartCondition" {
        pub description: String => "Description" as StringCodec,
        pub segment_start_condition: SegmentCondition => "SegmentStartCondition" as Nested::<SegmentCondition>::new(),
    }
}

wire::shape! {
    /// The configuration and other settings of a journey.
    pub struct JourneyResponse = "JourneyResponse" {
        /// The activities of the journey, keyed by activity identifier.
        pub activities: BTreeMap<String, Activity> => "Activities" as MapCodec(Nested::<Activity>::new()),
        pub application_id: String => "ApplicationId" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub id: String => "Id" as StringCodec,
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub limits: JourneyLimits => "Limits" as Nested::<JourneyLimits>::new(),
        /// Whether the schedule uses each participant's local time.
        pub local_time: bool => "LocalTime" as BoolCodec,
        pub name: String => "Name" as StringCodec,
        pub quiet_time: QuietTime => "QuietTime" as Nested::<QuietTime>::new(),
        /// An ISO 8601 duration.
        pub refresh_frequency: String => "RefreshFrequency" as StringCodec,
        pub schedule: JourneySchedule => "Schedule" as Nested::<JourneySchedule>::new(),
        /// The identifier of the first activity.
        pub start_activity: String => "StartActivity" as StringCodec,
        pub start_condition: StartCondition => "StartCondition" as Nested::<StartCondition>::new(),
        /// `DRAFT`, `ACTIVE`, `COMPLETED`, `CANCELLED` or `CLOSED`.
        pub state: String => "State" as StringCodec,
        /// Not used by the service.
        pub tags: BTreeMap<String, String> => "tags" as MapCodec(StringCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;
    use wire::Shape;
    type Result = anyhow::Result<()>;

    #[test]
    fn journey() -> Result {
        let input = json!({
            "Id": "j1",
            "State": "ACTIVE",
            "StartActivity": "a1",
            "Activities": {
                "a1": {"Holdout": {"Percentage": 10, "NextActivity": "a2"}},
                "a2": {"Wait": {"WaitTime": {"WaitFor": "PT1H"}, "NextActivity": "a3"}},
                "a3": {"EMAIL": {"TemplateName": "welcome", "MessageConfig": {"FromAddress": "a@b.c"}}},
            },
            "Schedule": {"StartTime": 1700000000.5, "EndTime": "2024-01-01T00:00:00Z"},
            "tags": {},
        });
        let got = JourneyResponse::from_json(input.to_string().as_bytes())?.expect("an object");
        let activities = got.activities.as_ref().expect("activities");
        assert_eq!(activities.len(), 3);
        assert_eq!(
            activities["a1"].holdout,
            Some(HoldoutActivity::new().set_percentage(10).set_next_activity("a2"))
        );
        assert_eq!(
            activities["a3"]
                .email
                .as_ref()
                .and_then(|e| e.message_config.as_ref())
                .and_then(|m| m.from_address.as_deref()),
            Some("a@b.c")
        );
        let schedule = got.schedule.as_ref().expect("a schedule");
        assert_eq!(schedule.start_time, Some(datetime!(2023-11-14 22:13:20.5 UTC)));
        assert_eq!(schedule.end_time, Some(datetime!(2024-01-01 00:00:00 UTC)));
        assert_eq!(got.tags, Some(BTreeMap::new()));
        Ok(())
    }

    #[test]
    fn schedule_timestamps() -> Result {
        let schedule = JourneySchedule::new()
            .set_start_time(datetime!(2023-11-14 22:13:20.123456 UTC))
            .set_timezone("UTC");
        assert_eq!(
            schedule.to_json()?,
            r#"{"StartTime":1700000000.123,"Timezone":"UTC"}"#
        );
        Ok(())
    }
}
