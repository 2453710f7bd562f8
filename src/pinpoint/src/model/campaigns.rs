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

//! Campaigns, their treatments and activities.

use super::messages::MessageConfiguration;
use super::settings::{CampaignHook, CampaignLimits, QuietTime};
use std::collections::BTreeMap;
use wire::{BoolCodec, IntegerCodec, ListCodec, MapCodec, Nested, StringCodec};

wire::shape! {
    /// The schedule of a campaign.
    pub struct Schedule = "Schedule" {
        /// ISO 8601 date and time.
        pub end_time: String => "EndTime" as StringCodec,
        /// `ONCE`, `HOURLY`, `DAILY`, `WEEKLY`, `MONTHLY` or `EVENT`.
        pub frequency: String => "Frequency" as StringCodec,
        pub is_local_time: bool => "IsLocalTime" as BoolCodec,
        pub quiet_time: QuietTime => "QuietTime" as Nested::<QuietTime>::new(),
        /// ISO 8601 date and time, or `IMMEDIATE`.
        pub start_time: String => "StartTime" as StringCodec,
        pub timezone: String => "Timezone" as StringCodec,
    }
}

wire::shape! {
    /// The status of a campaign.
    pub struct CampaignState = "CampaignState" {
        /// `SCHEDULED`, `EXECUTING`, `PENDING_NEXT_RUN`, `COMPLETED`,
        /// `PAUSED`, `DELETED` or `INVALID`.
        pub campaign_status: String => "CampaignStatus" as StringCodec,
    }
}

wire::shape! {
    /// A treatment of a campaign, as returned by the service.
    pub struct TreatmentResource = "TreatmentResource" {
        pub id: String => "Id" as StringCodec,
        pub message_configuration: MessageConfiguration => "MessageConfiguration" as Nested::<MessageConfiguration>::new(),
        pub schedule: Schedule => "Schedule" as Nested::<Schedule>::new(),
        /// The allocated percentage of users (segment members) that the
        /// treatment is sent to.
        pub size_percent: i32 => "SizePercent" as IntegerCodec,
        pub state: CampaignState => "State" as Nested::<CampaignState>::new(),
        pub treatment_description: String => "TreatmentDescription" as StringCodec,
        pub treatment_name: String => "TreatmentName" as StringCodec,
    }
}

wire::shape! {
    /// A treatment of a campaign, in a create or update request.
    pub struct WriteTreatmentResource = "WriteTreatmentResource" {
        pub message_configuration: MessageConfiguration => "MessageConfiguration" as Nested::<MessageConfiguration>::new(),
        pub schedule: Schedule => "Schedule" as Nested::<Schedule>::new(),
        pub size_percent: i32 => "SizePercent" as IntegerCodec,
        pub treatment_description: String => "TreatmentDescription" as StringCodec,
        pub treatment_name: String => "TreatmentName" as StringCodec,
    }
}

wire::shape! {
    /// The status, configuration and other settings of a campaign.
    pub struct CampaignResponse = "CampaignResponse" {
        pub additional_treatments: Vec<TreatmentResource> => "AdditionalTreatments" as ListCodec(Nested::<TreatmentResource>::new()),
        pub application_id: String => "ApplicationId" as StringCodec,
        pub arn: String => "Arn" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        /// The status of the default treatment.
        pub default_state: CampaignState => "DefaultState" as Nested::<CampaignState>::new(),
        pub description: String => "Description" as StringCodec,
        pub holdout_percent: i32 => "HoldoutPercent" as IntegerCodec,
        pub hook: CampaignHook => "Hook" as Nested::<CampaignHook>::new(),
        pub id: String => "Id" as StringCodec,
        pub is_paused: bool => "IsPaused" as BoolCodec,
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub limits: CampaignLimits => "Limits" as Nested::<CampaignLimits>::new(),
        pub message_configuration: MessageConfiguration => "MessageConfiguration" as Nested::<MessageConfiguration>::new(),
        pub name: String => "Name" as StringCodec,
        pub schedule: Schedule => "Schedule" as Nested::<Schedule>::new(),
        pub segment_id: String => "SegmentId" as StringCodec,
        pub segment_version: i32 => "SegmentVersion" as IntegerCodec,
        pub state: CampaignState => "State" as Nested::<CampaignState>::new(),
        pub tags: BTreeMap<String, String> => "tags" as MapCodec(StringCodec),
        pub treatment_description: String => "TreatmentDescription" as StringCodec,
        pub treatment_name: String => "TreatmentName" as StringCodec,
        pub version: i32 => "Version" as IntegerCodec,
    }
}

wire::shape! {
    /// A page of campaigns.
    pub struct CampaignsResponse = "CampaignsResponse" {
        pub item: Vec<CampaignResponse> => "Item" as ListCodec(Nested::<CampaignResponse>::new()),
        /// The token for the next page, absent on the last page.
        pub next_token: String => "NextToken" as StringCodec,
    }
}

wire::shape! {
    /// The configuration of a campaign, in a create or update request.
    pub struct WriteCampaignRequest = "WriteCampaignRequest" {
        pub additional_treatments: Vec<WriteTreatmentResource> => "AdditionalTreatments" as ListCodec(Nested::<WriteTreatmentResource>::new()),
        pub description: String => "Description" as StringCodec,
        pub holdout_percent: i32 => "HoldoutPercent" as IntegerCodec,
        pub hook: CampaignHook => "Hook" as Nested::<CampaignHook>::new(),
        pub is_paused: bool => "IsPaused" as BoolCodec,
        pub limits: CampaignLimits => "Limits" as Nested::<CampaignLimits>::new(),
        pub message_configuration: MessageConfiguration => "MessageConfiguration" as Nested::<MessageConfiguration>::new(),
        pub name: String => "Name" as StringCodec,
        pub schedule: Schedule => "Schedule" as Nested::<Schedule>::new(),
        pub segment_id: String => "SegmentId" as StringCodec,
        pub segment_version: i32 => "SegmentVersion" as IntegerCodec,
        pub tags: BTreeMap<String, String> => "tags" as MapCodec(StringCodec),
        pub treatment_description: String => "TreatmentDescription" as StringCodec,
        pub treatment_name: String => "TreatmentName" as StringCodec,
    }
}

wire::shape! {
    /// A single run of a campaign.
    pub struct ActivityResponse = "ActivityResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub campaign_id: String => "CampaignId" as StringCodec,
        pub end: String => "End" as StringCodec,
        pub id: String => "Id" as StringCodec,
        /// `SUCCESS` or `FAIL`.
        pub result: String => "Result" as StringCodec,
        pub scheduled_start: String => "ScheduledStart" as StringCodec,
        pub start: String => "Start" as StringCodec,
        pub state: String => "State" as StringCodec,
        pub successful_endpoint_count: i32 => "SuccessfulEndpointCount" as IntegerCodec,
        pub timezones_completed_count: i32 => "TimezonesCompletedCount" as IntegerCodec,
        pub timezones_total_count: i32 => "TimezonesTotalCount" as IntegerCodec,
        pub total_endpoint_count: i32 => "TotalEndpointCount" as IntegerCodec,
        pub treatment_id: String => "TreatmentId" as StringCodec,
    }
}

wire::shape! {
    /// A page of campaign runs.
    pub struct ActivitiesResponse = "ActivitiesResponse" {
        pub item: Vec<ActivityResponse> => "Item" as ListCodec(Nested::<ActivityResponse>::new()),
        pub next_token: String => "NextToken" as StringCodec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Message;
    use serde_json::json;
    use wire::Shape;
    type Result = anyhow::Result<()>;

    #[test]
    fn campaigns_page() -> Result {
        let input = json!({
            "Item": [
                {
                    "Id": "c1",
                    "Name": "spring",
                    "State": {"CampaignStatus": "SCHEDULED"},
                    "AdditionalTreatments": [{"Id": "t1", "SizePercent": 10}, null],
                    "tags": {"team": "growth"},
                },
                null,
                "not an object",
                {"Id": "c2"},
            ],
            "NextToken": "page-2",
        });
        let got = CampaignsResponse::from_json(input.to_string().as_bytes())?.expect("an object");
        let ids: Vec<_> = got
            .item
            .iter()
            .flatten()
            .map(|c| c.id.as_deref())
            .collect();
        assert_eq!(ids, [Some("c1"), Some("c2")]);
        let first = &got.item.as_ref().expect("items")[0];
        assert_eq!(
            first.state,
            Some(CampaignState::new().set_campaign_status("SCHEDULED"))
        );
        assert_eq!(
            first.additional_treatments,
            Some(vec![TreatmentResource::new().set_id("t1").set_size_percent(10)])
        );
        assert_eq!(
            first.tags,
            Some(BTreeMap::from([("team".to_string(), "growth".to_string())]))
        );
        assert_eq!(got.next_token.as_deref(), Some("page-2"));
        Ok(())
    }

    #[test]
    fn write_campaign() -> Result {
        let request = WriteCampaignRequest::new()
            .set_name("spring")
            .set_segment_id("s1")
            .set_message_configuration(
                MessageConfiguration::new()
                    .set_default_message(Message::new().set_body("hello")),
            )
            .set_schedule(Schedule::new().set_start_time("IMMEDIATE"));
        assert_eq!(
            request.to_json()?,
            r#"{"MessageConfiguration":{"DefaultMessage":{"Body":"hello"}},"Name":"spring","Schedule":{"StartTime":"IMMEDIATE"},"SegmentId":"s1"}"#
        );
        Ok(())
    }
}
