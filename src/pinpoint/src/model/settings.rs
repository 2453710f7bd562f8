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

//! Application-wide settings.

use wire::{BoolCodec, IntegerCodec, Nested, StringCodec};

wire::shape! {
    /// A Lambda function that customizes the segment of a campaign.
    pub struct CampaignHook = "CampaignHook" {
        pub lambda_function_name: String => "LambdaFunctionName" as StringCodec,
        /// `DELIVERY` or `FILTER`.
        pub mode: String => "Mode" as StringCodec,
        pub web_url: String => "WebUrl" as StringCodec,
    }
}

wire::shape! {
    /// Limits on the messages that a campaign can send.
    pub struct CampaignLimits = "CampaignLimits" {
        /// The maximum number of messages sent to a single endpoint in a
        /// 24-hour period.
        pub daily: i32 => "Daily" as IntegerCodec,
        /// The maximum run time of a campaign, in seconds.
        pub maximum_duration: i32 => "MaximumDuration" as IntegerCodec,
        pub messages_per_second: i32 => "MessagesPerSecond" as IntegerCodec,
        pub total: i32 => "Total" as IntegerCodec,
    }
}

wire::shape! {
    /// The period, in the recipient's local time, when no messages are sent.
    ///
    /// Both values use the `HH:MM` format.
    pub struct QuietTime = "QuietTime" {
        pub end: String => "End" as StringCodec,
        pub start: String => "Start" as StringCodec,
    }
}

wire::shape! {
    /// The default settings for an application.
    pub struct ApplicationSettingsResource = "ApplicationSettingsResource" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub campaign_hook: CampaignHook => "CampaignHook" as Nested::<CampaignHook>::new(),
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub limits: CampaignLimits => "Limits" as Nested::<CampaignLimits>::new(),
        pub quiet_time: QuietTime => "QuietTime" as Nested::<QuietTime>::new(),
    }
}

wire::shape! {
    /// Changes to the default settings for an application.
    pub struct WriteApplicationSettingsRequest = "WriteApplicationSettingsRequest" {
        pub campaign_hook: CampaignHook => "CampaignHook" as Nested::<CampaignHook>::new(),
        pub cloud_watch_metrics_enabled: bool => "CloudWatchMetricsEnabled" as BoolCodec,
        pub limits: CampaignLimits => "Limits" as Nested::<CampaignLimits>::new(),
        pub quiet_time: QuietTime => "QuietTime" as Nested::<QuietTime>::new(),
    }
}
