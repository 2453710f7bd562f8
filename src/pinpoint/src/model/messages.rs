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

//! Message templates and payloads.

use std::collections::BTreeMap;
use wire::{BoolCodec, IntegerCodec, ListCodec, MapCodec, Nested, StringCodec};

wire::shape! {
    /// The settings for a one-time message sent through the GCM channel.
    pub struct GcmMessage = "GCMMessage" {
        /// The action to take when the recipient taps the notification:
        /// `OPEN_APP`, `DEEP_LINK` or `URL`.
        pub action: String => "Action" as StringCodec,
        pub body: String => "Body" as StringCodec,
        /// Identifies a group of messages that can be collapsed, so only the
        /// last message is shown when delivery resumes.
        pub collapse_key: String => "CollapseKey" as StringCodec,
        /// The JSON data payload to use for the notification, in the `data`
        /// object of the platform message.
        pub data: BTreeMap<String, String> => "Data" as MapCodec(StringCodec),
        pub icon_reference: String => "IconReference" as StringCodec,
        pub image_icon_url: String => "ImageIconUrl" as StringCodec,
        pub image_url: String => "ImageUrl" as StringCodec,
        /// `normal` or `high`.
        pub priority: String => "Priority" as StringCodec,
        /// The raw payload. Overrides all other message content.
        pub raw_content: String => "RawContent" as StringCodec,
        pub restricted_package_name: String => "RestrictedPackageName" as StringCodec,
        pub silent_push: bool => "SilentPush" as BoolCodec,
        pub small_image_icon_url: String => "SmallImageIconUrl" as StringCodec,
        pub sound: String => "Sound" as StringCodec,
        /// Default message variables, each with a list of values.
        pub substitutions: BTreeMap<String, Vec<String>> => "Substitutions" as MapCodec(ListCodec(StringCodec)),
        /// Seconds to keep the message if the device is offline.
        pub time_to_live: i32 => "TimeToLive" as IntegerCodec,
        pub title: String => "Title" as StringCodec,
        pub url: String => "Url" as StringCodec,
    }
}

wire::shape! {
    /// The content for a push notification in a campaign.
    pub struct Message = "Message" {
        pub action: String => "Action" as StringCodec,
        pub body: String => "Body" as StringCodec,
        pub image_icon_url: String => "ImageIconUrl" as StringCodec,
        pub image_small_icon_url: String => "ImageSmallIconUrl" as StringCodec,
        pub image_url: String => "ImageUrl" as StringCodec,
        pub json_body: String => "JsonBody" as StringCodec,
        pub media_url: String => "MediaUrl" as StringCodec,
        pub raw_content: String => "RawContent" as StringCodec,
        pub silent_push: bool => "SilentPush" as BoolCodec,
        pub time_to_live: i32 => "TimeToLive" as IntegerCodec,
        pub title: String => "Title" as StringCodec,
        pub url: String => "Url" as StringCodec,
    }
}

wire::shape! {
    /// The content for an SMS message in a campaign.
    pub struct CampaignSmsMessage = "CampaignSmsMessage" {
        pub body: String => "Body" as StringCodec,
        /// `TRANSACTIONAL` or `PROMOTIONAL`.
        pub message_type: String => "MessageType" as StringCodec,
        pub sender_id: String => "SenderId" as StringCodec,
    }
}

wire::shape! {
    /// The message content for each channel used by a campaign.
    pub struct MessageConfiguration = "MessageConfiguration" {
        pub adm_message: Message => "ADMMessage" as Nested::<Message>::new(),
        pub apns_message: Message => "APNSMessage" as Nested::<Message>::new(),
        pub baidu_message: Message => "BaiduMessage" as Nested::<Message>::new(),
        /// Used for channels without a channel-specific message.
        pub default_message: Message => "DefaultMessage" as Nested::<Message>::new(),
        pub gcm_message: Message => "GCMMessage" as Nested::<Message>::new(),
        pub sms_message: CampaignSmsMessage => "SMSMessage" as Nested::<CampaignSmsMessage>::new(),
    }
}

wire::shape! {
    /// The payload of error responses, and of some operations that do not
    /// return a resource.
    pub struct MessageBody = "MessageBody" {
        pub message: String => "Message" as StringCodec,
        pub request_id: String => "RequestID" as StringCodec,
    }
}
