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

//! Endpoints: the destinations that messages are sent to.

use std::collections::BTreeMap;
use wire::{DoubleCodec, ListCodec, MapCodec, Nested, StringCodec};

wire::shape! {
    /// Demographic information about an endpoint.
    pub struct EndpointDemographic = "EndpointDemographic" {
        pub app_version: String => "AppVersion" as StringCodec,
        /// An ISO 639-1 language code followed by an ISO 3166-1 country code,
        /// for example `en_US`.
        pub locale: String => "Locale" as StringCodec,
        pub make: String => "Make" as StringCodec,
        pub model: String => "Model" as StringCodec,
        pub model_version: String => "ModelVersion" as StringCodec,
        pub platform: String => "Platform" as StringCodec,
        pub platform_version: String => "PlatformVersion" as StringCodec,
        pub timezone: String => "Timezone" as StringCodec,
    }
}

wire::shape! {
    /// Geographic information about an endpoint.
    pub struct EndpointLocation = "EndpointLocation" {
        pub city: String => "City" as StringCodec,
        /// An ISO 3166-1 alpha-2 or alpha-3 code.
        pub country: String => "Country" as StringCodec,
        pub latitude: f64 => "Latitude" as DoubleCodec,
        pub longitude: f64 => "Longitude" as DoubleCodec,
        pub postal_code: String => "PostalCode" as StringCodec,
        pub region: String => "Region" as StringCodec,
    }
}

wire::shape! {
    /// The user associated with an endpoint.
    pub struct EndpointUser = "EndpointUser" {
        pub user_attributes: BTreeMap<String, Vec<String>> => "UserAttributes" as MapCodec(ListCodec(StringCodec)),
        pub user_id: String => "UserId" as StringCodec,
    }
}

wire::shape! {
    /// The channel type, address and other settings of an endpoint, in a
    /// create or update request.
    pub struct EndpointRequest = "EndpointRequest" {
        /// The destination address, such as a device token or phone number.
        pub address: String => "Address" as StringCodec,
        pub attributes: BTreeMap<String, Vec<String>> => "Attributes" as MapCodec(ListCodec(StringCodec)),
        /// `GCM`, `APNS`, `ADM`, `SMS`, `EMAIL`, ...
        pub channel_type: String => "ChannelType" as StringCodec,
        pub demographic: EndpointDemographic => "Demographic" as Nested::<EndpointDemographic>::new(),
        /// ISO 8601 date and time.
        pub effective_date: String => "EffectiveDate" as StringCodec,
        pub endpoint_status: String => "EndpointStatus" as StringCodec,
        pub location: EndpointLocation => "Location" as Nested::<EndpointLocation>::new(),
        pub metrics: BTreeMap<String, f64> => "Metrics" as MapCodec(DoubleCodec),
        /// `ALL` to opt out of all messages, `NONE` to receive them.
        pub opt_out: String => "OptOut" as StringCodec,
        pub request_id: String => "RequestId" as StringCodec,
        pub user: EndpointUser => "User" as Nested::<EndpointUser>::new(),
    }
}

wire::shape! {
    /// The channel type, address and other settings of an endpoint.
    pub struct EndpointResponse = "EndpointResponse" {
        pub address: String => "Address" as StringCodec,
        pub application_id: String => "ApplicationId" as StringCodec,
        pub attributes: BTreeMap<String, Vec<String>> => "Attributes" as MapCodec(ListCodec(StringCodec)),
        pub channel_type: String => "ChannelType" as StringCodec,
        /// A number from 0-99 that the service assigns to the endpoint for
        /// A/B testing.
        pub cohort_id: String => "CohortId" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub demographic: EndpointDemographic => "Demographic" as Nested::<EndpointDemographic>::new(),
        pub effective_date: String => "EffectiveDate" as StringCodec,
        pub endpoint_status: String => "EndpointStatus" as StringCodec,
        pub id: String => "Id" as StringCodec,
        pub location: EndpointLocation => "Location" as Nested::<EndpointLocation>::new(),
        pub metrics: BTreeMap<String, f64> => "Metrics" as MapCodec(DoubleCodec),
        pub opt_out: String => "OptOut" as StringCodec,
        pub request_id: String => "RequestId" as StringCodec,
        pub user: EndpointUser => "User" as Nested::<EndpointUser>::new(),
    }
}

wire::shape! {
    /// An endpoint to create or update in a batch request.
    pub struct EndpointBatchItem = "EndpointBatchItem" {
        pub address: String => "Address" as StringCodec,
        pub attributes: BTreeMap<String, Vec<String>> => "Attributes" as MapCodec(ListCodec(StringCodec)),
        pub channel_type: String => "ChannelType" as StringCodec,
        pub demographic: EndpointDemographic => "Demographic" as Nested::<EndpointDemographic>::new(),
        pub effective_date: String => "EffectiveDate" as StringCodec,
        pub endpoint_status: String => "EndpointStatus" as StringCodec,
        /// The identifier of the endpoint.
        pub id: String => "Id" as StringCodec,
        pub location: EndpointLocation => "Location" as Nested::<EndpointLocation>::new(),
        pub metrics: BTreeMap<String, f64> => "Metrics" as MapCodec(DoubleCodec),
        pub opt_out: String => "OptOut" as StringCodec,
        pub request_id: String => "RequestId" as StringCodec,
        pub user: EndpointUser => "User" as Nested::<EndpointUser>::new(),
    }
}

wire::shape! {
    /// A batch of endpoints to create or update.
    pub struct EndpointBatchRequest = "EndpointBatchRequest" {
        pub item: Vec<EndpointBatchItem> => "Item" as ListCodec(Nested::<EndpointBatchItem>::new()),
    }
}
