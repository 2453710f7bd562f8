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

//! Push notification channels.

use wire::{BoolCodec, IntegerCodec, StringCodec};

wire::shape! {
    /// The credentials for the ADM (Amazon Device Messaging) channel of an
    /// application.
    pub struct AdmChannelRequest = "ADMChannelRequest" {
        /// The Client ID that you received from Amazon.
        pub client_id: String => "ClientId" as StringCodec,
        /// The Client Secret that you received from Amazon.
        pub client_secret: String => "ClientSecret" as StringCodec,
        /// Specifies whether to enable the channel for the application.
        pub enabled: bool => "Enabled" as BoolCodec,
    }
}

wire::shape! {
    /// The status and settings of the ADM channel for an application.
    pub struct AdmChannelResponse = "ADMChannelResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
        /// Not used. Retained for backwards compatibility.
        pub has_credential: bool => "HasCredential" as BoolCodec,
        pub id: String => "Id" as StringCodec,
        pub is_archived: bool => "IsArchived" as BoolCodec,
        pub last_modified_by: String => "LastModifiedBy" as StringCodec,
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        /// The type of messaging or notification platform, always `ADM`.
        pub platform: String => "Platform" as StringCodec,
        pub version: i32 => "Version" as IntegerCodec,
    }
}

wire::shape! {
    /// The credentials for the APNs (Apple Push Notification service) channel
    /// of an application.
    ///
    /// Use either a certificate and private key pair, or a token key with its
    /// identifiers.
    pub struct ApnsChannelRequest = "APNSChannelRequest" {
        /// The bundle identifier assigned to the iOS app.
        pub bundle_id: String => "BundleId" as StringCodec,
        /// The APNs client certificate, in PEM format.
        pub certificate: String => "Certificate" as StringCodec,
        /// `CERTIFICATE` or `TOKEN`.
        pub default_authentication_method: String => "DefaultAuthenticationMethod" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
        /// The private key for the APNs client certificate.
        pub private_key: String => "PrivateKey" as StringCodec,
        /// The identifier assigned to the Apple Developer Account team.
        pub team_id: String => "TeamId" as StringCodec,
        /// The authentication key, in `.p8` format.
        pub token_key: String => "TokenKey" as StringCodec,
        pub token_key_id: String => "TokenKeyId" as StringCodec,
    }
}

wire::shape! {
    /// The status and settings of the APNs channel for an application.
    pub struct ApnsChannelResponse = "APNSChannelResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub default_authentication_method: String => "DefaultAuthenticationMethod" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
        pub has_credential: bool => "HasCredential" as BoolCodec,
        /// Whether the channel is configured with a token key.
        pub has_token_key: bool => "HasTokenKey" as BoolCodec,
        pub id: String => "Id" as StringCodec,
        pub is_archived: bool => "IsArchived" as BoolCodec,
        pub last_modified_by: String => "LastModifiedBy" as StringCodec,
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub platform: String => "Platform" as StringCodec,
        pub version: i32 => "Version" as IntegerCodec,
    }
}

wire::shape! {
    /// The credentials for the GCM channel of an application. The channel
    /// sends push notifications through Firebase Cloud Messaging.
    pub struct GcmChannelRequest = "GCMChannelRequest" {
        /// The Web API Key, also referred to as an API key or server key.
        pub api_key: String => "ApiKey" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
    }
}

wire::shape! {
    /// The status and settings of the GCM channel for an application.
    pub struct GcmChannelResponse = "GCMChannelResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        /// The Web API Key. The service masks most of its value.
        pub credential: String => "Credential" as StringCodec,
        pub enabled: bool => "Enabled" as BoolCodec,
        pub has_credential: bool => "HasCredential" as BoolCodec,
        pub id: String => "Id" as StringCodec,
        pub is_archived: bool => "IsArchived" as BoolCodec,
        pub last_modified_by: String => "LastModifiedBy" as StringCodec,
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub platform: String => "Platform" as StringCodec,
        pub version: i32 => "Version" as IntegerCodec,
    }
}
