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

//! The request types of each operation.
//!
//! Each request type implements [Operation] and adds a method to
//! [Pinpoint][crate::client::Pinpoint], named after the operation.

use crate::model::*;
use runtime::operation::Operation;
use runtime::request::RequestBuilder;
use runtime::transport::HttpTransport;
use wire::{Shape, Unmarshaller, WireReader};

macro_rules! operation {
    (
        $(#[$meta:meta])*
        $op:ident : $method:ident $path:literal -> $output:ty {
            $( path $pfield:ident = $pwire:literal ; )*
            $( query $qfield:ident = $qwire:literal ; )*
            $( body $bfield:ident : $bty:ty ; )?
        }
    ) => {
        pastey::paste! {
            #[doc = concat!("The request for the `", stringify!($op), "` operation.")]
            #[derive(Clone, Debug, Default, PartialEq)]
            #[non_exhaustive]
            pub struct [<$op Request>] {
                $(
                    #[doc = concat!("Substituted for `{", $pwire, "}` in the request path.")]
                    pub $pfield: Option<String>,
                )*
                $(
                    #[doc = concat!("Sent as the `", $qwire, "` query parameter.")]
                    pub $qfield: Option<String>,
                )*
                $(
                    /// The request body.
                    pub $bfield: Option<$bty>,
                )?
            }

            impl [<$op Request>] {
                pub fn new() -> Self {
                    Self::default()
                }

                $(
                    /// Sets the value of the path parameter.
                    pub fn [<set_ $pfield>]<V: Into<String>>(mut self, v: V) -> Self {
                        self.$pfield = Some(v.into());
                        self
                    }
                )*

                $(
                    /// Sets the value of the query parameter.
                    pub fn [<set_ $qfield>]<V: Into<String>>(mut self, v: V) -> Self {
                        self.$qfield = Some(v.into());
                        self
                    }
                )*

                $(
                    /// Sets the request body.
                    pub fn [<set_ $bfield>]<V: Into<$bty>>(mut self, v: V) -> Self {
                        self.$bfield = Some(v.into());
                        self
                    }
                )?
            }

            impl Operation for [<$op Request>] {
                type Output = $output;
                const NAME: &'static str = stringify!($op);

                fn request(&self) -> runtime::Result<RequestBuilder> {
                    let builder = RequestBuilder::new(http::Method::$method, $path)
                        $( .path_param($pwire, self.$pfield.as_deref()) )*
                        $( .query($qwire, &self.$qfield)? )*;
                    $( let builder = builder.json_body(<$bty as Shape>::codec(), self.$bfield.as_ref())?; )?
                    Ok(builder)
                }

                fn response(reader: &mut dyn WireReader) -> wire::Result<Self::Output> {
                    Ok(<$output as Shape>::codec().unmarshall(reader)?.unwrap_or_default())
                }
            }

            impl<T: HttpTransport> crate::client::Pinpoint<T> {
                $(#[$meta])*
                pub fn [<$op:snake>](&self, request: [<$op Request>]) -> crate::Result<$output> {
                    self.execute(&request)
                }
            }
        }
    };
}

// Campaigns

operation! {
    /// Creates a new campaign for an application.
    CreateCampaign: POST "/v1/apps/{application-id}/campaigns" -> CampaignResponse {
        path application_id = "application-id";
        body write_campaign_request: WriteCampaignRequest;
    }
}

operation! {
    /// Deletes a campaign from an application.
    DeleteCampaign: DELETE "/v1/apps/{application-id}/campaigns/{campaign-id}" -> CampaignResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
    }
}

operation! {
    /// Retrieves the status, configuration and other settings of a campaign.
    GetCampaign: GET "/v1/apps/{application-id}/campaigns/{campaign-id}" -> CampaignResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
    }
}

operation! {
    /// Lists the campaigns of an application.
    GetCampaigns: GET "/v1/apps/{application-id}/campaigns" -> CampaignsResponse {
        path application_id = "application-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Lists the runs of a campaign.
    GetCampaignActivities: GET "/v1/apps/{application-id}/campaigns/{campaign-id}/activities" -> ActivitiesResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Retrieves a specific version of a campaign.
    GetCampaignVersion: GET "/v1/apps/{application-id}/campaigns/{campaign-id}/versions/{version}" -> CampaignResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
        path version = "version";
    }
}

operation! {
    /// Lists the versions of a campaign.
    GetCampaignVersions: GET "/v1/apps/{application-id}/campaigns/{campaign-id}/versions" -> CampaignsResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Updates the configuration and other settings of a campaign.
    UpdateCampaign: PUT "/v1/apps/{application-id}/campaigns/{campaign-id}" -> CampaignResponse {
        path application_id = "application-id";
        path campaign_id = "campaign-id";
        body write_campaign_request: WriteCampaignRequest;
    }
}

// Segments

operation! {
    /// Creates a new segment for an application.
    CreateSegment: POST "/v1/apps/{application-id}/segments" -> SegmentResponse {
        path application_id = "application-id";
        body write_segment_request: WriteSegmentRequest;
    }
}

operation! {
    /// Deletes a segment from an application.
    DeleteSegment: DELETE "/v1/apps/{application-id}/segments/{segment-id}" -> SegmentResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
    }
}

operation! {
    /// Retrieves the configuration and other settings of a segment.
    GetSegment: GET "/v1/apps/{application-id}/segments/{segment-id}" -> SegmentResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
    }
}

operation! {
    /// Lists the segments of an application.
    GetSegments: GET "/v1/apps/{application-id}/segments" -> SegmentsResponse {
        path application_id = "application-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Retrieves a specific version of a segment.
    GetSegmentVersion: GET "/v1/apps/{application-id}/segments/{segment-id}/versions/{version}" -> SegmentResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
        path version = "version";
    }
}

operation! {
    /// Lists the versions of a segment.
    GetSegmentVersions: GET "/v1/apps/{application-id}/segments/{segment-id}/versions" -> SegmentsResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Lists the import jobs of a segment.
    GetSegmentImportJobs: GET "/v1/apps/{application-id}/segments/{segment-id}/jobs/import" -> ImportJobsResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
        query page_size = "page-size";
        query token = "token";
    }
}

operation! {
    /// Updates the configuration and other settings of a segment.
    UpdateSegment: PUT "/v1/apps/{application-id}/segments/{segment-id}" -> SegmentResponse {
        path application_id = "application-id";
        path segment_id = "segment-id";
        body write_segment_request: WriteSegmentRequest;
    }
}

// Import jobs

operation! {
    /// Creates an import job for an application.
    CreateImportJob: POST "/v1/apps/{application-id}/jobs/import" -> ImportJobResponse {
        path application_id = "application-id";
        body import_job_request: ImportJobRequest;
    }
}

operation! {
    /// Retrieves the status and settings of an import job.
    GetImportJob: GET "/v1/apps/{application-id}/jobs/import/{job-id}" -> ImportJobResponse {
        path application_id = "application-id";
        path job_id = "job-id";
    }
}

operation! {
    /// Lists the import jobs of an application.
    GetImportJobs: GET "/v1/apps/{application-id}/jobs/import" -> ImportJobsResponse {
        path application_id = "application-id";
        query page_size = "page-size";
        query token = "token";
    }
}

// Channels

operation! {
    /// Retrieves the status and settings of the ADM channel.
    GetAdmChannel: GET "/v1/apps/{application-id}/channels/adm" -> AdmChannelResponse {
        path application_id = "application-id";
    }
}

operation! {
    /// Enables the ADM channel, or updates its status and settings.
    UpdateAdmChannel: PUT "/v1/apps/{application-id}/channels/adm" -> AdmChannelResponse {
        path application_id = "application-id";
        body adm_channel_request: AdmChannelRequest;
    }
}

operation! {
    /// Disables the ADM channel and deletes its settings.
    DeleteAdmChannel: DELETE "/v1/apps/{application-id}/channels/adm" -> AdmChannelResponse {
        path application_id = "application-id";
    }
}

operation! {
    /// Retrieves the status and settings of the APNs channel.
    GetApnsChannel: GET "/v1/apps/{application-id}/channels/apns" -> ApnsChannelResponse {
        path application_id = "application-id";
    }
}

operation! {
    /// Enables the APNs channel, or updates its status and settings.
    UpdateApnsChannel: PUT "/v1/apps/{application-id}/channels/apns" -> ApnsChannelResponse {
        path application_id = "application-id";
        body apns_channel_request: ApnsChannelRequest;
    }
}

operation! {
    /// Disables the APNs channel and deletes its settings.
    DeleteApnsChannel: DELETE "/v1/apps/{application-id}/channels/apns" -> ApnsChannelResponse {
        path application_id = "application-id";
    }
}

operation! {
    /// Retrieves the status and settings of the GCM channel.
    GetGcmChannel: GET "/v1/apps/{application-id}/channels/gcm" -> GcmChannelResponse {
        path application_id = "application-id";
    }
}

operation! {
    /// Enables the GCM channel, or updates its status and settings.
    UpdateGcmChannel: PUT "/v1/apps/{application-id}/channels/gcm" -> GcmChannelResponse {
        path application_id = "application-id";
        body gcm_channel_request: GcmChannelRequest;
    }
}

operation! {
    /// Disables the GCM channel and deletes its settings.
    DeleteGcmChannel: DELETE "/v1/apps/{application-id}/channels/gcm" -> GcmChannelResponse {
        path application_id = "application-id";
    }
}

// Application settings

operation! {
    /// Retrieves the default settings of an application.
    GetApplicationSettings: GET "/v1/apps/{application-id}/settings" -> ApplicationSettingsResource {
        path application_id = "application-id";
    }
}

operation! {
    /// Updates the default settings of an application.
    UpdateApplicationSettings: PUT "/v1/apps/{application-id}/settings" -> ApplicationSettingsResource {
        path application_id = "application-id";
        body write_application_settings_request: WriteApplicationSettingsRequest;
    }
}

// Endpoints

operation! {
    /// Retrieves the settings and attributes of an endpoint.
    GetEndpoint: GET "/v1/apps/{application-id}/endpoints/{endpoint-id}" -> EndpointResponse {
        path application_id = "application-id";
        path endpoint_id = "endpoint-id";
    }
}

operation! {
    /// Creates or updates an endpoint.
    UpdateEndpoint: PUT "/v1/apps/{application-id}/endpoints/{endpoint-id}" -> MessageBody {
        path application_id = "application-id";
        path endpoint_id = "endpoint-id";
        body endpoint_request: EndpointRequest;
    }
}

operation! {
    /// Creates or updates a batch of endpoints.
    UpdateEndpointsBatch: PUT "/v1/apps/{application-id}/endpoints" -> MessageBody {
        path application_id = "application-id";
        body endpoint_batch_request: EndpointBatchRequest;
    }
}

// Journeys

operation! {
    /// Retrieves the status, configuration and other settings of a journey.
    GetJourney: GET "/v1/apps/{application-id}/journeys/{journey-id}" -> JourneyResponse {
        path application_id = "application-id";
        path journey_id = "journey-id";
    }
}
