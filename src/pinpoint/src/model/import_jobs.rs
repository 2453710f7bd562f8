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

//! Jobs that import endpoint definitions from Amazon S3.

use wire::{BoolCodec, IntegerCodec, ListCodec, Nested, StringCodec};

wire::shape! {
    /// The settings of a new import job.
    pub struct ImportJobRequest = "ImportJobRequest" {
        /// Create a segment that contains the imported endpoints.
        pub define_segment: bool => "DefineSegment" as BoolCodec,
        pub external_id: String => "ExternalId" as StringCodec,
        /// `CSV` or `JSON`.
        pub format: String => "Format" as StringCodec,
        pub register_endpoints: bool => "RegisterEndpoints" as BoolCodec,
        /// The IAM role that authorizes reading from `s3_url`.
        pub role_arn: String => "RoleArn" as StringCodec,
        pub s3_url: String => "S3Url" as StringCodec,
        pub segment_id: String => "SegmentId" as StringCodec,
        pub segment_name: String => "SegmentName" as StringCodec,
    }
}

wire::shape! {
    /// The settings of an existing import job.
    pub struct ImportJobResource = "ImportJobResource" {
        pub define_segment: bool => "DefineSegment" as BoolCodec,
        pub external_id: String => "ExternalId" as StringCodec,
        pub format: String => "Format" as StringCodec,
        pub register_endpoints: bool => "RegisterEndpoints" as BoolCodec,
        pub role_arn: String => "RoleArn" as StringCodec,
        pub s3_url: String => "S3Url" as StringCodec,
        pub segment_id: String => "SegmentId" as StringCodec,
        pub segment_name: String => "SegmentName" as StringCodec,
    }
}

wire::shape! {
    /// The status and settings of an import job.
    pub struct ImportJobResponse = "ImportJobResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub completed_pieces: i32 => "CompletedPieces" as IntegerCodec,
        pub completion_date: String => "CompletionDate" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub definition: ImportJobResource => "Definition" as Nested::<ImportJobResource>::new(),
        pub failed_pieces: i32 => "FailedPieces" as IntegerCodec,
        /// Up to 100 of the errors that the job encountered.
        pub failures: Vec<String> => "Failures" as ListCodec(StringCodec),
        pub id: String => "Id" as StringCodec,
        /// `CREATED`, `INITIALIZING`, `PROCESSING`, `COMPLETING`,
        /// `COMPLETED`, `FAILING` or `FAILED`.
        pub job_status: String => "JobStatus" as StringCodec,
        pub total_failures: i32 => "TotalFailures" as IntegerCodec,
        pub total_pieces: i32 => "TotalPieces" as IntegerCodec,
        pub total_processed: i32 => "TotalProcessed" as IntegerCodec,
        pub job_type: String => "Type" as StringCodec,
    }
}

wire::shape! {
    /// A page of import jobs.
    pub struct ImportJobsResponse = "ImportJobsResponse" {
        pub item: Vec<ImportJobResponse> => "Item" as ListCodec(Nested::<ImportJobResponse>::new()),
        pub next_token: String => "NextToken" as StringCodec,
    }
}
