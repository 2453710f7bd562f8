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

//! Segments and their dimensions.

use std::collections::BTreeMap;
use wire::{DoubleCodec, IntegerCodec, ListCodec, MapCodec, Nested, StringCodec};

wire::shape! {
    /// A dimension that matches any of a list of values.
    pub struct SetDimension = "SetDimension" {
        /// `INCLUSIVE` or `EXCLUSIVE`.
        pub dimension_type: String => "DimensionType" as StringCodec,
        pub values: Vec<String> => "Values" as ListCodec(StringCodec),
    }
}

wire::shape! {
    /// A dimension on a custom attribute.
    pub struct AttributeDimension = "AttributeDimension" {
        pub attribute_type: String => "AttributeType" as StringCodec,
        pub values: Vec<String> => "Values" as ListCodec(StringCodec),
    }
}

wire::shape! {
    /// A dimension on a custom metric.
    pub struct MetricDimension = "MetricDimension" {
        /// `GREATER_THAN`, `LESS_THAN`, `GREATER_THAN_OR_EQUAL`,
        /// `LESS_THAN_OR_EQUAL` or `EQUAL`.
        pub comparison_operator: String => "ComparisonOperator" as StringCodec,
        pub value: f64 => "Value" as DoubleCodec,
    }
}

wire::shape! {
    /// Demographic dimensions of a segment.
    pub struct SegmentDemographics = "SegmentDemographics" {
        pub app_version: SetDimension => "AppVersion" as Nested::<SetDimension>::new(),
        pub channel: SetDimension => "Channel" as Nested::<SetDimension>::new(),
        pub device_type: SetDimension => "DeviceType" as Nested::<SetDimension>::new(),
        pub make: SetDimension => "Make" as Nested::<SetDimension>::new(),
        pub model: SetDimension => "Model" as Nested::<SetDimension>::new(),
        pub platform: SetDimension => "Platform" as Nested::<SetDimension>::new(),
    }
}

wire::shape! {
    /// The dimensions that define a dynamic segment.
    pub struct SegmentDimensions = "SegmentDimensions" {
        /// Endpoint attributes, keyed by attribute name.
        pub attributes: BTreeMap<String, AttributeDimension> => "Attributes" as MapCodec(Nested::<AttributeDimension>::new()),
        pub demographic: SegmentDemographics => "Demographic" as Nested::<SegmentDemographics>::new(),
        pub metrics: BTreeMap<String, MetricDimension> => "Metrics" as MapCodec(Nested::<MetricDimension>::new()),
        pub user_attributes: BTreeMap<String, AttributeDimension> => "UserAttributes" as MapCodec(Nested::<AttributeDimension>::new()),
    }
}

wire::shape! {
    /// The import job that created an imported segment.
    pub struct SegmentImportResource = "SegmentImportResource" {
        /// The number of endpoints imported for each channel type.
        pub channel_counts: BTreeMap<String, i32> => "ChannelCounts" as MapCodec(IntegerCodec),
        pub external_id: String => "ExternalId" as StringCodec,
        /// `CSV` or `JSON`.
        pub format: String => "Format" as StringCodec,
        pub role_arn: String => "RoleArn" as StringCodec,
        pub s3_url: String => "S3Url" as StringCodec,
        pub size: i32 => "Size" as IntegerCodec,
    }
}

wire::shape! {
    /// The configuration and other settings of a segment.
    pub struct SegmentResponse = "SegmentResponse" {
        pub application_id: String => "ApplicationId" as StringCodec,
        pub arn: String => "Arn" as StringCodec,
        pub creation_date: String => "CreationDate" as StringCodec,
        pub dimensions: SegmentDimensions => "Dimensions" as Nested::<SegmentDimensions>::new(),
        pub id: String => "Id" as StringCodec,
        pub import_definition: SegmentImportResource => "ImportDefinition" as Nested::<SegmentImportResource>::new(),
        pub last_modified_date: String => "LastModifiedDate" as StringCodec,
        pub name: String => "Name" as StringCodec,
        /// `DIMENSIONAL` or `IMPORT`.
        pub segment_type: String => "SegmentType" as StringCodec,
        pub tags: BTreeMap<String, String> => "tags" as MapCodec(StringCodec),
        pub version: i32 => "Version" as IntegerCodec,
    }
}

wire::shape! {
    /// A page of segments.
    pub struct SegmentsResponse = "SegmentsResponse" {
        pub item: Vec<SegmentResponse> => "Item" as ListCodec(Nested::<SegmentResponse>::new()),
        pub next_token: String => "NextToken" as StringCodec,
    }
}

wire::shape! {
    /// The configuration of a segment, in a create or update request.
    pub struct WriteSegmentRequest = "WriteSegmentRequest" {
        pub dimensions: SegmentDimensions => "Dimensions" as Nested::<SegmentDimensions>::new(),
        pub name: String => "Name" as StringCodec,
        pub tags: BTreeMap<String, String> => "tags" as MapCodec(StringCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wire::Shape;
    type Result = anyhow::Result<()>;

    #[test]
    fn dimensions() -> Result {
        let request = WriteSegmentRequest::new().set_name("vip").set_dimensions(
            SegmentDimensions::new()
                .set_demographic(
                    SegmentDemographics::new().set_platform(
                        SetDimension::new()
                            .set_dimension_type("INCLUSIVE")
                            .set_values(["android".to_string()]),
                    ),
                )
                .set_metrics([(
                    "spend".to_string(),
                    MetricDimension::new()
                        .set_comparison_operator("GREATER_THAN")
                        .set_value(99.5),
                )]),
        );
        let got: Value = serde_json::from_str(&request.to_json()?)?;
        let want = json!({
            "Dimensions": {
                "Demographic": {
                    "Platform": {"DimensionType": "INCLUSIVE", "Values": ["android"]},
                },
                "Metrics": {
                    "spend": {"ComparisonOperator": "GREATER_THAN", "Value": 99.5},
                },
            },
            "Name": "vip",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn import_definition() -> Result {
        let input = json!({
            "Id": "s1",
            "SegmentType": "IMPORT",
            "ImportDefinition": {
                "ChannelCounts": {"GCM": 3, "APNS": 2},
                "Format": "CSV",
                "Size": 5,
            },
        });
        let got = SegmentResponse::from_json(input.to_string().as_bytes())?.expect("an object");
        let import = got.import_definition.expect("an import definition");
        assert_eq!(
            import.channel_counts,
            Some(BTreeMap::from([
                ("APNS".to_string(), 2),
                ("GCM".to_string(), 3)
            ]))
        );
        assert_eq!(import.size, Some(5));
        Ok(())
    }
}
