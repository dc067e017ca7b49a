use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::{RoomData, NOUN};
use crate::api::{Operation, SERVICE};

/// One page of a room search. Paging is the caller's job: pass the returned
/// `NextToken` back in.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct SearchRooms {
    /// Filter as KEY=V1,V2 (repeatable)
    #[cfg_attr(feature = "clap", arg(long = "filter", value_name = "KEY=V1,V2"))]
    #[serde(rename = "Filter")]
    pub filters: Vec<Filter>,

    /// Sort as KEY=ASC|DESC (repeatable)
    #[cfg_attr(
        feature = "clap",
        arg(long = "sort-criterion", value_name = "KEY=ORDER")
    )]
    #[serde(rename = "SortCriterion")]
    pub sort_criteria: Vec<SortCriterion>,

    /// Upper bound on rooms returned in this page
    #[cfg_attr(feature = "clap", arg(long = "max-result"))]
    #[serde(rename = "MaxResult")]
    pub max_results: Option<i32>,

    /// Token from a previous page
    #[cfg_attr(feature = "clap", arg(long))]
    pub next_token: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoomsRequest {
    pub filters: Option<Vec<Filter>>,
    pub sort_criteria: Option<Vec<SortCriterion>>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRoomsResponse {
    pub rooms: Option<Vec<RoomData>>,
    pub next_token: Option<String>,
    pub total_count: Option<i32>,
}

impl Operation for SearchRooms {
    type Request = SearchRoomsRequest;
    type Response = SearchRoomsResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "SearchRooms",
        verb: Verb::Find,
        noun: NOUN,
        request_type: "SearchRoomsRequest",
        response_type: "SearchRoomsResponse",
        parameters: &[
            ParameterBinding::new("Filter", ParamKind::FilterList).remote("Filters"),
            ParameterBinding::new("SortCriterion", ParamKind::SortList).remote("SortCriteria"),
            ParameterBinding::new("MaxResult", ParamKind::Integer).remote("MaxResults"),
            ParameterBinding::new("NextToken", ParamKind::String),
        ],
        response_fields: &["Rooms", "NextToken", "TotalCount"],
        default_output: DefaultOutput::Field("Rooms"),
        confirm_impact: ConfirmImpact::None,
        target_parameter: None,
        pass_through: None,
    };

    fn build_request(&self) -> SearchRoomsRequest {
        SearchRoomsRequest {
            filters: non_empty(&self.filters),
            sort_criteria: non_empty(&self.sort_criteria),
            max_results: self.max_results,
            next_token: self.next_token.clone(),
        }
    }
}
