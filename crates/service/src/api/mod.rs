use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use common::prelude::OperationDescriptor;

pub mod profile;
pub mod room;
pub mod tag;

/// Service prefix of every operation target
pub const SERVICE: &str = "RoomService";

/// A command's parameter record, bound to one remote operation.
///
/// The record serializes under its local parameter names; the request it
/// builds serializes under the remote member names.
pub trait Operation: fmt::Debug + Serialize + Clone + Send + Sync + 'static {
    type Request: Serialize + Send;
    type Response: DeserializeOwned + Serialize + Send;

    const DESCRIPTOR: &'static OperationDescriptor;

    /// Copies every set parameter into its request member. Must be pure.
    fn build_request(&self) -> Self::Request;
}

/// Every operation this crate binds, in listing order.
pub const DESCRIPTORS: &[&OperationDescriptor] = &[
    room::CreateRoom::DESCRIPTOR,
    room::GetRoom::DESCRIPTOR,
    room::UpdateRoom::DESCRIPTOR,
    room::DeleteRoom::DESCRIPTOR,
    room::SearchRooms::DESCRIPTOR,
    profile::CreateProfile::DESCRIPTOR,
    profile::GetProfile::DESCRIPTOR,
    profile::DeleteProfile::DESCRIPTOR,
    tag::TagResource::DESCRIPTOR,
    tag::UntagResource::DESCRIPTOR,
];

/// Finds a descriptor by verb-noun command name or operation name.
pub fn find_descriptor(name: &str) -> Option<&'static OperationDescriptor> {
    DESCRIPTORS.iter().copied().find(|d| d.is_named(name))
}
