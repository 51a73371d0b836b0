//! Compile-time checks on the traits exposed by public types.
use game_utils::{
    CursorWorldPosition, GridVec3, GroundPlane, RangeF32, RangeI32, WeightInputError,
};
use static_assertions::assert_impl_all;

assert_impl_all!(GridVec3: Copy, Send, Sync, std::hash::Hash, Ord, std::fmt::Display);
assert_impl_all!(RangeI32: Copy, serde::Serialize, serde::de::DeserializeOwned);
assert_impl_all!(RangeF32: Copy, serde::Serialize, serde::de::DeserializeOwned);
assert_impl_all!(WeightInputError: std::error::Error, Send, Sync, Copy);
assert_impl_all!(CursorWorldPosition: bevy::prelude::Resource, Default);
assert_impl_all!(GroundPlane: bevy::prelude::Resource, Default);

#[test]
fn grid_vec_serialises_as_struct() {
    let json = serde_json::to_string(&GridVec3::new(1, 2, 3)).expect("serialise grid vector");
    assert_eq!(json, r#"{"x":1,"y":2,"z":3}"#);
}
