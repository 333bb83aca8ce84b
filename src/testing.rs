//! Strategies shared by the property tests.

use crate::{quaternion::Quaternion, vector::Vector3};
use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

prop_compose! {
    /// Unit quaternions for rotations by any angle about any axis.
    pub(crate) fn rotation_strategy()(
        polar in 0.0..PI,
        azimuth in 0.0..TAU,
        angle in -TAU..TAU,
    ) -> Quaternion {
        let axis = Vector3::new(
            polar.sin() * azimuth.cos(),
            polar.sin() * azimuth.sin(),
            polar.cos(),
        );
        let half_angle = 0.5 * angle;
        Quaternion::from_parts(half_angle.cos(), axis.scaled(half_angle.sin()))
    }
}

prop_compose! {
    pub(crate) fn vector_strategy(max_component: f64)(
        x in -max_component..max_component,
        y in -max_component..max_component,
        z in -max_component..max_component,
    ) -> Vector3 {
        Vector3::new(x, y, z)
    }
}
