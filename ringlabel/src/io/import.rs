use crate::geometry::primitives::{Point, Ring};
use crate::io::ext_repr::{ExtFixture, ExtRing};

/// Converts the external representation of a ring into the internal one.
///
/// Never fails: closure and vertex count are checked by the calculations that need them.
pub fn import_ring(ext_ring: &ExtRing) -> Ring {
    ext_ring.0.iter().map(|&p| Point::from(p)).collect()
}

pub fn import_fixture(ext_fixture: &ExtFixture) -> Ring {
    import_ring(&ext_fixture.ring)
}
