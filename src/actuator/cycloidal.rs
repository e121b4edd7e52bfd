//! Cycloidal reducer: discs, pin ring, eccentric sleeve and output flange.
//!
//! Every builder takes a small options struct whose `Default` is the stock 27-lobe,
//! 29-pin reducer on a Ø72 pin circle.

use crate::config::Resolution;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::profiles::CycloidDiscGeometry;
use crate::sketch::Sketch;
use crate::sketch::layers::Layered;
use crate::traits::CSGOps;

const OUTPUT_SLOT_COUNT: usize = 6;
const OUTPUT_SLOT_WIDTH: Real = 6.5;
const OUTPUT_SLOT_LENGTH: Real = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycloidDisc {
    pub lobes: usize,
    pub pin_circle_dia: Real,
    pub thickness: Real,
    /// `None` picks `(pin_circle_dia - disc_od) / (2 * lobes)`.
    pub eccentricity: Option<Real>,
    /// Angular shift of the lobes, radians.
    pub phase: Real,
    pub bore_dia: Real,
}

impl Default for CycloidDisc {
    fn default() -> Self {
        CycloidDisc {
            lobes: 27,
            pin_circle_dia: 72.0,
            thickness: 10.0,
            eccentricity: None,
            phase: 0.0,
            bore_dia: 18.0,
        }
    }
}

impl CycloidDisc {
    pub fn geometry(&self) -> CycloidDiscGeometry {
        CycloidDiscGeometry::new(self.lobes, self.pin_circle_dia, self.eccentricity)
    }
}

/// One flat cycloid disc with a centre bore and six output-pin slots.
pub fn build_cycloid_disc(disc: &CycloidDisc, res: &Resolution) -> Mesh {
    let outline = Sketch::polygon(&disc.geometry().profile(disc.phase, res.cycloid_samples()));
    let slot_circle = (disc.pin_circle_dia - 20.0) / 2.0;

    let slots = Sketch::union_all(
        &(0..OUTPUT_SLOT_COUNT)
            .map(|i| {
                let ang = i as Real * 360.0 / OUTPUT_SLOT_COUNT as Real;
                Sketch::rectangle(OUTPUT_SLOT_WIDTH, OUTPUT_SLOT_LENGTH)
                    .translate(slot_circle, 0.0)
                    .rotate(ang)
            })
            .collect::<Vec<_>>(),
    );

    outline
        .difference(&Sketch::circle(disc.bore_dia / 2.0, res.segments))
        .difference(&slots)
        .extrude(disc.thickness)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinRing {
    pub pin_count: usize,
    pub pin_diameter: Real,
    pub pin_circle_dia: Real,
    pub thickness: Real,
}

impl Default for PinRing {
    fn default() -> Self {
        PinRing {
            pin_count: 29,
            pin_diameter: 6.1,
            pin_circle_dia: 72.0,
            thickness: 8.0,
        }
    }
}

/// Rigid ring plate drilled for the steel pins.
pub fn build_pin_ring(ring: &PinRing, res: &Resolution) -> Mesh {
    let pcr = ring.pin_circle_dia / 2.0;
    Sketch::ring(pcr + 2.0 * ring.pin_diameter, pcr - ring.pin_diameter, res.segments)
        .difference(
            &Sketch::circle(ring.pin_diameter / 2.0, res.hole_segments).polar_pattern(
                ring.pin_count,
                pcr,
                0.0,
            ),
        )
        .extrude(ring.thickness)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EccentricSleeve {
    pub eccentricity: Real,
    pub shaft_dia: Real,
    pub boss_dia: Real,
    pub length: Real,
}

impl Default for EccentricSleeve {
    fn default() -> Self {
        EccentricSleeve {
            eccentricity: 2.7,
            shaft_dia: 15.0,
            boss_dia: 18.0,
            length: 20.0,
        }
    }
}

/// Sleeve turning motor rotation into the disc wobble, offset +X by the eccentricity.
pub fn build_eccentric_sleeve(sleeve: &EccentricSleeve, res: &Resolution) -> Mesh {
    Sketch::ring(sleeve.boss_dia / 2.0, sleeve.shaft_dia / 2.0, res.segments)
        .extrude(sleeve.length)
        .translate(sleeve.eccentricity, 0.0, 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputFlange {
    pub pin_count: usize,
    pub pin_diameter: Real,
    pub pin_circle_dia: Real,
    pub thickness: Real,
    pub bore_dia: Real,
    pub mount_hole_count: usize,
    /// Clearance for M3.
    pub mount_hole_diameter: Real,
    /// `None` puts the holes 3 mm inside the boss wall.
    pub mount_circle_dia: Option<Real>,
}

impl Default for OutputFlange {
    fn default() -> Self {
        OutputFlange {
            pin_count: 6,
            pin_diameter: 6.1,
            pin_circle_dia: 50.0,
            thickness: 8.0,
            bore_dia: 25.0,
            mount_hole_count: 6,
            mount_hole_diameter: 3.4,
            mount_circle_dia: None,
        }
    }
}

/// Slip fit in the 40 mm inner race.
pub const OUTPUT_BOSS_DIA: Real = 39.6;
const OUTPUT_BOSS_UP: Real = 8.0;

/// Output plate with the six output pins, a bearing boss below and a coupling boss above.
pub fn build_output_flange(flange: &OutputFlange, res: &Resolution) -> Mesh {
    let t = flange.thickness;
    let boss_down = t / 2.0;
    let top = t + OUTPUT_BOSS_UP;
    let boss = Sketch::circle(OUTPUT_BOSS_DIA / 2.0, res.segments);

    let mut part = Layered::new()
        .add(
            Sketch::circle(flange.pin_circle_dia / 2.0 + 8.0, res.segments),
            0.0,
            t,
        )
        .add(boss.clone(), -boss_down, 0.0)
        .add(boss, t, top)
        .cut(
            Sketch::circle(flange.bore_dia / 2.0, res.segments),
            -boss_down,
            top,
        );

    if flange.mount_hole_count > 0 && flange.mount_hole_diameter > 0.0 {
        let circle = flange.mount_circle_dia.unwrap_or(OUTPUT_BOSS_DIA - 6.0);
        part = part.cut(
            Sketch::circle(flange.mount_hole_diameter / 2.0, res.hole_segments).polar_pattern(
                flange.mount_hole_count,
                circle / 2.0,
                0.0,
            ),
            -boss_down,
            top,
        );
    }

    part.cut(
        Sketch::circle(flange.pin_diameter / 2.0, res.hole_segments).polar_pattern(
            flange.pin_count,
            flange.pin_circle_dia / 2.0,
            0.0,
        ),
        0.0,
        t,
    )
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disc_envelope() {
        let disc = CycloidDisc::default();
        let g = disc.geometry();
        assert!((g.eccentricity - 6.0 / 54.0).abs() < 1e-12);
        let mesh = build_cycloid_disc(&disc, &Resolution::default());
        let bb = mesh.bounding_box();
        assert!((bb.maxs.z - 10.0).abs() < 1e-9);
        // lobe peak at theta = 0 with zero phase
        assert!((bb.maxs.x - (g.base_radius + g.eccentricity)).abs() < 1e-3);
        assert!(mesh.volume() > 0.0);
    }

    #[test]
    fn bore_and_slots_are_cut_through() {
        let disc = CycloidDisc::default();
        let res = Resolution::default();
        let blank = Sketch::polygon(&disc.geometry().profile(0.0, res.cycloid_samples())).area();
        let bore = Sketch::circle(9.0, res.segments).area();
        let slots = 6.0 * OUTPUT_SLOT_WIDTH * OUTPUT_SLOT_LENGTH;
        let expected = 10.0 * (blank - bore - slots);
        let volume = build_cycloid_disc(&disc, &res).volume();
        assert!((volume - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn zero_cycloid_steps_still_builds_a_disc() {
        let res = Resolution {
            cycloid_steps: 0,
            ..Resolution::default()
        };
        let mesh = build_cycloid_disc(&CycloidDisc::default(), &res);
        assert!(!mesh.polygons.is_empty());
        assert!(mesh.volume() > 0.0);
    }

    #[test]
    fn pin_ring_keeps_its_bore() {
        let ring = PinRing::default();
        let res = Resolution::with_segments(32);
        let mesh = build_pin_ring(&ring, &res);
        let core = Mesh::cylinder(ring.pin_circle_dia / 2.0 - ring.pin_diameter - 0.5, 8.0, 32);
        assert!(mesh.intersection(&core).volume().abs() < 1e-6);
        assert!((mesh.bounding_box().maxs.x - (36.0 + 12.2)).abs() < 1e-3);
    }

    #[test]
    fn sleeve_is_offset_by_the_eccentricity() {
        let sleeve = build_eccentric_sleeve(&EccentricSleeve::default(), &Resolution::default());
        let c = sleeve.bounding_box().center();
        assert!((c.x - 2.7).abs() < 1e-6);
        assert!(c.y.abs() < 1e-6);
        assert!((sleeve.bounding_box().maxs.z - 20.0).abs() < 1e-9);
    }

    #[test]
    fn output_flange_spans_both_bosses() {
        let flange = build_output_flange(&OutputFlange::default(), &Resolution::default());
        let bb = flange.bounding_box();
        assert!((bb.mins.z + 4.0).abs() < 1e-9);
        assert!((bb.maxs.z - 16.0).abs() < 1e-9);
        assert!((bb.maxs.x - 33.0).abs() < 1e-3);
    }
}
