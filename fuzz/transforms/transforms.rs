#![no_main]

use libfuzzer_sys::fuzz_target;
use tristim::{
    ColourArray, IzazbzMethod, JzazbzConstants, MATRIX_JZAZBZ_XYZ_TO_LMS, Method,
    RgbConversionOptions, Vector3d, ipt_hue_angle, ipt_to_xyz, izazbz_to_xyz, jzazbz_to_xyz,
    srgb_to_xyz, xyz_to_ipt, xyz_to_izazbz, xyz_to_jzazbz, xyz_to_srgb,
};

fn unit(bits: u64) -> f64 {
    bits as f64 / u64::MAX as f64
}

fn assert_round_trip(name: &str, back: &ColourArray, xyz: &ColourArray, tolerance: f64) {
    let diff = back.max_abs_diff(xyz);
    assert!(
        diff.is_some_and(|d| d < tolerance),
        "{} round trip of {:?} drifted by {:?}",
        name,
        xyz.data(),
        diff
    );
}

fuzz_target!(|data: (u64, u64, u64, u8)| {
    let [x, y, z] = [unit(data.0), unit(data.1), unit(data.2)];
    let xyz = ColourArray::from([x, y, z]);
    let method = IzazbzMethod::ALL[data.3 as usize % IzazbzMethod::ALL.len()];

    let ipt = xyz_to_ipt(&xyz).unwrap();
    assert_round_trip("IPT", &ipt_to_xyz(&ipt).unwrap(), &xyz, 1e-9);
    let hue = ipt_hue_angle(&ipt).unwrap();
    assert!(hue.data().iter().all(|h| (0. ..360.).contains(h) || h.is_nan()));

    // ST 2084 cannot encode negative pre-adapted cone responses
    let k = JzazbzConstants::SAFDAR_2017;
    let cones = MATRIX_JZAZBZ_XYZ_TO_LMS.mul_vector(Vector3d {
        v: [k.b * x - (k.b - 1.) * z, k.g * y - (k.g - 1.) * x, z],
    });
    let izazbz = xyz_to_izazbz(&xyz, None, method).unwrap();
    let jzazbz = xyz_to_jzazbz(&xyz, &k).unwrap();
    if cones.v.iter().all(|&c| c >= 0.) {
        assert_round_trip(
            method.name(),
            &izazbz_to_xyz(&izazbz, None, method).unwrap(),
            &xyz,
            1e-6,
        );
        assert_round_trip("Jzazbz", &jzazbz_to_xyz(&jzazbz, &k).unwrap(), &xyz, 1e-6);
    }

    let options = RgbConversionOptions::default();
    let rgb = xyz_to_srgb(&xyz, &options).unwrap();
    // published sRGB matrices are only inverse to four decimals
    assert_round_trip("sRGB", &srgb_to_xyz(&rgb, &options).unwrap(), &xyz, 1e-3);
});
