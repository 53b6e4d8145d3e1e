#![no_main]

use libfuzzer_sys::fuzz_target;
use tristim::{StressMethod, index_stress};

fuzz_target!(|data: Vec<(f32, f32)>| {
    let d_e: Vec<f64> = data.iter().map(|&(e, _)| e as f64).collect();
    let d_v: Vec<f64> = data.iter().map(|&(_, v)| v as f64).collect();
    if let Ok(stress) = index_stress(&d_e, &d_v, StressMethod::Garcia2007) {
        assert!(stress >= 0. || stress.is_nan());
    }
});
