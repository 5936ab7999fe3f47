use std::cmp::Ordering;
use std::env;

// Instruction sets that provide a 4 x f32 vector register
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "sse" => 0,
            "neon" => 1,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse",
                target_arch: &["x86", "x86_64"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
}

// Reads the features rustc will actually compile for, so cross builds pick
// the target's instruction set and not the host's.
struct TargetDetector {
    arch: String,
    enabled: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_string)
            .collect();

        TargetDetector { arch, enabled }
    }
}

impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.target_arch.contains(&self.arch.as_str())
                && self.enabled.iter().any(|f| f == feature.name);
        }
    }
}

fn apply(features: &mut [CpuFeature]) {
    features.sort();

    // if no feature is detected, use the plain array implementation
    let cfg_flag = features
        .iter()
        .find(|cpu_feature| cpu_feature.detected)
        .map(|cpu_feature| cpu_feature.cfg_flag)
        .unwrap_or("fallback");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(sse)");
    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut features = CpuFeature::features();

    TargetDetector::from_env().detect_features(&mut features);

    apply(&mut features);
}
