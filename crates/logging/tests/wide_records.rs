//! Integration tests for log calls with many fields.
//!
//! Nothing here raises `recursion_limit`: wide records must expand under the
//! compiler's default limit.

use std::cell::Cell;

use logging::{Level, enabled, log, log_error};

/// Counts how many field values were evaluated.
#[derive(Default)]
struct Tally(Cell<u32>);

impl Tally {
    fn bump(&self) -> u32 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    fn count(&self) -> u32 {
        self.0.get()
    }
}

fn expected(level: Level, fields: u32) -> u32 {
    if enabled(level) { fields } else { 0 }
}

// ============================================================================
// Default Recursion Limit Tests
// ============================================================================

/// Verifies forty fields whose values are method calls expand and evaluate
/// each value once.
#[test]
fn forty_method_call_fields() {
    let tally = Tally::default();
    log_error!("wide record", f0, tally.bump(), f1, tally.bump(), f2, tally.bump(), f3, tally.bump(), f4, tally.bump(), f5, tally.bump(), f6, tally.bump(), f7, tally.bump(), f8, tally.bump(), f9, tally.bump(), f10, tally.bump(), f11, tally.bump(), f12, tally.bump(), f13, tally.bump(), f14, tally.bump(), f15, tally.bump(), f16, tally.bump(), f17, tally.bump(), f18, tally.bump(), f19, tally.bump(), f20, tally.bump(), f21, tally.bump(), f22, tally.bump(), f23, tally.bump(), f24, tally.bump(), f25, tally.bump(), f26, tally.bump(), f27, tally.bump(), f28, tally.bump(), f29, tally.bump(), f30, tally.bump(), f31, tally.bump(), f32, tally.bump(), f33, tally.bump(), f34, tally.bump(), f35, tally.bump(), f36, tally.bump(), f37, tally.bump(), f38, tally.bump(), f39, tally.bump());
    assert_eq!(tally.count(), expected(Level::Error, 40));
}

/// Verifies literal keys with expression values expand at the default limit.
#[test]
fn literal_keys_with_computed_values() {
    let tally = Tally::default();
    log!(Level::Error, "wide record", "key.0", tally.bump() * 2, "key.1", tally.bump() * 2, "key.2", tally.bump() * 2, "key.3", tally.bump() * 2, "key.4", tally.bump() * 2, "key.5", tally.bump() * 2, "key.6", tally.bump() * 2, "key.7", tally.bump() * 2, "key.8", tally.bump() * 2, "key.9", tally.bump() * 2, "key.10", tally.bump() * 2, "key.11", tally.bump() * 2, "key.12", tally.bump() * 2, "key.13", tally.bump() * 2, "key.14", tally.bump() * 2, "key.15", tally.bump() * 2, "key.16", tally.bump() * 2, "key.17", tally.bump() * 2, "key.18", tally.bump() * 2, "key.19", tally.bump() * 2, "key.20", tally.bump() * 2, "key.21", tally.bump() * 2, "key.22", tally.bump() * 2, "key.23", tally.bump() * 2, "key.24", tally.bump() * 2, "key.25", tally.bump() * 2, "key.26", tally.bump() * 2, "key.27", tally.bump() * 2, "key.28", tally.bump() * 2, "key.29", tally.bump() * 2, "key.30", tally.bump() * 2, "key.31", tally.bump() * 2);
    assert_eq!(tally.count(), expected(Level::Error, 32));
}

/// Verifies ninety-six plain `key, number` fields expand.
#[test]
fn ninety_six_plain_fields() {
    log_error!("plain record", k0, 0, k1, 1, k2, 2, k3, 3, k4, 4, k5, 5, k6, 6, k7, 7, k8, 8, k9, 9, k10, 10, k11, 11, k12, 12, k13, 13, k14, 14, k15, 15, k16, 16, k17, 17, k18, 18, k19, 19, k20, 20, k21, 21, k22, 22, k23, 23, k24, 24, k25, 25, k26, 26, k27, 27, k28, 28, k29, 29, k30, 30, k31, 31, k32, 32, k33, 33, k34, 34, k35, 35, k36, 36, k37, 37, k38, 38, k39, 39, k40, 40, k41, 41, k42, 42, k43, 43, k44, 44, k45, 45, k46, 46, k47, 47, k48, 48, k49, 49, k50, 50, k51, 51, k52, 52, k53, 53, k54, 54, k55, 55, k56, 56, k57, 57, k58, 58, k59, 59, k60, 60, k61, 61, k62, 62, k63, 63, k64, 64, k65, 65, k66, 66, k67, 67, k68, 68, k69, 69, k70, 70, k71, 71, k72, 72, k73, 73, k74, 74, k75, 75, k76, 76, k77, 77, k78, 78, k79, 79, k80, 80, k81, 81, k82, 82, k83, 83, k84, 84, k85, 85, k86, 86, k87, 87, k88, 88, k89, 89, k90, 90, k91, 91, k92, 92, k93, 93, k94, 94, k95, 95);
}

/// Verifies a disabled wide call evaluates nothing.
#[test]
fn disabled_wide_call_is_inert() {
    let tally = Tally::default();
    log!(Level::None, "never", f0, tally.bump(), f1, tally.bump(), f2, tally.bump(), f3, tally.bump(), f4, tally.bump(), f5, tally.bump(), f6, tally.bump(), f7, tally.bump(), f8, tally.bump(), f9, tally.bump(), f10, tally.bump(), f11, tally.bump(), f12, tally.bump(), f13, tally.bump(), f14, tally.bump(), f15, tally.bump(), f16, tally.bump(), f17, tally.bump(), f18, tally.bump(), f19, tally.bump(), f20, tally.bump(), f21, tally.bump(), f22, tally.bump(), f23, tally.bump(), f24, tally.bump(), f25, tally.bump(), f26, tally.bump(), f27, tally.bump(), f28, tally.bump(), f29, tally.bump(), f30, tally.bump(), f31, tally.bump(), f32, tally.bump(), f33, tally.bump(), f34, tally.bump(), f35, tally.bump(), f36, tally.bump(), f37, tally.bump(), f38, tally.bump(), f39, tally.bump());
    assert_eq!(tally.count(), 0);
}
