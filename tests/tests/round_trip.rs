//! Randomized save/load round trips.

use csvbind_tests::prelude::*;
use pretty_assertions::assert_eq;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_configuration(rng: &mut StdRng, index: i32) -> DisplayConfiguration {
    configuration(
        index,
        rng.gen_range(0.0f32..100.0),
        rng.gen_range(0.0f32..100.0),
        rng.gen_range(-4096..4096),
        rng.gen_range(-4096..4096),
    )
}

fn random_info(rng: &mut StdRng, index: u8) -> DisplayInfo {
    let len = rng.gen_range(0..12);
    DisplayInfo {
        name: (&mut *rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect(),
        index,
        primary: rng.gen(),
        scale: rng.gen_range(0.5f64..4.0),
    }
}

#[test]
fn test_configurations_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x00c5_7b1d);
    let file = CsvFile::missing();
    let displays: Vec<_> = (0..64).map(|i| random_configuration(&mut rng, i)).collect();

    CsvStore::new().write_all(file.path(), &displays).unwrap();
    let back: Vec<DisplayConfiguration> = CsvStore::new().read_all(file.path()).unwrap();

    assert_eq!(back, displays);
}

#[test]
fn test_infos_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let file = CsvFile::missing();
    let displays: Vec<_> = (0..32).map(|i| random_info(&mut rng, i)).collect();

    CsvStore::new().write_all(file.path(), &displays).unwrap();
    let back: Vec<DisplayInfo> = CsvStore::new().read_all(file.path()).unwrap();

    assert_eq!(back, displays);
}

#[test]
fn test_appends_then_updates_round_trip() {
    // GIVEN
    let mut rng = StdRng::seed_from_u64(7);
    let file = CsvFile::with_contents("");
    let store = CsvStore::new();
    let mut displays: Vec<_> = (0..8).map(|i| random_configuration(&mut rng, i)).collect();

    // WHEN
    for display in &displays {
        store
            .write_one_where(file.path(), display, "index", WriteMode::Append)
            .unwrap();
    }
    for display in displays.iter_mut().filter(|d| d.index % 2 == 0) {
        *display = random_configuration(&mut rng, display.index);
        store
            .write_one_where(file.path(), display, "index", WriteMode::Update)
            .unwrap();
    }

    // THEN
    let back: Vec<DisplayConfiguration> = store.read_all(file.path()).unwrap();
    assert_eq!(back, displays);
}
