use geohash_range::*;

/// Deterministic sweep of coordinates across the globe, poles and
/// antimeridian included.
fn sample_coordinates() -> Vec<(f64, f64)> {
    let mut coords = vec![
        (-23.5505, -46.6333),
        (40.7128, -74.0060),
        (51.5074, -0.1278),
        (35.6762, 139.6503),
        (-33.8688, 151.2093),
        (90.0, 180.0),
        (-90.0, -180.0),
        (0.0, 0.0),
    ];
    for i in 0..24 {
        for j in 0..24 {
            let lat = -89.37 + i as f64 * 7.731;
            let lon = -179.41 + j as f64 * 15.377;
            coords.push((lat, lon));
        }
    }
    coords
}

#[test]
fn test_scenario_encode_integer() {
    assert_eq!(encode_value(228644876657266), "6gyf4bf8mk");
}

#[test]
fn test_scenario_encode_coordinate() {
    assert_eq!(encode(-23.5505, -46.6333).unwrap(), "6gyf4bf8mk");
    assert_eq!(encode_int(-23.5505, -46.6333, 50).unwrap(), 228644876657266);
}

#[test]
fn test_scenario_decode() {
    let coord = decode("6gyf4bf8mk").unwrap();
    assert_eq!(coord.to_array(), [-23.550501, -46.633299]);
}

#[test]
fn test_scenario_bounds() {
    let bbox = bounds("6gyf4bf8mk").unwrap();
    assert_eq!(bbox.sw().to_array(), [-23.550503253936768, -46.63330435752869]);
    assert_eq!(bbox.ne().to_array(), [-23.550497889518738, -46.63329362869263]);
}

#[test]
fn test_scenario_range() {
    let two_corners = range("6u4", "6gx").unwrap();
    let shorthand = range_shorthand("6u4-gx").unwrap();

    assert_eq!(two_corners, shorthand);
    assert_eq!(two_corners.len(), 18);
    for hash in ["6u4", "6gx", "6gf"] {
        assert!(two_corners.contains(hash), "missing {}", hash);
    }
    assert!(two_corners.iter().all(|h| h.len() == 3));
}

#[test]
fn test_scenario_range_length_mismatch() {
    assert!(range("7p9", "pn").is_none());
}

#[test]
fn test_round_trip_inside_bounds() {
    for (lat, lon) in sample_coordinates() {
        for depth in (5..=60).step_by(5) {
            let hash = encode_with_depth(lat, lon, depth).unwrap();
            let bbox = bounds(&hash).unwrap();

            assert!(
                bbox.contains(&Coordinate::new(lat, lon)),
                "({}, {}) not inside bounds of {}",
                lat,
                lon,
                hash
            );

            let center = decode_with_precision(&hash, MAX_PRECISION).unwrap();
            assert!(bbox.contains(&center), "center of {} outside its bounds", hash);
        }
    }
}

#[test]
fn test_default_precision_center_inside_coarse_cells() {
    for (lat, lon) in sample_coordinates() {
        for depth in (5..=30).step_by(5) {
            let hash = encode_with_depth(lat, lon, depth).unwrap();
            let center = decode(&hash).unwrap();
            assert!(bounds(&hash).unwrap().contains(&center));
        }
    }
}

#[test]
fn test_integer_string_equivalence() {
    for (lat, lon) in sample_coordinates() {
        for depth in (5..=60).step_by(5) {
            let hash = encode_with_depth(lat, lon, depth).unwrap();
            let value = encode_int(lat, lon, depth).unwrap();
            assert_eq!(decode_int(&hash).unwrap(), value, "hash {}", hash);
            assert_eq!(bounds_int(value), bounds(&encode_value(value)).unwrap());
        }
    }
}

#[test]
fn test_bounds_monotonic_under_extension() {
    let alphabet = "0123456789bcdefghjkmnpqrstuvwxyz";
    for prefix in ["6", "6g", "6gy", "s", "zz", "0000"] {
        let parent = bounds(prefix).unwrap();
        let mut children_area = 0.0;
        for symbol in alphabet.chars() {
            let child = bounds(&format!("{}{}", prefix, symbol)).unwrap();
            assert!(parent.contains_box(&child), "{}{} escapes {}", prefix, symbol, prefix);
            children_area += child.width() * child.height();
        }
        let parent_area = parent.width() * parent.height();
        assert!((children_area - parent_area).abs() <= parent_area * 1e-9);
    }
}

#[test]
fn test_hash_prefix_matches_shallower_encode() {
    for (lat, lon) in sample_coordinates() {
        let full = encode_with_depth(lat, lon, 60).unwrap();
        for chars in 1..12 {
            let shorter = encode_with_depth(lat, lon, chars * 5).unwrap();
            assert_eq!(&full[..chars as usize], shorter);
        }
    }
}

#[test]
fn test_range_matches_brute_force() {
    let alphabet: Vec<char> = "0123456789bcdefghjkmnpqrstuvwxyz".chars().collect();
    // `from` is the north-west corner, `to` the south-east one.
    let corners = [
        ("6u4", "6gx"),
        ("9q8", "9mu"),
        ("dr4", "dr5"),
        ("u0h", "spn"),
        ("b", "p"),
    ];

    for (from, to) in corners {
        let nw = bounds(from).unwrap();
        let se = bounds(to).unwrap();
        let span = BoundingBox::new(se.min_lat(), nw.min_lon(), nw.max_lat(), se.max_lon());

        let mut expected = RangeResult::default();
        let mut frontier = vec![String::new()];
        for _ in 0..from.len() {
            frontier = frontier
                .iter()
                .flat_map(|p| alphabet.iter().map(move |c| format!("{}{}", p, c)))
                .filter(|h| {
                    let cell = bounds(h).unwrap();
                    cell.max_lat() > span.min_lat()
                        && cell.min_lat() < span.max_lat()
                        && cell.max_lon() > span.min_lon()
                        && cell.min_lon() < span.max_lon()
                })
                .collect();
        }
        expected.extend(frontier);

        let actual = range(from, to).unwrap();
        assert_eq!(actual, expected, "range {}..{}", from, to);
        assert!(actual.contains(from) && actual.contains(to));
    }
}

#[test]
fn test_range_cells_tile_the_span() {
    let cells = range("6u4", "6gx").unwrap();
    let area: f64 = cells
        .iter()
        .map(|h| bounds(h).unwrap())
        .map(|b| b.width() * b.height())
        .sum();

    let nw = bounds("6u4").unwrap();
    let se = bounds("6gx").unwrap();
    let span = BoundingBox::new(se.min_lat(), nw.min_lon(), nw.max_lat(), se.max_lon());
    assert!((area - span.width() * span.height()).abs() < 1e-9);
}

#[test]
fn test_codec_builder_end_to_end() {
    let codec = CodecBuilder::new().hash_len(5).precision(3).build().unwrap();
    let hash = codec.encode(-23.5505, -46.6333).unwrap();
    assert_eq!(hash, "6gyf4");

    let center = codec.decode(&hash).unwrap();
    assert_eq!(center, decode_with_precision("6gyf4", 3).unwrap());

    let value = codec.encode_int(-23.5505, -46.6333).unwrap();
    assert_eq!(codec.decode_value(value).unwrap(), center);
}
