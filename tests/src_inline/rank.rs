use super::*;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_compute_example() {
    let out = compute(&names(&["Bob", "Amy", "Cid"]), &[600, 100, 900]).unwrap();
    assert_eq!(out.sorted_names, names(&["Amy", "Bob", "Cid"]));
    assert_eq!(out.sorted_scores, vec![100, 600, 900]);
    assert_eq!(out.bravest, names(&["Bob", "Cid"]));
}

#[test]
fn test_compute_empty() {
    let out = compute(&[], &[]).unwrap();
    assert!(out.sorted_names.is_empty());
    assert!(out.sorted_scores.is_empty());
    assert!(out.bravest.is_empty());
}

#[test]
fn test_threshold_is_strict() {
    let out = compute(&names(&["Eve", "Moe"]), &[500, 501]).unwrap();
    assert_eq!(out.bravest, names(&["Moe"]));
}

#[test]
fn test_bravest_keeps_input_order_and_cap() {
    let input = names(&["G", "A", "F", "E", "D", "C", "B"]);
    let scores = vec![700, 100, 700, 700, 700, 700, 700];
    let out = compute(&input, &scores).unwrap();
    assert_eq!(out.bravest, names(&["G", "F", "E", "D", "C"]));
    assert_eq!(out.bravest.len(), BRAVEST_CAP);
}

#[test]
fn test_sorted_views_are_independent_permutations() {
    let input = names(&["Zed", "Ann"]);
    let scores = vec![10, 999];
    let out = compute(&input, &scores).unwrap();
    // "Ann" sorts first while 10 sorts first; the Zed/10 pairing is not
    // recoverable from the two views.
    assert_eq!(out.sorted_names, names(&["Ann", "Zed"]));
    assert_eq!(out.sorted_scores, vec![10, 999]);
}

#[test]
fn test_sorted_views_are_permutations_of_input() {
    let input = names(&["b", "c", "a", "c"]);
    let scores = vec![3, -7, 3, 0];
    let out = compute(&input, &scores).unwrap();

    let mut expected_names = input.clone();
    expected_names.sort();
    assert_eq!(out.sorted_names, expected_names);
    assert!(out.sorted_names.windows(2).all(|w| w[0] <= w[1]));

    let mut expected_scores = scores.clone();
    expected_scores.sort();
    assert_eq!(out.sorted_scores, expected_scores);
    assert!(out.sorted_scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_negative_scores_never_qualify() {
    let out = compute(&names(&["N"]), &[-600]).unwrap();
    assert!(out.bravest.is_empty());
}

#[test]
fn test_length_mismatch() {
    let err = compute(&names(&["A", "B"]), &[1]).unwrap_err();
    assert_eq!(err, RankError::LengthMismatch { names: 2, scores: 1 });
}

#[test]
fn test_pair_records() {
    let records = pair_records(names(&["A", "B"]), vec![1, 2]).unwrap();
    assert_eq!(
        records,
        vec![
            Record {
                name: "A".to_string(),
                score: 1
            },
            Record {
                name: "B".to_string(),
                score: 2
            },
        ]
    );
}

#[test]
fn test_pair_records_mismatch() {
    assert!(pair_records(names(&["A"]), vec![]).is_err());
}
