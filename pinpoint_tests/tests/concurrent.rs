use pinpoint::config::Config;

use pinpoint_tests::{cases, data_subdir, encode_case, extract_dir};

#[test]
fn encodings_match_sequential() {
    let cases = cases(&data_subdir(vec!["encode"]));
    let config = &Config::default();

    let sequential = cases
        .iter()
        .map(|case| encode_case(case, config).unwrap().wcnf)
        .collect::<Vec<_>>();

    let concurrent = crossbeam::scope(|scope| {
        let handles = cases
            .iter()
            .map(|case| scope.spawn(move |_| encode_case(case, config).unwrap().wcnf))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    })
    .unwrap();

    assert_eq!(sequential, concurrent);
}

#[test]
fn extractions_share_definitions() {
    let dir = data_subdir(vec!["extract", "basic"]);
    let config = Config::default();
    let expected = extract_dir(&dir, &config).unwrap().fragment();

    crossbeam::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|_| {
                let extraction = extract_dir(&dir, &config).unwrap();
                assert_eq!(extraction.fragment(), expected);
            });
        }
    })
    .unwrap();
}
